use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use fst::automaton::Str;
use fst::{Automaton, IntoStreamer, Set};
use rayon::prelude::*;

use super::error::Result;
use crate::utils::word_list;

/// Index of a node inside a [`Trie`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Prefix tree node
#[derive(Debug, Default)]
struct TrieNode {
    next: HashMap<char, NodeId>,
    /// Marks the end of a word
    terminal: bool,
}

/// Prefix tree stored as an arena. Children always have a larger index than
/// their parent so the structure can not contain a cycle.
#[derive(Debug)]
pub struct Trie {
    nodes: Vec<TrieNode>,
}

impl Trie {
    pub const ROOT: NodeId = NodeId(0);
    /// Node with no children that is not terminal. Used when no word starts
    /// with a given letter.
    pub const EMPTY: NodeId = NodeId(1);

    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default(), TrieNode::default()],
        }
    }

    /// Adds a word to the trie. Empty words are ignored.
    pub fn add_word(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        let mut node = Self::ROOT;
        for c in word.chars() {
            node = match self.next_node(node, c) {
                Some(child) => child,
                None => {
                    let child = NodeId(self.nodes.len());
                    self.nodes.push(TrieNode::default());
                    self.nodes[node.0].next.insert(c, child);
                    child
                }
            };
        }
        self.nodes[node.0].terminal = true;
    }

    pub fn next_node(&self, node: NodeId, c: char) -> Option<NodeId> {
        self.nodes[node.0].next.get(&c).copied()
    }

    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.nodes[node.0].terminal
    }

    /// Walks the trie from the root along the word
    pub fn walk(&self, word: &str) -> Option<NodeId> {
        word.chars()
            .try_fold(Self::ROOT, |node, c| self.next_node(node, c))
    }

    pub fn contains(&self, word: &str) -> bool {
        !word.is_empty() && self.walk(word).map_or(false, |n| self.is_terminal(n))
    }

    /// Number of nodes, including the root and the empty node
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable set of lowercase words together with its prefix tree
pub struct Dictionary {
    words: Set<Vec<u8>>,
    trie: Trie,
}

impl Dictionary {
    /// Builds the dictionary. Words are lowercased, and empty or duplicate
    /// entries are dropped.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // fst needs its input sorted and unique
        let entries: BTreeSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        let mut trie = Trie::new();
        for word in entries.iter() {
            trie.add_word(word);
        }
        let words = Set::from_iter(entries)?;
        Ok(Self { words, trie })
    }

    /// Reads and sanitizes a word list file, one word per line
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let words = word_list::read_word_file(path)?;
        Self::new(words)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Case insensitive membership test
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word.to_lowercase())
    }

    /// Returns a new dictionary holding only the words accepted by the
    /// predicate. The predicate runs on the rayon pool.
    pub fn filter<F>(&self, predicate: F) -> Result<Self>
    where
        F: Fn(&str) -> bool + Sync,
    {
        let kept = self
            .words()
            .into_par_iter()
            .filter(|w| predicate(w.as_str()))
            .collect::<Vec<_>>();
        Self::new(kept)
    }

    /// All words. Callers should not rely on the order.
    pub fn words(&self) -> Vec<String> {
        Self::into_strings(self.words.stream().into_bytes())
    }

    /// All words beginning with the given prefix
    pub fn words_starting_with(&self, prefix: &str) -> Vec<String> {
        let matcher = Str::new(prefix).starts_with();
        Self::into_strings(self.words.search(matcher).into_stream().into_bytes())
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    fn into_strings(raw: Vec<Vec<u8>>) -> Vec<String> {
        // Only valid utf8 is ever inserted
        raw.into_iter()
            .filter_map(|w| String::from_utf8(w).ok())
            .collect()
    }
}

impl std::fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dictionary")
            .field("len", &self.len())
            .field("trie_nodes", &self.trie.num_nodes())
            .finish()
    }
}
