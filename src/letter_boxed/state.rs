use std::collections::HashSet;
use std::fmt;

use super::dictionary::{NodeId, Trie};
use super::game::{DotCounting, Game};

/// Ordering key of a state, lower is explored first: fewest words, then
/// fewest unused dots, then fewest letters placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority {
    pub num_words: usize,
    pub unused_dots: usize,
    pub num_letters: usize,
}

/// Identity of a state for deduplication
pub type StateKey = (Vec<usize>, Vec<char>, String);

/// Snapshot of a partially solved puzzle. Transitions build a new state and
/// leave the old one untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    /// Position in the game's trie matching `word_in_progress`
    node: NodeId,
    /// Every placed letter. The connecting letter between two words is only
    /// placed once.
    letters: Vec<char>,
    words: Vec<String>,
    word_in_progress: String,
    /// Edge used by each letter in `letters`
    edges: Vec<usize>,
}

impl SearchState {
    pub fn initial() -> Self {
        Self {
            node: Trie::ROOT,
            letters: Vec::new(),
            words: Vec::new(),
            word_in_progress: String::new(),
            edges: Vec::new(),
        }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn word_in_progress(&self) -> &str {
        &self.word_in_progress
    }

    pub fn edges(&self) -> &[usize] {
        &self.edges
    }

    pub fn last_edge(&self) -> Option<usize> {
        self.edges.last().copied()
    }

    /// An edge can be used as long as it was not the last one used
    pub fn is_valid_next_edge(&self, edge: usize) -> bool {
        self.last_edge() != Some(edge)
    }

    pub fn can_place_letter(&self, game: &Game, letter: char, edge: usize) -> bool {
        self.is_valid_next_edge(edge) && game.trie().next_node(self.node, letter).is_some()
    }

    /// Places the letter from the given edge, or returns None if the trie has
    /// no such continuation or the edge was just used.
    pub fn place_letter(&self, game: &Game, letter: char, edge: usize) -> Option<Self> {
        if !self.can_place_letter(game, letter, edge) {
            return None;
        }
        let node = game.trie().next_node(self.node, letter)?;

        let mut letters = self.letters.clone();
        letters.push(letter);
        let mut edges = self.edges.clone();
        edges.push(edge);
        let mut word_in_progress = self.word_in_progress.clone();
        word_in_progress.push(letter);

        Some(Self {
            node,
            letters,
            words: self.words.clone(),
            word_in_progress,
            edges,
        })
    }

    pub fn can_finish_word(&self, game: &Game) -> bool {
        self.word_in_progress.chars().count() >= game.min_word_length()
            && game.trie().is_terminal(self.node)
    }

    /// Completes the word in progress. The next word starts from its last
    /// letter.
    pub fn finish_word(&self, game: &Game) -> Option<Self> {
        if !self.can_finish_word(game) {
            return None;
        }
        let connecting = self.word_in_progress.chars().last()?;
        let mut words = self.words.clone();
        words.push(self.word_in_progress.clone());

        Some(Self {
            node: game
                .trie()
                .next_node(Trie::ROOT, connecting)
                .unwrap_or(Trie::EMPTY),
            letters: self.letters.clone(),
            words,
            word_in_progress: connecting.to_string(),
            edges: self.edges.clone(),
        })
    }

    /// Dots not covered yet.
    ///
    /// By default this counts distinct letter values, so a letter sitting on
    /// two dots is only ever counted once.
    pub fn num_unused_dots(&self, game: &Game) -> usize {
        let used = match game.dot_counting() {
            DotCounting::Letters => self.letters.iter().collect::<HashSet<_>>().len(),
            DotCounting::EdgeLetters => self
                .letters
                .iter()
                .zip(self.edges.iter())
                .collect::<HashSet<_>>()
                .len(),
        };
        game.board().num_dots().saturating_sub(used)
    }

    /// Every dot is used and no word is left half built. The search keeps
    /// expanding past final states.
    pub fn is_final_state(&self, game: &Game) -> bool {
        self.word_in_progress.chars().count() < 2 && self.num_unused_dots(game) == 0
    }

    pub fn priority(&self, game: &Game) -> Priority {
        Priority {
            num_words: self.words.len(),
            unused_dots: self.num_unused_dots(game),
            num_letters: self.letters.len(),
        }
    }

    pub fn key(&self) -> StateKey {
        (
            self.edges.clone(),
            self.letters.clone(),
            self.word_in_progress.clone(),
        )
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for SearchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(" - ").to_uppercase())?;
        if self.word_in_progress.chars().count() > 1 {
            if !self.words.is_empty() {
                write!(f, " - ")?;
            }
            write!(f, "{}...", self.word_in_progress.to_uppercase())?;
        }
        Ok(())
    }
}
