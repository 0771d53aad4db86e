use std::fmt;

use super::error::{Error, Result};
use super::letter_set::LetterSet;

/// The letters around the box, split into edges.
///
/// Letters are read clockwise from the top left corner: the top edge left to
/// right, then the right edge top to bottom, the bottom edge right to left and
/// finally the left edge bottom to top. The board itself only cares that each
/// edge is a contiguous run of the input.
#[derive(Debug, Clone)]
pub struct Board {
    /// Letters on each edge, in input order
    edge_letters: Vec<Vec<char>>,
    /// Same letters as a set for quick lookups
    edge_sets: Vec<LetterSet>,
    num_dots: usize,
}

impl Board {
    /// Splits the letters into `num_edges` equal, contiguous edges. Boards
    /// that can not be split evenly are rejected rather than truncated.
    pub fn new(letters: &str, num_edges: usize) -> Result<Self> {
        if num_edges == 0 {
            return Err(Error::NoEdges);
        }
        let letters = letters
            .chars()
            .map(|c| {
                if c.is_ascii_alphabetic() {
                    Ok(c.to_ascii_lowercase())
                } else {
                    Err(Error::InvalidLetter(c))
                }
            })
            .collect::<Result<Vec<_>>>()?;
        if letters.is_empty() {
            return Err(Error::EmptyBoard);
        }
        if letters.len() % num_edges != 0 {
            return Err(Error::UnevenBoard {
                len: letters.len(),
                num_edges,
            });
        }

        let dots_per_edge = letters.len() / num_edges;
        let edge_letters = letters
            .chunks(dots_per_edge)
            .map(|edge| edge.to_vec())
            .collect::<Vec<_>>();
        let edge_sets = edge_letters
            .iter()
            .map(|edge| edge.iter().copied().collect())
            .collect();

        Ok(Self {
            edge_letters,
            edge_sets,
            num_dots: letters.len(),
        })
    }

    pub fn num_dots(&self) -> usize {
        self.num_dots
    }

    pub fn num_edges(&self) -> usize {
        self.edge_letters.len()
    }

    pub fn edge_letters(&self, edge: usize) -> &[char] {
        &self.edge_letters[edge]
    }

    pub fn edge_set(&self, edge: usize) -> LetterSet {
        self.edge_sets[edge]
    }

    /// Iterates over `(edge index, letters on that edge)`
    pub fn edges(&self) -> impl Iterator<Item = (usize, &[char])> {
        self.edge_letters
            .iter()
            .enumerate()
            .map(|(i, edge)| (i, edge.as_slice()))
    }

    /// Indices of every edge holding the letter, in ascending order
    pub fn edges_with_letter(&self, letter: char) -> impl Iterator<Item = usize> + '_ {
        self.edge_sets
            .iter()
            .enumerate()
            .filter(move |(_, set)| set.contains(letter))
            .map(|(i, _)| i)
    }

    pub fn all_letters(&self) -> Vec<char> {
        self.edge_letters.iter().flatten().copied().collect()
    }

    /// Every distinct letter on the board
    pub fn letter_set(&self) -> LetterSet {
        self.all_letters().into_iter().collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, edge) in self.edges() {
            if i != 0 {
                write!(f, "-")?;
            }
            for l in edge {
                write!(f, "{}", l.to_ascii_uppercase())?;
            }
        }
        Ok(())
    }
}
