use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::state::SearchState;

/// A finished chain of words along with a few statistics about it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub words: Vec<String>,
    /// Letters placed on the board, counting repeats
    pub num_letters: usize,
    /// Letters placed beyond one per dot
    pub num_duplicate_letters: usize,
}

impl Solution {
    pub fn new(state: &SearchState, board: &Board) -> Self {
        let num_letters = state.letters().len();
        Self {
            words: state.words().to_vec(),
            num_letters,
            num_duplicate_letters: num_letters.saturating_sub(board.num_dots()),
        }
    }

    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    /// Checks that every word starts with the last letter of the previous one
    pub fn is_chained(&self) -> bool {
        self.words
            .windows(2)
            .all(|pair| pair[0].chars().last() == pair[1].chars().next())
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(" - ").to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::Solution;

    #[test]
    fn test_display_and_chain() {
        let solution = Solution {
            words: vec!["who".into(), "objectively".into()],
            num_letters: 13,
            num_duplicate_letters: 1,
        };
        assert_eq!(solution.to_string(), "WHO - OBJECTIVELY");
        assert_eq!(solution.num_words(), 2);
        assert!(solution.is_chained());

        let broken = Solution {
            words: vec!["who".into(), "bye".into()],
            num_letters: 6,
            num_duplicate_letters: 0,
        };
        assert!(!broken.is_chained());
    }

    #[test]
    fn test_json() {
        let solution = Solution {
            words: vec!["lexicography".into()],
            num_letters: 12,
            num_duplicate_letters: 0,
        };
        let json = serde_json::to_string(&solution).unwrap();
        assert_eq!(
            json,
            r#"{"words":["lexicography"],"num_letters":12,"num_duplicate_letters":0}"#
        );
    }
}
