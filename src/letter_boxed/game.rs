use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::dictionary::{Dictionary, Trie};
use super::error::Result;
use super::solver::Solver;
use super::state::SearchState;
use super::strategy::Strategy;
use super::DEFAULT_SEED;

/// How the dictionary is checked against the board when a game is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Playability {
    /// Lay each letter on the first edge that holds it and differs from the
    /// previous edge. Rejects some words on boards with repeated letters.
    #[default]
    Greedy,
    /// Try every edge holding each letter
    Exhaustive,
}

/// How used dots are counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DotCounting {
    /// Distinct letter values placed. A letter on two dots covers only one of
    /// them, so a board with a repeated letter never has every dot used.
    #[default]
    Letters,
    /// Distinct (edge, letter) pairs placed
    EdgeLetters,
}

/// A board together with the words that can be played on it
#[derive(Debug)]
pub struct Game {
    dictionary: Dictionary,
    board: Board,
    min_word_length: usize,
    dot_counting: DotCounting,
}

impl Game {
    /// Creates the game, keeping only the dictionary words playable on the board
    pub fn new(
        dictionary: Dictionary,
        board: Board,
        min_word_length: usize,
        playability: Playability,
    ) -> Result<Self> {
        let old_len = dictionary.len();
        let mut game = Self {
            dictionary,
            board,
            min_word_length,
            dot_counting: DotCounting::default(),
        };
        let playable = game.dictionary.filter(|word| match playability {
            Playability::Greedy => game.try_playing_on_board(word, None).is_some(),
            Playability::Exhaustive => game.can_play_word(word),
        })?;
        game.dictionary = playable;
        info!(
            "Scaled dictionary from {} to {} entries.",
            old_len,
            game.dictionary.len()
        );
        Ok(game)
    }

    pub fn with_dot_counting(mut self, dot_counting: DotCounting) -> Self {
        self.dot_counting = dot_counting;
        self
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn trie(&self) -> &Trie {
        self.dictionary.trie()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn min_word_length(&self) -> usize {
        self.min_word_length
    }

    pub fn dot_counting(&self) -> DotCounting {
        self.dot_counting
    }

    pub fn initial_state(&self) -> SearchState {
        SearchState::initial()
    }

    /// Lays the whole word on the board, one letter at a time, always taking
    /// the first edge that holds the letter and differs from the previous one.
    /// There is no backtracking over earlier edge choices.
    ///
    /// When `start` already holds finished words, the first letter of `word`
    /// is the connecting letter that is already on the board.
    pub fn try_playing_on_board(&self, word: &str, start: Option<&SearchState>) -> Option<SearchState> {
        let mut state = start.cloned().unwrap_or_else(SearchState::initial);
        let mut letters = word.chars();
        if !state.words().is_empty() {
            letters.next();
        }

        for l in letters {
            let edge = self
                .board
                .edges_with_letter(l)
                .find(|&e| state.is_valid_next_edge(e))?;
            state = state.place_letter(self, l, edge)?;
        }
        state.finish_word(self)
    }

    /// Checks if a path through the board exists for the word, exploring
    /// every edge for letters that appear more than once.
    pub fn can_play_word(&self, word: &str) -> bool {
        let letters = word.chars().collect::<Vec<_>>();
        let board_letters = self.board.letter_set();
        if letters.len() < self.min_word_length || letters.iter().any(|&l| !board_letters.contains(l)) {
            return false;
        }

        let mut stack = vec![SearchState::initial()];
        while let Some(state) = stack.pop() {
            let depth = state.letters().len();
            if depth == letters.len() {
                if state.can_finish_word(self) {
                    return true;
                }
                continue;
            }
            let l = letters[depth];
            stack.extend(
                self.board
                    .edges_with_letter(l)
                    .filter_map(|edge| state.place_letter(self, l, edge)),
            );
        }
        false
    }

    /// Lazily enumerates solutions using the default seed
    pub fn solve(&self, strategy: Strategy) -> Solver<'_, StdRng> {
        self.solve_with_rng(strategy, StdRng::seed_from_u64(DEFAULT_SEED))
    }

    pub fn solve_with_rng<R: Rng>(&self, strategy: Strategy, rng: R) -> Solver<'_, R> {
        Solver::new(self, strategy, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::{DotCounting, Game, Playability};
    use crate::letter_boxed::board::Board;
    use crate::letter_boxed::dictionary::Dictionary;
    use crate::letter_boxed::state::SearchState;

    fn game(words: Vec<&str>, letters: &str, playability: Playability) -> Game {
        let dict = Dictionary::new(words).unwrap();
        let board = Board::new(letters, 4).unwrap();
        Game::new(dict, board, 3, playability).unwrap()
    }

    #[test]
    fn test_dictionary_is_filtered() {
        let game = game(
            vec!["who", "objectively", "hello", "apple", "yeti", "to", "hob"],
            "BTLEHYVCOIWJ",
            Playability::Greedy,
        );
        let mut words = game.dictionary().words();
        words.sort();
        assert_eq!(words, vec!["hob", "objectively", "who"]);
    }

    #[test]
    fn test_try_playing_on_board() {
        let game = game(vec!["who", "objectively"], "BTLEHYVCOIWJ", Playability::Greedy);
        let state = game.try_playing_on_board("who", None).unwrap();
        assert_eq!(state.words(), &["who".to_string()]);
        assert_eq!(state.edges(), &[3, 1, 2]);
        assert_eq!(state.word_in_progress(), "o");

        let state = game.try_playing_on_board("objectively", Some(&state)).unwrap();
        assert_eq!(state.words().len(), 2);
        assert_eq!(state.letters().len(), 13);
        assert!(state.is_final_state(&game));
    }

    #[test]
    fn test_try_playing_rejects_absent_letter() {
        let game = game(vec!["who", "whom"], "BTLEHYVCOIWJ", Playability::Greedy);
        assert!(game.try_playing_on_board("whom", None).is_none());
        assert!(!game.dictionary().contains("whom"));
    }

    #[test]
    fn test_try_playing_rejects_same_edge() {
        // 'b' and 'l' share the top edge
        let game = game(vec!["who", "blew"], "BTLEHYVCOIWJ", Playability::Greedy);
        assert!(game.try_playing_on_board("blew", None).is_none());
        assert!(!game.can_play_word("blew"));
    }

    #[test]
    fn test_try_playing_requires_known_word() {
        let game = game(vec!["who"], "BTLEHYVCOIWJ", Playability::Greedy);
        assert!(game.try_playing_on_board("hoy", None).is_none());
        assert!(game.try_playing_on_board("wh", None).is_none());
    }

    #[test]
    fn test_exhaustive_playability_with_repeated_letter() {
        // 'a' sits on the first and second edge. Greedy lays it on the first
        // edge and then can not follow with 'b'.
        let words = vec!["abf", "fig"];
        let greedy = game(words.clone(), "abcadefghijk", Playability::Greedy);
        assert!(!greedy.dictionary().contains("abf"));
        assert!(greedy.dictionary().contains("fig"));

        let exhaustive = game(words, "abcadefghijk", Playability::Exhaustive);
        assert!(exhaustive.dictionary().contains("abf"));
        assert!(exhaustive.can_play_word("abf"));
        assert!(exhaustive.try_playing_on_board("abf", None).is_none());
    }

    #[test]
    fn test_dot_counting() {
        let words = vec!["abf", "afa"];
        let letters = game(words.clone(), "abcadefghijk", Playability::Exhaustive);
        let pairs = game(words, "abcadefghijk", Playability::Exhaustive)
            .with_dot_counting(DotCounting::EdgeLetters);
        assert!(letters.dictionary().contains("afa"));

        // Both dots holding 'a' are used
        let state = SearchState::initial()
            .place_letter(&letters, 'a', 0)
            .and_then(|s| s.place_letter(&letters, 'f', 2))
            .and_then(|s| s.place_letter(&letters, 'a', 1))
            .unwrap();
        assert_eq!(state.num_unused_dots(&letters), 10);
        assert_eq!(state.num_unused_dots(&pairs), 9);

        assert_eq!(SearchState::initial().num_unused_dots(&letters), 12);
        assert_eq!(SearchState::initial().num_unused_dots(&pairs), 12);
    }
}
