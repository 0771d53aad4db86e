use std::fmt;
use std::str::FromStr;

use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::error::Error;
use super::game::Game;
use super::state::SearchState;

/// How the solver generates the children of a state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Walk the trie one letter at a time. Children are deduplicated against
    /// every state seen so far.
    Letter,
    /// Lay whole dictionary words at once. Much cheaper per step but may
    /// yield the same solution more than once.
    #[default]
    Word,
}

impl Strategy {
    /// Children of the state, in random order
    pub fn expand<R: Rng + ?Sized>(
        &self,
        game: &Game,
        state: &SearchState,
        rng: &mut R,
    ) -> Vec<SearchState> {
        let mut children = match self {
            Self::Letter => letter_children(game, state),
            Self::Word => word_children(game, state),
        };
        children.shuffle(rng);
        trace!("{:?} strategy expanded '{}' into {} children", self, state, children.len());
        children
    }

    /// Whether children are checked against the seen set
    pub fn deduplicates(&self) -> bool {
        matches!(self, Self::Letter)
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "letter" => Ok(Self::Letter),
            "word" => Ok(Self::Word),
            _ => Err(Error::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter => write!(f, "letter"),
            Self::Word => write!(f, "word"),
        }
    }
}

/// Every legal single letter placement, plus finishing the current word
fn letter_children(game: &Game, state: &SearchState) -> Vec<SearchState> {
    let mut children = Vec::new();
    let board = game.board();
    for edge in 0..board.num_edges() {
        if !state.is_valid_next_edge(edge) {
            continue;
        }
        // A letter repeated on one edge only yields one child
        let letters = board.edge_set(edge);
        children.extend(
            letters
                .iter()
                .filter_map(|l| state.place_letter(game, l, edge)),
        );
    }
    if let Some(finished) = state.finish_word(game) {
        children.push(finished);
    }
    children
}

/// Every dictionary word that can be chained onto the state in one go
fn word_children(game: &Game, state: &SearchState) -> Vec<SearchState> {
    let candidates = match state.word_in_progress().chars().count() {
        0 => game.dictionary().words(),
        1 => game
            .dictionary()
            .words_starting_with(state.word_in_progress()),
        // Only whole words are laid, never the rest of a partial one
        _ => return Vec::new(),
    };
    candidates
        .iter()
        .filter_map(|word| game.try_playing_on_board(word, Some(state)))
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::Strategy;
    use crate::letter_boxed::board::Board;
    use crate::letter_boxed::dictionary::Dictionary;
    use crate::letter_boxed::game::{Game, Playability};
    use crate::letter_boxed::state::SearchState;

    fn game() -> Game {
        let dict = Dictionary::new(vec!["who", "hit", "objectively", "hob", "bye", "obey"]).unwrap();
        let board = Board::new("BTLEHYVCOIWJ", 4).unwrap();
        Game::new(dict, board, 3, Playability::Greedy).unwrap()
    }

    fn sorted_words(children: &[SearchState]) -> Vec<String> {
        let mut words = children
            .iter()
            .map(|s| s.words().join(" "))
            .collect::<Vec<_>>();
        words.sort();
        words
    }

    #[test]
    fn test_parse_strategy() {
        assert_eq!("letter".parse::<Strategy>().unwrap(), Strategy::Letter);
        assert_eq!("Word".parse::<Strategy>().unwrap(), Strategy::Word);
        assert!("depth".parse::<Strategy>().is_err());
        assert_eq!(Strategy::Letter.to_string(), "letter");
    }

    #[test]
    fn test_word_children_from_start() {
        let game = game();
        let mut rng = StdRng::seed_from_u64(1);
        let children = Strategy::Word.expand(&game, &game.initial_state(), &mut rng);
        assert_eq!(
            sorted_words(&children),
            vec!["hit", "hob", "objectively", "who"]
        );
        assert!(children.iter().all(|c| c.word_in_progress().len() == 1));
    }

    #[test]
    fn test_word_children_chain_on_connecting_letter() {
        let game = game();
        let mut rng = StdRng::seed_from_u64(1);
        let who = game.try_playing_on_board("who", None).unwrap();
        let children = Strategy::Word.expand(&game, &who, &mut rng);
        assert_eq!(sorted_words(&children), vec!["who objectively"]);

        // Nothing in the dictionary starts with 't'
        let hit = game.try_playing_on_board("hit", None).unwrap();
        assert!(Strategy::Word.expand(&game, &hit, &mut rng).is_empty());
    }

    #[test]
    fn test_letter_children() {
        let game = game();
        let mut rng = StdRng::seed_from_u64(1);
        let children = Strategy::Letter.expand(&game, &game.initial_state(), &mut rng);
        let mut first = children
            .iter()
            .map(|c| c.word_in_progress().to_string())
            .collect::<Vec<_>>();
        first.sort();
        assert_eq!(first, vec!["h", "o", "w"]);

        let wh = children
            .iter()
            .find(|c| c.word_in_progress() == "w")
            .and_then(|w| w.place_letter(&game, 'h', 1))
            .unwrap();
        let who = wh.place_letter(&game, 'o', 2).unwrap();
        let children = Strategy::Letter.expand(&game, &who, &mut rng);
        // "who" can only be finished, no word continues it
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].words(), &["who".to_string()]);
    }

    #[test]
    fn test_letter_children_with_letter_repeated_on_edge() {
        let dict = Dictionary::new(vec!["abd", "bad"]).unwrap();
        let board = Board::new("aabcde", 3).unwrap();
        let game = Game::new(dict, board, 3, Playability::Greedy).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let children = Strategy::Letter.expand(&game, &game.initial_state(), &mut rng);
        let mut first = children
            .iter()
            .map(|c| (c.word_in_progress().to_string(), c.edges().to_vec()))
            .collect::<Vec<_>>();
        first.sort();
        assert_eq!(
            first,
            vec![("a".to_string(), vec![0]), ("b".to_string(), vec![1])]
        );
    }

    #[test]
    fn test_expand_is_deterministic_for_seed() {
        let game = game();
        let start = game.initial_state();
        let a = Strategy::Word.expand(&game, &start, &mut StdRng::seed_from_u64(7));
        let b = Strategy::Word.expand(&game, &start, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
