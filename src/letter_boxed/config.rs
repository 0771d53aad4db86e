use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::dictionary::Dictionary;
use super::error::Result;
use super::game::{DotCounting, Game, Playability};
use super::strategy::Strategy;
use super::{DEFAULT_MIN_WORD_LENGTH, DEFAULT_NUM_EDGES, DEFAULT_SEED};

/// Settings for one run of the solver. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub num_edges: usize,
    pub min_word_length: usize,
    pub strategy: Strategy,
    pub playability: Playability,
    pub dot_counting: DotCounting,
    /// Seed used to shuffle sibling states. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_edges: DEFAULT_NUM_EDGES,
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            strategy: Strategy::default(),
            playability: Playability::default(),
            dot_counting: DotCounting::default(),
            seed: Some(DEFAULT_SEED),
        }
    }
}

impl GameConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Builds the board from its letters and filters the dictionary against it
    pub fn build_game(&self, dictionary: Dictionary, letters: &str) -> Result<Game> {
        let board = Board::new(letters, self.num_edges)?;
        let game = Game::new(dictionary, board, self.min_word_length, self.playability)?;
        Ok(game.with_dot_counting(self.dot_counting))
    }
}
