//! Solver for the Letter Boxed word chain puzzle.
//!
//! Letters sit on the edges of a square. Words are chained so that each word
//! starts with the last letter of the previous one, no two consecutive letters
//! come from the same edge, and every letter gets used.

pub mod board;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod game;
pub mod letter_set;
pub mod solution;
pub mod solver;
pub mod state;
pub mod strategy;

pub const DEFAULT_NUM_EDGES: usize = 4;
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;
/// Seed used for shuffling siblings unless told otherwise
pub const DEFAULT_SEED: u64 = 0x1e77e2b0;
