pub mod letter_boxed;
pub mod utils;

pub use letter_boxed::board::Board;
pub use letter_boxed::config::GameConfig;
pub use letter_boxed::dictionary::Dictionary;
pub use letter_boxed::error::{Error, Result};
pub use letter_boxed::game::{DotCounting, Game, Playability};
pub use letter_boxed::solution::Solution;
pub use letter_boxed::solver::Solver;
pub use letter_boxed::strategy::Strategy;
