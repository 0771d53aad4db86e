use std::io;

/// Errors raised while configuring a game. Search itself never fails: an
/// illegal move is simply not offered as a candidate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("board must have at least one edge")]
    NoEdges,
    #[error("board has no letters")]
    EmptyBoard,
    #[error("board of {len} letters cannot be split into {num_edges} equal edges")]
    UnevenBoard { len: usize, num_edges: usize },
    #[error("invalid board letter {0:?}, only a-z are allowed")]
    InvalidLetter(char),
    #[error("unknown strategy {0:?}, expected \"word\" or \"letter\"")]
    UnknownStrategy(String),
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to build word set: {0}")]
    WordSet(#[from] fst::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
