//! Error types for the engine

use crate::core::Mark;
use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("no available moves: the board is exhausted")]
    ExhaustedBoard,

    #[error("game is already over: {0} has a line")]
    GameOver(Mark),

    #[error("cell {index} is out of range (expected 0-8)")]
    OutOfRange { index: usize },

    #[error("cell {index} is already occupied")]
    Occupied { index: usize },

    #[error("board string has {got} cells, expected {expected}")]
    InvalidBoardLength { expected: usize, got: usize },

    #[error("invalid character '{character}' at position {position}")]
    InvalidCellCharacter { character: char, position: usize },

    #[error("failed to read config '{path}': {source}")]
    Config {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
