pub mod board;
pub mod serialization;
pub mod types;

pub use board::{Board, Placed};
pub use types::{Cell, Mark, Move, Score, BOARD_CELLS, DRAW, LOSS, WIN};
