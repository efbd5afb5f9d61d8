//! Tic-tac-toe engine with exhaustive minimax and alpha-beta search.

pub mod config;
pub mod core;
pub mod display;
pub mod error;
pub mod game;
pub mod logging;
pub mod logic;
pub mod player;
pub mod ui;

pub use crate::core::{Board, Cell, Mark, Move, Score};
pub use error::{Error, Result};
pub use logic::{available_moves, has_won, is_draw, outcome, Outcome};
pub use player::ai::{compare, find_best_move, Comparison, SearchResult, Strategy};
