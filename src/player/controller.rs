use crate::core::{Board, Move};

/// Something that picks moves for one mark
pub trait PlayerController {
    /// `None` means the player resigns.
    fn choose_move(&self, board: &Board, legal_moves: &[Move]) -> Option<Move>;
    fn name(&self) -> &str;
    fn is_ai(&self) -> bool {
        false
    }
}
