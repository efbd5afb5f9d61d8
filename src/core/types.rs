use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of cells on the board.
pub const BOARD_CELLS: usize = 9;

/// A cell index in `0..9`, row-major (row = index / 3, column = index % 3).
pub type Move = usize;

/// Game-theoretic value of a position from the root player's perspective.
pub type Score = i32;

pub const WIN: Score = 1;
pub const DRAW: Score = 0;
pub const LOSS: Score = -1;

/// A player's symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X, // moves first
    O,
}

impl Default for Mark {
    fn default() -> Self {
        Mark::X
    }
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }

    pub fn display_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_char())
    }
}

/// Contents of one board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn display_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        mark.cell()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent().opponent(), Mark::O);
    }

    #[test]
    fn test_cell_chars() {
        assert_eq!(Cell::from_char('_'), Some(Cell::Empty));
        assert_eq!(Cell::from_char('x'), Some(Cell::X));
        assert_eq!(Cell::from_char('0'), None);
        assert_eq!(Cell::from(Mark::O), Cell::O);
    }
}
