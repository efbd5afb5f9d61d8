use super::types::{Cell, Mark, Move, BOARD_CELLS};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

/// 3x3 board, row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    #[serde(with = "crate::core::serialization")]
    pub cells: [Cell; BOARD_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; BOARD_CELLS],
        }
    }

    pub fn get(&self, index: Move) -> Cell {
        self.cells[index]
    }

    pub fn is_empty_at(&self, index: Move) -> bool {
        self.cells.get(index) == Some(&Cell::Empty)
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Permanently plays `mark` at `index`.
    pub fn set(&mut self, index: Move, mark: Mark) -> Result<()> {
        match self.cells.get(index) {
            None => Err(Error::OutOfRange { index }),
            Some(Cell::Empty) => {
                self.cells[index] = mark.cell();
                Ok(())
            }
            Some(_) => Err(Error::Occupied { index }),
        }
    }

    /// Tentatively plays `mark` at `index`. The cell is cleared again when
    /// the returned guard is dropped.
    ///
    /// The caller must pass an empty cell; search only ever places on moves
    /// produced by `available_moves`.
    pub fn place(&mut self, index: Move, mark: Mark) -> Placed<'_> {
        debug_assert!(self.is_empty_at(index), "placing on occupied cell {index}");
        self.cells[index] = mark.cell();
        Placed { board: self, index }
    }
}

/// A mark placed during search, undone on drop.
pub struct Placed<'a> {
    board: &'a mut Board,
    index: Move,
}

impl Deref for Placed<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placed<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placed<'_> {
    fn drop(&mut self) {
        self.board.cells[self.index] = Cell::Empty;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.display_char())?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parses the compact form, e.g. `"X...O...X"`.
    fn from_str(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != BOARD_CELLS {
            return Err(Error::InvalidBoardLength {
                expected: BOARD_CELLS,
                got: chars.len(),
            });
        }

        let mut board = Board::new();
        for (position, &character) in chars.iter().enumerate() {
            board.cells[position] = Cell::from_char(character)
                .ok_or(Error::InvalidCellCharacter {
                    character,
                    position,
                })?;
        }
        Ok(board)
    }
}
