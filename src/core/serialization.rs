//! Serde helpers storing the cell array in its compact string form.

use super::types::{Cell, BOARD_CELLS};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S>(cells: &[Cell; BOARD_CELLS], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let s: String = cells.iter().map(|c| c.display_char()).collect();
    serializer.serialize_str(&s)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<[Cell; BOARD_CELLS], D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    let board: super::Board = s.parse().map_err(D::Error::custom)?;
    Ok(board.cells)
}
