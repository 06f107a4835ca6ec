use crate::Tile;

/// The error type for reading and writing single [`Board`](crate::Board) cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    Occupied { x: i32, y: i32, existing: Tile },
    EmptyCell { x: i32, y: i32 },
}

impl std::error::Error for BoardError {}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::Occupied { x, y, existing } =>
                write!(f, "Tile was placed on ({}, {}), which is already occupied by {}", x, y, existing.code()),
            BoardError::EmptyCell { x, y } =>
                write!(f, "Tried to read a tile from the empty cell ({}, {})", x, y),
        }
    }
}
