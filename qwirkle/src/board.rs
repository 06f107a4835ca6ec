mod bbox;
mod error;

pub use bbox::*;
pub use error::*;

use crate::{Orientation, Tile};

/// Tiles are only ever placed at coordinates within `-MAX_COORDINATE..=MAX_COORDINATE`.
///
/// A game has too few tiles to grow the board from there to the limits of `i32`.
pub const MAX_COORDINATE: i32 = 1 << 30;

pub fn within_limits(coordinate: i32) -> bool {
    (-MAX_COORDINATE..=MAX_COORDINATE).contains(&coordinate)
}

/// Represents the (unbounded) playing area.
///
/// Cells are either empty or hold exactly one tile. Cloning a board is cheap,
/// the tiles live in a persistent map that shares structure between clones,
/// so the move search can give every branch its own board.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    /// There is exactly one entry in this map for every occupied cell.
    tiles: im::HashMap<(i32, i32), Tile>,
    /// The smallest area that contains all tiles.
    ///
    /// Derived from `tiles`. It never shrinks, since tiles are never removed.
    bbox: BoundingBox,
}

impl Board {
    /// Creates a new board from a list of `(x, y, tile)` placements.
    ///
    /// Panics if two placements share a coordinate. Does not check that the
    /// resulting board is valid, see [`Self::is_valid()`].
    pub fn new(placements: &[(i32, i32, Tile)]) -> Self {
        let mut board = Self::default();
        for &(x, y, tile) in placements {
            if let Err(err) = board.insert_tile(tile, x, y) {
                panic!("Invalid placements given to Board::new(): {}", err);
            }
        }
        board
    }

    /// The smallest area enclosing the tiles currently on the board.
    ///
    /// Everything outside of it is empty. For an empty board this is the
    /// empty area at the origin.
    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }

    pub fn min_x(&self) -> i32 {
        self.bbox.x_min
    }

    pub fn max_x(&self) -> i32 {
        self.bbox.x_max
    }

    pub fn min_y(&self) -> i32 {
        self.bbox.y_min
    }

    pub fn max_y(&self) -> i32 {
        self.bbox.y_max
    }

    /// The number of tiles on the board.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether there are no tiles on the board at all.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Returns the tile at the given coordinate, if any.
    pub fn get(&self, x: i32, y: i32) -> Option<Tile> {
        self.tiles.get(&(x, y)).copied()
    }

    /// Like [`Self::get()`], for callers that already know the cell is occupied.
    pub fn tile_at(&self, x: i32, y: i32) -> Result<Tile, BoardError> {
        self.get(x, y).ok_or(BoardError::EmptyCell { x, y })
    }

    /// True for empty cells, which includes every cell outside of [`Self::bbox()`].
    pub fn is_empty_at(&self, x: i32, y: i32) -> bool {
        !self.tiles.contains_key(&(x, y))
    }

    /// Is this an empty cell with at least one orthogonal neighbor?
    ///
    /// Every move except the very first one must touch the existing tiles.
    pub fn is_adjacent(&self, x: i32, y: i32) -> bool {
        self.is_empty_at(x, y)
            && [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)]
                .into_iter()
                .any(|(nx, ny)| !self.is_empty_at(nx, ny))
    }

    /// Places a tile on an empty cell, growing the bounds if needed.
    ///
    /// If the cell is occupied, an error is returned and the board is unmodified.
    pub fn insert_tile(&mut self, tile: Tile, x: i32, y: i32) -> Result<(), BoardError> {
        if let Some(existing) = self.get(x, y) {
            return Err(BoardError::Occupied { x, y, existing });
        }
        self.tiles.insert((x, y), tile);
        self.bbox.update(x, y);
        Ok(())
    }

    /// Returns a copy of this board with one more tile on it.
    pub fn with_tile(&self, tile: Tile, x: i32, y: i32) -> Result<Board, BoardError> {
        let mut board = self.clone();
        board.insert_tile(tile, x, y)?;
        Ok(board)
    }

    /// Iterates over all occupied cells, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, Tile)> + '_ {
        self.tiles.iter().map(|(&(x, y), &tile)| (x, y, tile))
    }

    /// Checks that every word on the board is valid.
    ///
    /// This scans every row and every column of the whole board, not just the
    /// words touched by the most recent move.
    pub fn is_valid(&self) -> bool {
        let BoundingBox {
            x_min,
            y_min,
            x_max,
            y_max,
        } = self.bbox;
        let rows_valid =
            (y_min..y_max).all(|y| line_is_valid((x_min..x_max).map(|x| self.get(x, y))));
        let columns_valid =
            (x_min..x_max).all(|x| line_is_valid((y_min..y_max).map(|y| self.get(x, y))));
        rows_valid && columns_valid
    }

    /// Collects the word through `(x, y)` along the given axis, in board order.
    ///
    /// Empty if the cell itself is empty.
    pub fn word_through(&self, x: i32, y: i32, orientation: Orientation) -> Vec<Tile> {
        let (dx, dy) = orientation.step();
        let (mut x, mut y) = (x, y);
        while !self.is_empty_at(x - dx, y - dy) {
            x -= dx;
            y -= dy;
        }
        let mut word = Vec::new();
        while let Some(tile) = self.get(x, y) {
            word.push(tile);
            x += dx;
            y += dy;
        }
        word
    }
}

// Splits a row or column into words at the empty cells and checks each one.
fn line_is_valid(cells: impl Iterator<Item = Option<Tile>>) -> bool {
    let mut word = Vec::new();
    for cell in cells {
        match cell {
            Some(tile) => word.push(tile),
            None => {
                if !is_valid_word(&word) {
                    return false;
                }
                word.clear();
            }
        }
    }
    is_valid_word(&word)
}

/// Checks a single word, i.e. a contiguous run of tiles.
///
/// Either all tiles have the same color and no shape repeats, or all tiles
/// have the same shape and no color repeats. Words of length 0 or 1 are valid.
pub fn is_valid_word(word: &[Tile]) -> bool {
    let Some((first, rest)) = word.split_first() else {
        return true;
    };
    let const_color = rest.iter().all(|t| t.color == first.color);
    let const_shape = rest.iter().all(|t| t.shape == first.shape);
    if const_color && has_repeats(word.iter().map(|t| t.shape as u8)) {
        return false;
    }
    if const_shape && has_repeats(word.iter().map(|t| t.color as u8)) {
        return false;
    }
    const_color || const_shape
}

fn has_repeats(indices: impl Iterator<Item = u8>) -> bool {
    let mut seen = 0u8;
    for idx in indices {
        let bit = 1u8 << idx;
        if seen & bit != 0 {
            return true;
        }
        seen |= bit;
    }
    false
}
