use crate::{BoardError, Tile};

/// The error type for [`Rack::remove_tile()`](crate::Rack::remove_tile).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RackError {
    TileNotInRack { tile: Tile },
}

impl std::error::Error for RackError {}

impl std::fmt::Display for RackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RackError::TileNotInRack { tile } => {
                write!(f, "Tile {} is not in the rack", tile.code())
            }
        }
    }
}

/// The error type for one turn.
///
/// All of these are recoverable: the turn is rejected, nothing is changed,
/// and the player may try again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IllegalMove {
    NoTilesGiven,
    RackIndexOutOfRange { idx: usize, rack_size: usize },
    DuplicateRackIndex { idx: usize },
    CoordinateOutOfRange { x: i32, y: i32 },
    NotAdjacent,
    InvalidBoard,
    ExchangeOnFirstMove,
    Board(BoardError),
    Rack(RackError),
}

impl std::error::Error for IllegalMove {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IllegalMove::Board(err) => Some(err),
            IllegalMove::Rack(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::NoTilesGiven => write!(f, "No tiles were given"),
            IllegalMove::RackIndexOutOfRange { idx, rack_size } => write!(
                f,
                "Invalid tile number {}, the rack only has {} tiles",
                idx, rack_size
            ),
            IllegalMove::DuplicateRackIndex { idx } => {
                write!(f, "Tile number {} was given more than once", idx)
            }
            IllegalMove::CoordinateOutOfRange { x, y } => {
                write!(f, "Position ({}, {}) is too far away", x, y)
            }
            IllegalMove::NotAdjacent => {
                write!(f, "None of the tiles touch a tile that is already on the board")
            }
            IllegalMove::InvalidBoard => write!(
                f,
                "The tiles would form a line that is neither one color nor one shape, or repeats a tile"
            ),
            IllegalMove::ExchangeOnFirstMove => write!(f, "Can't return tiles on the first move"),
            IllegalMove::Board(_) => write!(f, "Could not place a tile on the board"),
            IllegalMove::Rack(_) => write!(f, "Could not take a tile from the rack"),
        }
    }
}

impl From<BoardError> for IllegalMove {
    fn from(err: BoardError) -> Self {
        IllegalMove::Board(err)
    }
}

impl From<RackError> for IllegalMove {
    fn from(err: RackError) -> Self {
        IllegalMove::Rack(err)
    }
}
