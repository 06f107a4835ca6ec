use std::str::FromStr;

use crate::{within_limits, Orientation, MAX_COORDINATE};

/// A player's instruction for one turn.
///
/// Written as text:
/// * `h<x>,<y>;<i0>,<i1>,...` places the rack tiles with the given indices
///   in a row, starting at `(x, y)` and going right
/// * `v<x>,<y>;<i0>,<i1>,...` does the same in a column, going down
/// * `r<i0>,<i1>,...` returns the given rack tiles to the bag and draws replacements
///
/// ```
/// # use qwirkle::{Command, Orientation};
/// let cmd: Command = "h5,-2;3,0".parse().unwrap();
/// assert_eq!(
///     cmd,
///     Command::Place { orientation: Orientation::Horizontal, x: 5, y: -2, rack_indices: vec![3, 0] }
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Place {
        orientation: Orientation,
        x: i32,
        y: i32,
        rack_indices: Vec<usize>,
    },
    Exchange {
        rack_indices: Vec<usize>,
    },
}

impl Command {
    pub fn rack_indices(&self) -> &[usize] {
        match self {
            Command::Place { rack_indices, .. } | Command::Exchange { rack_indices } => rack_indices,
        }
    }
}

/// The error type for the [`FromStr`] instance of [`Command`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandFromStrErr {
    Empty,
    MissingDirection,
    MissingSemicolon,
    MissingComma,
    InvalidCoordinate(String),
    CoordinateOutOfRange(i32),
    InvalidTileNumber(String),
    NoTileNumbers,
}

impl std::error::Error for CommandFromStrErr {}

impl std::fmt::Display for CommandFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandFromStrErr::Empty => write!(f, "Empty command"),
            CommandFromStrErr::MissingDirection => write!(f, "Missing h, v or r"),
            CommandFromStrErr::MissingSemicolon => write!(f, "No semicolon found"),
            CommandFromStrErr::MissingComma => write!(f, "No comma between the coordinates found"),
            CommandFromStrErr::InvalidCoordinate(s) => write!(f, "Invalid coordinate '{}'", s),
            CommandFromStrErr::CoordinateOutOfRange(c) => write!(
                f,
                "Coordinate {} is out of range, it must be between -{} and {}",
                c, MAX_COORDINATE, MAX_COORDINATE
            ),
            CommandFromStrErr::InvalidTileNumber(s) => write!(f, "Invalid tile number '{}'", s),
            CommandFromStrErr::NoTileNumbers => write!(f, "No tile numbers given"),
        }
    }
}

impl FromStr for Command {
    type Err = CommandFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let directive = chars.next().ok_or(CommandFromStrErr::Empty)?;
        let rest = chars.as_str();

        let orientation = match directive {
            'h' => Orientation::Horizontal,
            'v' => Orientation::Vertical,
            'r' => {
                return Ok(Command::Exchange {
                    rack_indices: parse_tile_numbers(rest)?,
                })
            }
            _ => return Err(CommandFromStrErr::MissingDirection),
        };

        let (coordinates, tile_numbers) = rest
            .split_once(';')
            .ok_or(CommandFromStrErr::MissingSemicolon)?;
        let (x, y) = coordinates
            .split_once(',')
            .ok_or(CommandFromStrErr::MissingComma)?;
        Ok(Command::Place {
            orientation,
            x: parse_coordinate(x)?,
            y: parse_coordinate(y)?,
            rack_indices: parse_tile_numbers(tile_numbers)?,
        })
    }
}

fn parse_coordinate(s: &str) -> Result<i32, CommandFromStrErr> {
    let s = s.trim();
    let coordinate = s
        .parse()
        .map_err(|_| CommandFromStrErr::InvalidCoordinate(String::from(s)))?;
    if !within_limits(coordinate) {
        return Err(CommandFromStrErr::CoordinateOutOfRange(coordinate));
    }
    Ok(coordinate)
}

fn parse_tile_numbers(s: &str) -> Result<Vec<usize>, CommandFromStrErr> {
    if s.trim().is_empty() {
        return Err(CommandFromStrErr::NoTileNumbers);
    }
    s.split(',')
        .map(|num| {
            let num = num.trim();
            num.parse()
                .map_err(|_| CommandFromStrErr::InvalidTileNumber(String::from(num)))
        })
        .collect()
}
