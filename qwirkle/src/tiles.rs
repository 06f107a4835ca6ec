use std::str::FromStr;

use serde::Serialize;

/// A single Qwirkle tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Tile {
    pub color: Color,
    pub shape: Shape,
}

/// The color of a [tile](Tile).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Color {
    Red,
    Cyan,
    Yellow,
    Green,
    Blue,
    Violet,
}

/// The shape of a [tile](Tile).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Shape {
    Circle,
    X,
    Diamond,
    Square,
    Starburst,
    Cross,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::Red,
        Color::Cyan,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Violet,
    ];

    /// The ANSI escape sequence that switches the terminal foreground to this color.
    pub fn ansi_code(self) -> &'static str {
        match self {
            Color::Red => "\u{1b}[31m",
            Color::Cyan => "\u{1b}[36m",
            Color::Yellow => "\u{1b}[33m",
            Color::Green => "\u{1b}[32m",
            Color::Blue => "\u{1b}[34m",
            Color::Violet => "\u{1b}[35m",
        }
    }

    fn letter(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Cyan => 'c',
            Color::Yellow => 'y',
            Color::Green => 'g',
            Color::Blue => 'b',
            Color::Violet => 'v',
        }
    }
}

impl Shape {
    pub const ALL: [Shape; 6] = [
        Shape::Circle,
        Shape::X,
        Shape::Diamond,
        Shape::Square,
        Shape::Starburst,
        Shape::Cross,
    ];

    /// The unicode glyph used when rendering this shape.
    pub fn glyph(self) -> char {
        match self {
            Shape::Circle => '●',
            Shape::X => '✖',
            Shape::Diamond => '◆',
            Shape::Square => '■',
            Shape::Starburst => '🟏',
            Shape::Cross => '🞧',
        }
    }

    fn letter(self) -> char {
        match self {
            Shape::Circle => 'o',
            Shape::X => 'x',
            Shape::Diamond => 'd',
            Shape::Square => 's',
            Shape::Starburst => '*',
            Shape::Cross => '+',
        }
    }
}

const ANSI_RESET: &str = "\u{1b}[0m";

impl Tile {
    pub fn new(color: Color, shape: Shape) -> Self {
        Self { color, shape }
    }

    /// All 36 distinct tiles, ordered by color first.
    pub fn all() -> impl Iterator<Item = Tile> {
        Color::ALL
            .into_iter()
            .flat_map(|color| Shape::ALL.into_iter().map(move |shape| Tile { color, shape }))
    }

    /// The shape glyph without any color escape codes.
    pub fn glyph(&self) -> char {
        self.shape.glyph()
    }

    /// The two-letter code accepted by the [`FromStr`] instance, e.g. `"ro"` for a red circle.
    pub fn code(&self) -> String {
        format!("{}{}", self.color.letter(), self.shape.letter())
    }
}

/// Renders the glyph in the tile's terminal color.
impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.color.ansi_code(), self.glyph(), ANSI_RESET)
    }
}

/// The error type for the [`FromStr`] instance of [`Tile`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileFromStrErr {
    LessThanTwoChars,
    MoreThanTwoChars,
    InvalidColor,
    InvalidShape,
}

impl std::error::Error for TileFromStrErr {}

impl std::fmt::Display for TileFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TileFromStrErr::LessThanTwoChars => write!(f, "Tile code has less than two characters"),
            TileFromStrErr::MoreThanTwoChars => write!(f, "Tile code has more than two characters"),
            TileFromStrErr::InvalidColor => write!(f, "Unknown color letter, expected one of r c y g b v"),
            TileFromStrErr::InvalidShape => write!(f, "Unknown shape letter, expected one of o x d s * +"),
        }
    }
}

impl FromStr for Tile {
    type Err = TileFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let color_char = chars.next().ok_or(TileFromStrErr::LessThanTwoChars)?;
        let shape_char = chars.next().ok_or(TileFromStrErr::LessThanTwoChars)?;
        if chars.next().is_some() {
            return Err(TileFromStrErr::MoreThanTwoChars);
        }
        let color = match color_char {
            'r' => Color::Red,
            'c' => Color::Cyan,
            'y' => Color::Yellow,
            'g' => Color::Green,
            'b' => Color::Blue,
            'v' => Color::Violet,
            _ => return Err(TileFromStrErr::InvalidColor),
        };
        let shape = match shape_char {
            'o' => Shape::Circle,
            'x' => Shape::X,
            'd' => Shape::Diamond,
            's' => Shape::Square,
            '*' => Shape::Starburst,
            '+' => Shape::Cross,
            _ => return Err(TileFromStrErr::InvalidShape),
        };
        Ok(Tile { color, shape })
    }
}

/// Shorthand for creating tiles from a two-character string.
///
/// The first character is the [color](Color) (`r`ed, `c`yan, `y`ellow,
/// `g`reen, `b`lue, `v`iolet), the second is the [shape](Shape) (`o` circle,
/// `x`, `d`iamond, `s`quare, `*` starburst, `+` cross).
///
/// This macro is just calling the [`FromStr`] instance of [`Tile`].
/// ```
/// # use qwirkle::{tile, Color, Shape, Tile};
/// assert_eq!(
///     tile!("gd"),
///     Tile { color: Color::Green, shape: Shape::Diamond }
/// );
/// ```
#[macro_export]
macro_rules! tile {
    ($code:literal) => {
        <$crate::Tile as std::str::FromStr>::from_str($code)
            .expect("Invalid tile code given to tile! macro")
    };
}
// The import is for using the macro in other modules, see https://stackoverflow.com/a/31749071/1726797
#[allow(unused_imports)]
pub(crate) use tile;
