use crate::Board;

/// The length of a complete word, i.e. a word using all six values of its varying attribute.
pub const QWIRKLE_LENGTH: usize = 6;

/// The score of a complete word, double its length.
pub const QWIRKLE_SCORE: u32 = 12;

/// The axis along which the tiles of a move are laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Along a row, i.e. changing `x`.
    Horizontal,
    /// Along a column, i.e. changing `y`.
    Vertical,
}

impl Orientation {
    pub fn perpendicular(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// The `(dx, dy)` step towards increasing coordinates.
    pub fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

/// Scores the word that runs through the occupied cell `(x, y)` along `orientation`.
///
/// The score is the length of the word, except that a word of length
/// [`QWIRKLE_LENGTH`] scores [`QWIRKLE_SCORE`]. An empty cell scores 0.
pub fn score_word(board: &Board, x: i32, y: i32, orientation: Orientation) -> u32 {
    let len = board.word_through(x, y, orientation).len();
    if len == QWIRKLE_LENGTH {
        QWIRKLE_SCORE
    } else {
        len as u32
    }
}

/// Scores a move.
///
/// `board` must already contain the move, and `placed` must be exactly the
/// cells that were filled by it, laid out along `orientation` (which does
/// not matter if only one tile was placed).
///
/// Words consisting of a single tile are not counted, so a lone tile with no
/// neighbors scores 0. See [`first_move_score()`] for how the opening move
/// is handled.
pub fn score_move(board: &Board, placed: &[(i32, i32)], orientation: Orientation) -> u32 {
    let Some(&(x0, y0)) = placed.first() else {
        return 0;
    };

    // All placed tiles are part of the same primary word, so any of them will do
    let primary = score_word(board, x0, y0, orientation);
    let mut score = if primary > 1 { primary } else { 0 };

    for &(x, y) in placed {
        let secondary = score_word(board, x, y, orientation.perpendicular());
        if secondary > 1 {
            score += secondary;
        }
    }
    score
}

/// Applies the opening-move convention to a move score.
///
/// A single tile on an empty board cannot form a word of length > 1, so it
/// would score 0. On the first move of the game, it is credited 1 point.
pub fn first_move_score(score: u32, first_move: bool) -> u32 {
    if score == 0 && first_move {
        1
    } else {
        score
    }
}
