use tracing::{debug, trace};

use crate::{first_move_score, score_move, Board, Orientation, Rack, Tile};

/// The result of a move search.
///
/// Holds the board and rack as they would be after the move. A score of 0
/// means that no legal placement was found, in which case the board and rack
/// are unchanged and `placed` is empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub board: Board,
    pub rack: Rack,
    pub score: u32,
    /// The cells filled by this move, in the order the tiles were placed.
    pub placed: Vec<(i32, i32)>,
    pub orientation: Orientation,
}

impl Move {
    fn unchanged(board: &Board, rack: &Rack) -> Self {
        Self {
            board: board.clone(),
            rack: rack.clone(),
            score: 0,
            placed: Vec::new(),
            orientation: Orientation::Horizontal,
        }
    }

    /// Did the search find anything to place?
    pub fn is_placement(&self) -> bool {
        self.score > 0
    }

    /// The tiles used by this move, in placement order.
    pub fn tiles(&self) -> Vec<Tile> {
        self.placed
            .iter()
            .filter_map(|&(x, y)| self.board.get(x, y))
            .collect()
    }
}

/// The four directions in which a word can grow away from its anchor tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Right,
    Left,
    Down,
    Up,
}

impl Direction {
    const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    fn step(self) -> (i32, i32) {
        match self {
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
            Direction::Down => (0, 1),
            Direction::Up => (0, -1),
        }
    }

    fn orientation(self) -> Orientation {
        match self {
            Direction::Right | Direction::Left => Orientation::Horizontal,
            Direction::Down | Direction::Up => Orientation::Vertical,
        }
    }
}

/// Finds the highest-scoring move that can be made with the tiles in `rack`.
///
/// This is an exhaustive search. Every empty cell next to the existing tiles
/// (within the board's bounds grown by one cell on each side) is tried as an
/// anchor for every distinct rack tile. From each legal anchor placement, the
/// word is extended with the remaining tiles in each of the four directions
/// separately.
///
/// If the board is empty, the only anchor is `(0, 0)` and the opening-move
/// convention of [`first_move_score()`] applies.
///
/// If nothing can be placed, the returned move has score 0 and the
/// unchanged board and rack. Ties are resolved in favor of the move found
/// first.
pub fn best_move(board: &Board, rack: &Rack) -> Move {
    if board.is_empty() {
        let mut best = Move::unchanged(board, rack);
        explore_anchor(board, rack, 0, 0, true, &mut best);
        debug!(score = best.score, tiles = best.placed.len(), "Best opening move");
        return best;
    }

    let mut best = Move::unchanged(board, rack);
    for (x, y) in board.bbox().expanded(1).points() {
        let candidate = best_move_at(board, rack, x, y);
        if candidate.score > best.score {
            debug!(x, y, score = candidate.score, "New best move");
            best = candidate;
        }
    }
    best
}

/// Finds the best move that places a tile at the anchor `(x, y)`.
///
/// Returns the zero-score move if the anchor is occupied, not next to an
/// existing tile, or no rack tile fits there.
pub fn best_move_at(board: &Board, rack: &Rack, x: i32, y: i32) -> Move {
    let mut best = Move::unchanged(board, rack);
    if board.is_adjacent(x, y) {
        explore_anchor(board, rack, x, y, false, &mut best);
    }
    best
}

fn explore_anchor(board: &Board, rack: &Rack, x: i32, y: i32, first_move: bool, best: &mut Move) {
    for (idx, tile) in rack.distinct_tiles() {
        let Some(new_board) = place_if_valid(board, tile, x, y) else {
            continue;
        };
        trace!(x, y, tile = %tile.code(), "Legal anchor");
        let new_rack = rack.without(idx);
        for direction in Direction::ALL {
            let candidate = extend(&new_board, &new_rack, vec![(x, y)], direction, first_move);
            if candidate.score > best.score {
                *best = candidate;
            }
        }
    }
}

// Scores the tiles placed so far, then tries to add each remaining tile at the
// next empty cell in `direction` and recurses. `placed` is never empty.
fn extend(
    board: &Board,
    rack: &Rack,
    placed: Vec<(i32, i32)>,
    direction: Direction,
    first_move: bool,
) -> Move {
    let orientation = direction.orientation();
    let score = first_move_score(score_move(board, &placed, orientation), first_move);

    let (dx, dy) = direction.step();
    let (mut x, mut y) = placed.last().copied().unwrap_or_default();
    while !board.is_empty_at(x, y) {
        x += dx;
        y += dy;
    }

    let mut best = Move {
        board: board.clone(),
        rack: rack.clone(),
        score,
        placed: placed.clone(),
        orientation,
    };

    for (idx, tile) in rack.distinct_tiles() {
        let Some(new_board) = place_if_valid(board, tile, x, y) else {
            continue;
        };
        let mut new_placed = placed.clone();
        new_placed.push((x, y));
        let candidate = extend(&new_board, &rack.without(idx), new_placed, direction, first_move);
        if candidate.score > best.score {
            best = candidate;
        }
    }
    best
}

fn place_if_valid(board: &Board, tile: Tile, x: i32, y: i32) -> Option<Board> {
    board
        .with_tile(tile, x, y)
        .ok()
        .filter(|new_board| new_board.is_valid())
}
