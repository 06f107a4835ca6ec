use tracing::debug;

use crate::{
    best_move, first_move_score, score_move, within_limits, Bag, Board, Command, IllegalMove,
    Orientation, Rack, Tile,
};

/// Bonus points for the player who uses up their last tile, which ends the game.
pub const FINISHING_BONUS: u32 = 6;

/// Summarizes the outcome of playing a turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Placed { score: u32, tiles_placed: usize },
    Exchanged { tiles_returned: usize },
}

/// Executes a player's command.
///
/// On success, the board, rack and bag are updated and the rack is refilled.
/// On error, nothing is modified.
pub fn execute_command(
    board: &mut Board,
    rack: &mut Rack,
    bag: &mut Bag,
    command: &Command,
    first_move: bool,
) -> Result<TurnOutcome, IllegalMove> {
    match command {
        Command::Place {
            orientation,
            x,
            y,
            rack_indices,
        } => execute_placement(board, rack, bag, *orientation, *x, *y, rack_indices, first_move),
        Command::Exchange { rack_indices } => execute_exchange(rack, bag, rack_indices, first_move),
    }
}

/// Places the rack tiles at `rack_indices` in a line, starting at `(x, y)`.
///
/// Cells along the line that are already occupied are skipped over. Unless
/// this is the first move, at least one of the tiles must touch a tile that
/// was on the board before.
#[allow(clippy::too_many_arguments)]
pub fn execute_placement(
    board: &mut Board,
    rack: &mut Rack,
    bag: &mut Bag,
    orientation: Orientation,
    x: i32,
    y: i32,
    rack_indices: &[usize],
    first_move: bool,
) -> Result<TurnOutcome, IllegalMove> {
    if !within_limits(x) || !within_limits(y) {
        return Err(IllegalMove::CoordinateOutOfRange { x, y });
    }
    let tiles = resolve_tiles(rack, rack_indices)?;

    let (dx, dy) = orientation.step();
    let (mut x, mut y) = (x, y);
    let mut new_board = board.clone();
    let mut placed = Vec::with_capacity(tiles.len());
    let mut adjacent = false;
    for &tile in &tiles {
        while !new_board.is_empty_at(x, y) {
            x += dx;
            y += dy;
        }
        adjacent |= board.is_adjacent(x, y);
        new_board.insert_tile(tile, x, y)?;
        placed.push((x, y));
    }

    // Checked first, since validity scans the whole bounding box
    if !adjacent && !first_move {
        return Err(IllegalMove::NotAdjacent);
    }
    if !new_board.is_valid() {
        return Err(IllegalMove::InvalidBoard);
    }

    let mut new_rack = rack.clone();
    for &tile in &tiles {
        new_rack.remove_tile(tile)?;
    }

    let score = first_move_score(score_move(&new_board, &placed, orientation), first_move);
    debug!(score, ?placed, "Tiles placed");

    *board = new_board;
    *rack = new_rack;
    rack.refill(bag);
    Ok(TurnOutcome::Placed {
        score,
        tiles_placed: tiles.len(),
    })
}

/// Returns the rack tiles at `rack_indices` to the bag and draws replacements.
///
/// The replacements are drawn before the tiles go back into the bag, so the
/// same tiles are not drawn again. If the bag runs short, the rack is topped
/// up from the returned tiles.
pub fn execute_exchange(
    rack: &mut Rack,
    bag: &mut Bag,
    rack_indices: &[usize],
    first_move: bool,
) -> Result<TurnOutcome, IllegalMove> {
    if first_move {
        return Err(IllegalMove::ExchangeOnFirstMove);
    }
    let tiles = resolve_tiles(rack, rack_indices)?;

    let mut new_rack = rack.clone();
    for &tile in &tiles {
        new_rack.remove_tile(tile)?;
    }
    *rack = new_rack;
    rack.refill(bag);
    let tiles_returned = tiles.len();
    bag.return_tiles(tiles);
    rack.refill(bag);
    Ok(TurnOutcome::Exchanged { tiles_returned })
}

/// Plays the best move found by [`best_move()`], or exchanges the whole rack
/// if there is none.
pub fn execute_computer_turn(board: &mut Board, rack: &mut Rack, bag: &mut Bag) -> TurnOutcome {
    let mv = best_move(board, rack);
    if mv.is_placement() {
        let outcome = TurnOutcome::Placed {
            score: mv.score,
            tiles_placed: mv.placed.len(),
        };
        *board = mv.board;
        *rack = mv.rack;
        rack.refill(bag);
        outcome
    } else {
        debug!("No moves possible, exchanging entire rack");
        // If the bag has fewer tiles than the rack, some of the returned tiles
        // are simply drawn again.
        let tiles = rack.take_all();
        let tiles_returned = tiles.len();
        bag.return_tiles(tiles);
        rack.refill(bag);
        TurnOutcome::Exchanged { tiles_returned }
    }
}

fn resolve_tiles(rack: &Rack, rack_indices: &[usize]) -> Result<Vec<Tile>, IllegalMove> {
    if rack_indices.is_empty() {
        return Err(IllegalMove::NoTilesGiven);
    }
    let mut tiles = Vec::with_capacity(rack_indices.len());
    for (n, &idx) in rack_indices.iter().enumerate() {
        if rack_indices[..n].contains(&idx) {
            return Err(IllegalMove::DuplicateRackIndex { idx });
        }
        let tile = rack.get(idx).ok_or(IllegalMove::RackIndexOutOfRange {
            idx,
            rack_size: rack.len(),
        })?;
        tiles.push(tile);
    }
    Ok(tiles)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::{tile, RACK_SIZE};

    fn bag() -> Bag {
        Bag::full(StdRng::seed_from_u64(11))
    }

    fn place(
        board: &mut Board,
        rack: &mut Rack,
        bag: &mut Bag,
        cmd: &str,
        first_move: bool,
    ) -> Result<TurnOutcome, IllegalMove> {
        let command: Command = cmd.parse().unwrap();
        execute_command(board, rack, bag, &command, first_move)
    }

    #[test]
    fn opening_pair_scores_two() {
        let (mut board, mut bag) = (Board::default(), bag());
        let mut rack = Rack::from(vec![tile!("ro"), tile!("rx")]);
        let outcome = place(&mut board, &mut rack, &mut bag, "h0,0;0,1", true);
        assert_eq!(
            outcome,
            Ok(TurnOutcome::Placed {
                score: 2,
                tiles_placed: 2
            })
        );
        assert_eq!(board.get(0, 0), Some(tile!("ro")));
        assert_eq!(board.get(1, 0), Some(tile!("rx")));
        assert_eq!(rack.len(), RACK_SIZE);
        assert_eq!(bag.tiles_left(), 108 - RACK_SIZE);
    }

    #[test]
    fn opening_single_tile_scores_one() {
        let (mut board, mut bag) = (Board::default(), bag());
        let mut rack = Rack::from(vec![tile!("ro")]);
        let outcome = place(&mut board, &mut rack, &mut bag, "v3,3;0", true);
        assert_eq!(
            outcome,
            Ok(TurnOutcome::Placed {
                score: 1,
                tiles_placed: 1
            })
        );
    }

    #[test]
    fn extending_next_to_a_tile() {
        let mut board = Board::new(&[(0, 0, tile!("ro"))]);
        let mut bag = bag();
        let mut rack = Rack::from(vec![tile!("rx")]);
        let outcome = place(&mut board, &mut rack, &mut bag, "h1,0;0", false);
        assert_eq!(
            outcome,
            Ok(TurnOutcome::Placed {
                score: 2,
                tiles_placed: 1
            })
        );
    }

    #[test]
    fn mixed_word_is_rejected_and_nothing_changes() {
        let mut board = Board::new(&[(0, 0, tile!("ro"))]);
        let mut bag = bag();
        let mut rack = Rack::from(vec![tile!("cx")]);
        let (board_before, rack_before) = (board.clone(), rack.clone());
        let outcome = place(&mut board, &mut rack, &mut bag, "v0,1;0", false);
        assert_eq!(outcome, Err(IllegalMove::InvalidBoard));
        assert_eq!(board, board_before);
        assert_eq!(rack, rack_before);
        assert_eq!(bag.tiles_left(), 108);
    }

    #[test]
    fn isolated_placement_is_rejected() {
        let mut board = Board::new(&[(0, 0, tile!("ro"))]);
        let mut bag = bag();
        let mut rack = Rack::from(vec![tile!("cx")]);
        let outcome = place(&mut board, &mut rack, &mut bag, "v0,2;0", false);
        assert_eq!(outcome, Err(IllegalMove::NotAdjacent));
    }

    #[test]
    fn far_away_placement_is_rejected_without_scanning() {
        let mut board = Board::new(&[(0, 0, tile!("ro"))]);
        let mut bag = bag();
        let mut rack = Rack::from(vec![tile!("rx")]);
        let outcome = place(&mut board, &mut rack, &mut bag, "h100000000,100000000;0", false);
        assert_eq!(outcome, Err(IllegalMove::NotAdjacent));
        assert_eq!(board.len(), 1);
        assert_eq!(rack.len(), 1);
    }

    #[test]
    fn coordinates_at_the_edge_are_rejected() {
        let mut board = Board::default();
        let mut bag = bag();
        let mut rack = Rack::from(vec![tile!("ro")]);
        let outcome = execute_placement(
            &mut board,
            &mut rack,
            &mut bag,
            Orientation::Horizontal,
            i32::MAX,
            0,
            &[0],
            true,
        );
        assert_eq!(
            outcome,
            Err(IllegalMove::CoordinateOutOfRange { x: i32::MAX, y: 0 })
        );
        assert!(board.is_empty());
    }

    #[test]
    fn occupied_cells_are_skipped() {
        let mut board = Board::new(&[(0, 0, tile!("ro"))]);
        let mut bag = bag();
        let mut rack = Rack::from(vec![tile!("rx"), tile!("rd")]);
        // Starts on the existing tile, so the tiles end up at (1, 0) and (2, 0)
        let outcome = place(&mut board, &mut rack, &mut bag, "h0,0;0,1", false);
        assert_eq!(
            outcome,
            Ok(TurnOutcome::Placed {
                score: 3,
                tiles_placed: 2
            })
        );
        assert_eq!(board.get(2, 0), Some(tile!("rd")));
    }

    #[test]
    fn bad_indices_are_rejected() {
        let mut board = Board::new(&[(0, 0, tile!("ro"))]);
        let mut bag = bag();
        let mut rack = Rack::from(vec![tile!("rx")]);
        assert_eq!(
            place(&mut board, &mut rack, &mut bag, "h1,0;1", false),
            Err(IllegalMove::RackIndexOutOfRange {
                idx: 1,
                rack_size: 1
            })
        );
        assert_eq!(
            place(&mut board, &mut rack, &mut bag, "h1,0;0,0", false),
            Err(IllegalMove::DuplicateRackIndex { idx: 0 })
        );
    }

    #[test]
    fn exchange_draws_new_tiles() {
        let mut board = Board::new(&[(0, 0, tile!("ro"))]);
        let mut bag = bag();
        let mut rack = Rack::new();
        rack.refill(&mut bag);
        let kept = rack.get(1);
        let outcome = place(&mut board, &mut rack, &mut bag, "r0,2", false);
        assert_eq!(outcome, Ok(TurnOutcome::Exchanged { tiles_returned: 2 }));
        assert_eq!(rack.len(), RACK_SIZE);
        assert_eq!(rack.get(0), kept);
        assert_eq!(bag.tiles_left(), 108 - RACK_SIZE);
    }

    #[test]
    fn exchange_with_empty_bag_gives_tiles_back() {
        let mut bag = Bag::from_tiles(vec![], StdRng::seed_from_u64(1));
        let mut rack = Rack::from(vec![tile!("ro"), tile!("rx")]);
        let outcome = execute_exchange(&mut rack, &mut bag, &[0], false);
        assert_eq!(outcome, Ok(TurnOutcome::Exchanged { tiles_returned: 1 }));
        assert_eq!(rack.len(), 2);
        assert!(bag.is_empty());
    }

    #[test]
    fn no_exchange_on_first_move() {
        let mut bag = bag();
        let mut rack = Rack::from(vec![tile!("ro")]);
        assert_eq!(
            execute_exchange(&mut rack, &mut bag, &[0], true),
            Err(IllegalMove::ExchangeOnFirstMove)
        );
    }

    #[test]
    fn computer_places_best_move() {
        let mut board = Board::new(&[(0, 0, tile!("ro"))]);
        let mut bag = Bag::from_tiles(vec![], StdRng::seed_from_u64(1));
        let mut rack = Rack::from(vec![tile!("rx"), tile!("rd"), tile!("bs")]);
        let outcome = execute_computer_turn(&mut board, &mut rack, &mut bag);
        // rx next to ro and rd below rx, two words of two
        assert_eq!(
            outcome,
            TurnOutcome::Placed {
                score: 4,
                tiles_placed: 2
            }
        );
        assert!(board.is_valid());
        assert_eq!(rack.tiles(), &[tile!("bs")]);
        assert_eq!(board.len(), 3);
    }

    #[test]
    fn computer_exchanges_when_stuck() {
        let mut board = Board::new(&[(0, 0, tile!("ro"))]);
        let mut bag = Bag::from_tiles(vec![tile!("go"); 10], StdRng::seed_from_u64(1));
        let mut rack = Rack::from(vec![tile!("cx"), tile!("bd")]);
        let outcome = execute_computer_turn(&mut board, &mut rack, &mut bag);
        assert_eq!(outcome, TurnOutcome::Exchanged { tiles_returned: 2 });
        assert_eq!(board.len(), 1);
        assert_eq!(rack.len(), RACK_SIZE);
        assert_eq!(bag.tiles_left(), 12 - RACK_SIZE);
    }
}
