use std::collections::BTreeMap;

use quickcheck::{Arbitrary, Gen};

use crate::{Board, Color, Shape, Tile};

/// Arbitrary tiles on a small area, at most one per coordinate.
///
/// The resulting board is usually not valid.
#[derive(Clone, Debug)]
pub struct PlacementsInput {
    pub placements: Vec<(i32, i32, Tile)>,
}

impl Arbitrary for PlacementsInput {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_tiles = usize::arbitrary(g) % 12;
        let mut tiles_on_board = BTreeMap::new();
        for _ in 0..num_tiles {
            let x = (u8::arbitrary(g) % 8) as i32 - 4;
            let y = (u8::arbitrary(g) % 8) as i32 - 4;
            tiles_on_board.insert((x, y), Tile::arbitrary(g));
        }
        let placements = tiles_on_board
            .into_iter()
            .map(|((x, y), tile)| (x, y, tile))
            .collect();
        PlacementsInput { placements }
    }
}

/// A valid, non-empty board together with a few rack tiles.
///
/// Tiles are drawn from a reduced set of colors and shapes, so that they
/// actually fit together now and then.
#[derive(Clone, Debug)]
pub struct SearchInput {
    pub board: Board,
    pub rack: Vec<Tile>,
}

fn arbitrary_matching_tile(g: &mut Gen) -> Tile {
    Tile {
        color: *g.choose(&Color::ALL[..3]).unwrap(),
        shape: *g.choose(&Shape::ALL[..3]).unwrap(),
    }
}

impl Arbitrary for SearchInput {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut board = Board::new(&[(0, 0, arbitrary_matching_tile(g))]);
        let attempts = usize::arbitrary(g) % 24;
        for _ in 0..attempts {
            let area = board.bbox().expanded(1);
            let x = area.x_min + (u8::arbitrary(g) as i32 % area.width());
            let y = area.y_min + (u8::arbitrary(g) as i32 % area.height());
            if !board.is_adjacent(x, y) {
                continue;
            }
            if let Ok(candidate) = board.with_tile(arbitrary_matching_tile(g), x, y) {
                if candidate.is_valid() {
                    board = candidate;
                }
            }
        }

        let rack_size = 1 + usize::arbitrary(g) % 4;
        let rack = (0..rack_size).map(|_| arbitrary_matching_tile(g)).collect();
        SearchInput { board, rack }
    }
}

impl Arbitrary for Color {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&Color::ALL).unwrap()
    }
}

impl Arbitrary for Shape {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&Shape::ALL).unwrap()
    }
}

impl Arbitrary for Tile {
    fn arbitrary(g: &mut Gen) -> Self {
        Self {
            color: Color::arbitrary(g),
            shape: Shape::arbitrary(g),
        }
    }
}
