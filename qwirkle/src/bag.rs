use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::Tile;

/// How often each of the 36 distinct tiles is in a full bag.
pub const COPIES_PER_TILE: usize = 3;

/// The shared pool of tiles that have not been drawn yet.
///
/// The bag owns its random number generator, because returned tiles are
/// shuffled back in.
#[derive(Clone, Debug)]
pub struct Bag {
    tiles: Vec<Tile>,
    rng: StdRng,
}

impl Bag {
    /// A shuffled bag with all 108 tiles.
    pub fn full(rng: StdRng) -> Self {
        let tiles = Tile::all()
            .flat_map(|tile| std::iter::repeat(tile).take(COPIES_PER_TILE))
            .collect();
        Self::from_tiles(tiles, rng)
    }

    /// A shuffled bag with the given tiles.
    pub fn from_tiles(tiles: Vec<Tile>, rng: StdRng) -> Self {
        let mut bag = Self { tiles, rng };
        bag.shuffle();
        bag
    }

    pub fn tiles_left(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Draws a tile, or returns `None` if the bag is empty.
    pub fn pick_tile(&mut self) -> Option<Tile> {
        self.tiles.pop()
    }

    /// Puts a tile back and reshuffles.
    pub fn return_tile(&mut self, tile: Tile) {
        self.tiles.push(tile);
        self.shuffle();
    }

    /// Puts tiles back and reshuffles.
    pub fn return_tiles(&mut self, tiles: impl IntoIterator<Item = Tile>) {
        self.tiles.extend(tiles);
        self.shuffle();
    }

    fn shuffle(&mut self) {
        self.tiles.shuffle(&mut self.rng);
    }
}
