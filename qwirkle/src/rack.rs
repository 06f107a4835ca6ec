use crate::{Bag, RackError, Tile};

/// How many tiles a player holds when the bag is not exhausted.
pub const RACK_SIZE: usize = 6;

/// The tiles a player currently holds.
///
/// The order is the order in which they were drawn, and is what rack
/// indices in [commands](crate::Command) refer to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rack {
    tiles: Vec<Tile>,
}

impl Rack {
    /// Creates an empty rack.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<Tile> {
        self.tiles.get(idx).copied()
    }

    /// Removes one instance of `tile`.
    ///
    /// If there is none, an error is returned and the rack is unmodified.
    pub fn remove_tile(&mut self, tile: Tile) -> Result<(), RackError> {
        let idx = self
            .tiles
            .iter()
            .position(|&t| t == tile)
            .ok_or(RackError::TileNotInRack { tile })?;
        self.tiles.remove(idx);
        Ok(())
    }

    /// A copy of this rack without the tile at `idx`.
    ///
    /// Indices past the end are ignored.
    #[must_use]
    pub fn without(&self, idx: usize) -> Self {
        let tiles = self
            .tiles
            .iter()
            .enumerate()
            .filter_map(|(i, &t)| (i != idx).then_some(t))
            .collect();
        Self { tiles }
    }

    /// The index and value of the first instance of each distinct tile.
    pub fn distinct_tiles(&self) -> Vec<(usize, Tile)> {
        let mut result: Vec<(usize, Tile)> = Vec::with_capacity(self.tiles.len());
        for (idx, &tile) in self.tiles.iter().enumerate() {
            if !result.iter().any(|&(_, t)| t == tile) {
                result.push((idx, tile));
            }
        }
        result
    }

    /// Draws from the bag until the rack is full or the bag is empty.
    ///
    /// Returns the number of tiles drawn.
    pub fn refill(&mut self, bag: &mut Bag) -> usize {
        let mut drawn = 0;
        while self.tiles.len() < RACK_SIZE {
            match bag.pick_tile() {
                Some(tile) => {
                    self.tiles.push(tile);
                    drawn += 1;
                }
                None => break,
            }
        }
        drawn
    }

    /// Empties the rack, returning all of its tiles.
    pub fn take_all(&mut self) -> Vec<Tile> {
        std::mem::take(&mut self.tiles)
    }
}

impl From<Vec<Tile>> for Rack {
    fn from(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }
}

impl FromIterator<Tile> for Rack {
    fn from_iter<T: IntoIterator<Item = Tile>>(iter: T) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::tile;

    #[test]
    fn remove_takes_one_instance() {
        let mut rack = Rack::from(vec![tile!("ro"), tile!("bx"), tile!("ro")]);
        rack.remove_tile(tile!("ro")).unwrap();
        assert_eq!(rack.tiles(), &[tile!("bx"), tile!("ro")]);
    }

    #[test]
    fn removing_absent_tile_fails() {
        let mut rack = Rack::from(vec![tile!("ro")]);
        assert_eq!(
            rack.remove_tile(tile!("cx")),
            Err(RackError::TileNotInRack { tile: tile!("cx") })
        );
        assert_eq!(rack.len(), 1);
    }

    #[test]
    fn without_keeps_order() {
        let rack = Rack::from(vec![tile!("ro"), tile!("bx"), tile!("gd")]);
        assert_eq!(rack.without(1).tiles(), &[tile!("ro"), tile!("gd")]);
        assert_eq!(rack.without(9), rack);
    }

    #[test]
    fn distinct_tiles_skips_duplicates() {
        let rack = Rack::from(vec![tile!("ro"), tile!("bx"), tile!("ro"), tile!("gd")]);
        assert_eq!(
            rack.distinct_tiles(),
            vec![(0, tile!("ro")), (1, tile!("bx")), (3, tile!("gd"))]
        );
    }

    #[test]
    fn refill_stops_when_full_or_bag_empty() {
        let mut bag = Bag::full(StdRng::seed_from_u64(3));
        let mut rack = Rack::new();
        assert_eq!(rack.refill(&mut bag), RACK_SIZE);
        assert_eq!(rack.refill(&mut bag), 0);
        assert_eq!(bag.tiles_left(), 108 - RACK_SIZE);

        let mut small_bag = Bag::from_tiles(vec![tile!("ro"), tile!("rx")], StdRng::seed_from_u64(3));
        let mut rack = Rack::new();
        assert_eq!(rack.refill(&mut small_bag), 2);
        assert!(small_bag.is_empty());
    }
}
