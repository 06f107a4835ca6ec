/// A 2D area represented by a min + max coordinate pair.
///
/// The two coordinates form a _half-open_ 2D range, i.e. a point with
/// `x == x_max` is not contained in the area. An area with `x_min == x_max`
/// contains no points at all, which is what an empty board reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoundingBox {
    pub x_min: i32,
    pub y_min: i32,
    pub x_max: i32,
    pub y_max: i32,
}

impl BoundingBox {
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x_min && y >= self.y_min && x < self.x_max && y < self.y_max
    }

    /// The area covering only the point `(x, y)`.
    pub fn singleton(x: i32, y: i32) -> Self {
        Self {
            x_min: x,
            y_min: y,
            x_max: x + 1,
            y_max: y + 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x_min >= self.x_max || self.y_min >= self.y_max
    }

    pub fn width(&self) -> i32 {
        (self.x_max - self.x_min).max(0)
    }

    pub fn height(&self) -> i32 {
        (self.y_max - self.y_min).max(0)
    }

    /// Expands the bounding box to cover point `(x, y)`.
    ///
    /// An empty bounding box becomes the singleton at `(x, y)`.
    pub fn update(&mut self, x: i32, y: i32) {
        if self.is_empty() {
            *self = Self::singleton(x, y);
            return;
        }
        self.x_min = self.x_min.min(x);
        self.x_max = self.x_max.max(x + 1);
        self.y_min = self.y_min.min(y);
        self.y_max = self.y_max.max(y + 1);
    }

    /// The same area grown by `margin` cells on every side.
    pub fn expanded(&self, margin: i32) -> Self {
        Self {
            x_min: self.x_min - margin,
            y_min: self.y_min - margin,
            x_max: self.x_max + margin,
            y_max: self.y_max + margin,
        }
    }

    /// All points in the area, column by column.
    pub fn points(&self) -> impl Iterator<Item = (i32, i32)> {
        let Self {
            x_min,
            y_min,
            x_max,
            y_max,
        } = *self;
        (x_min..x_max).flat_map(move |x| (y_min..y_max).map(move |y| (x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_grows_in_every_direction() {
        let mut bbox = BoundingBox::default();
        assert!(bbox.is_empty());
        bbox.update(2, -1);
        assert_eq!(bbox, BoundingBox::singleton(2, -1));
        bbox.update(-3, 4);
        assert_eq!(
            bbox,
            BoundingBox {
                x_min: -3,
                y_min: -1,
                x_max: 3,
                y_max: 5
            }
        );
        assert!(bbox.contains(-3, 4));
        assert!(!bbox.contains(3, 4));
    }

    #[test]
    fn expanded_points_cover_the_border() {
        let bbox = BoundingBox::singleton(0, 0).expanded(1);
        assert_eq!(bbox.points().count(), 9);
        assert_eq!(bbox.points().next(), Some((-1, -1)));
    }
}
