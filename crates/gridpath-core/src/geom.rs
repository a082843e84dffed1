//! Grid positions.

/// A 2D integer point. X grows right, Y grows down (screen coordinates).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The right and bottom neighbours, in that order.
    ///
    /// These are the two directions a grid template links each cell to.
    #[inline]
    pub const fn forward_neighbors(self) -> [Point; 2] {
        [self.shift(1, 0), self.shift(0, 1)]
    }

    /// Whether `self` lies inside the `side`×`side` square anchored at the
    /// origin.
    #[inline]
    pub fn in_square(self, side: i32) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < side && self.y < side
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_moves_both_axes() {
        assert_eq!(Point::new(3, 4).shift(-3, 1), Point::new(0, 5));
    }

    #[test]
    fn forward_neighbors_are_right_then_down() {
        let p = Point::new(2, 1);
        assert_eq!(p.forward_neighbors(), [Point::new(3, 1), Point::new(2, 2)]);
    }

    #[test]
    fn square_membership() {
        assert!(Point::default().in_square(1));
        assert!(Point::new(2, 2).in_square(3));
        assert!(!Point::new(3, 0).in_square(3));
        assert!(!Point::new(0, -1).in_square(3));
        assert!(!Point::default().in_square(0));
    }
}
