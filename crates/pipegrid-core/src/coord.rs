//! Grid coordinates and the 90° rotation helpers used for
//! perpendicular probing.

use std::fmt;
use std::ops::{Add, Sub};

/// A zero-based grid coordinate.
///
/// `x` grows east (along a row), `y` grows south (down the rows),
/// matching the order in which text input is read. Unit offsets between
/// adjacent cells are themselves `Coord` values, so `Add`/`Sub` cover
/// both positions and travel deltas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Column, growing east.
    pub x: i32,
    /// Row, growing south.
    pub y: i32,
}

impl Coord {
    /// Construct a coordinate from `(x, y)` components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Rotate this offset 90° to the left of travel.
    ///
    /// "Left" is in screen orientation (y down): heading east, left is
    /// north. Only meaningful for unit travel offsets, but defined for
    /// any vector.
    pub const fn turned_left(self) -> Self {
        Self {
            x: self.y,
            y: -self.x,
        }
    }

    /// Rotate this offset 90° to the right of travel.
    ///
    /// Heading east, right is south (screen orientation, y down).
    pub const fn turned_right(self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Coord;

    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn add_sub_are_componentwise() {
        let a = Coord::new(3, -2);
        let b = Coord::new(-1, 5);
        assert_eq!(a + b, Coord::new(2, 3));
        assert_eq!(a - b, Coord::new(4, -7));
    }

    #[test]
    fn rotations_in_screen_orientation() {
        let east = Coord::new(1, 0);
        assert_eq!(east.turned_left(), Coord::new(0, -1)); // north
        assert_eq!(east.turned_right(), Coord::new(0, 1)); // south
        let north = Coord::new(0, -1);
        assert_eq!(north.turned_left(), Coord::new(-1, 0)); // west
        assert_eq!(north.turned_right(), Coord::new(1, 0)); // east
    }

    proptest! {
        #[test]
        fn rotations_invert_each_other(x in -100i32..100, y in -100i32..100) {
            let c = Coord::new(x, y);
            prop_assert_eq!(c.turned_left().turned_right(), c);
            prop_assert_eq!(c.turned_right().turned_left(), c);
        }

        #[test]
        fn four_left_turns_are_identity(x in -100i32..100, y in -100i32..100) {
            let c = Coord::new(x, y);
            let turned = c.turned_left().turned_left().turned_left().turned_left();
            prop_assert_eq!(turned, c);
        }
    }
}
