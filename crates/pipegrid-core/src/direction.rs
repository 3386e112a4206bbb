//! Cardinal directions with fixed inverses and unit offsets.

use crate::coord::Coord;
use std::fmt;

/// One of the four cardinal directions.
///
/// Each direction has a fixed inverse and a fixed unit [`Coord`] offset
/// in screen orientation (north is `(0, -1)`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Up the rows (`y - 1`).
    North,
    /// Along a row (`x + 1`).
    East,
    /// Down the rows (`y + 1`).
    South,
    /// Back along a row (`x - 1`).
    West,
}

impl Direction {
    /// All four directions in canonical N/E/S/W order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The opposite direction.
    pub const fn inverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// The unit offset for one step in this direction.
    pub const fn offset(self) -> Coord {
        match self {
            Direction::North => Coord::new(0, -1),
            Direction::East => Coord::new(1, 0),
            Direction::South => Coord::new(0, 1),
            Direction::West => Coord::new(-1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        };
        write!(f, "{name}")
    }
}
