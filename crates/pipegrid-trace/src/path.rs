//! The traced cycle and its winding orientation.

use indexmap::IndexSet;
use pipegrid_core::Coord;

/// Overall rotational sense of a closed path, in screen orientation
/// (y grows down).
///
/// Derived once per path from the shoelace signed area; it fixes globally
/// which perpendicular side of the direction of travel faces the
/// enclosed interior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    /// Positive signed area in screen coordinates; interior lies to the
    /// right of travel.
    Clockwise,
    /// Negative signed area; interior lies to the left of travel.
    CounterClockwise,
}

impl Winding {
    /// The unit offset pointing at the interior side, given the current
    /// travel offset.
    pub fn interior_offset(self, travel: Coord) -> Coord {
        match self {
            Winding::Clockwise => travel.turned_right(),
            Winding::CounterClockwise => travel.turned_left(),
        }
    }
}

/// An ordered, cyclic, duplicate-free sequence of coordinates.
///
/// Iteration order is traversal order, so predecessor/successor lookups
/// are index arithmetic modulo [`LoopPath::len`]. The edge from the last
/// entry back to the first closes the cycle implicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopPath {
    cells: IndexSet<Coord>,
}

impl LoopPath {
    /// Build a path from coordinates in traversal order. Duplicates are
    /// dropped, keeping the first occurrence.
    pub fn new(cells: impl IntoIterator<Item = Coord>) -> LoopPath {
        LoopPath {
            cells: cells.into_iter().collect(),
        }
    }

    pub(crate) fn from_set(cells: IndexSet<Coord>) -> LoopPath {
        LoopPath { cells }
    }

    /// Full cycle length (number of cells on the loop).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the path holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `coord` lies on the cycle.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// The coordinate at `index` in traversal order.
    pub fn get(&self, index: usize) -> Option<Coord> {
        self.cells.get_index(index).copied()
    }

    /// The traversal index of `coord`, if it lies on the cycle.
    pub fn position(&self, coord: Coord) -> Option<usize> {
        self.cells.get_index_of(&coord)
    }

    /// Iterate the cycle in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }

    /// The traversal's first cell (the grid's start cell).
    pub fn start(&self) -> Option<Coord> {
        self.get(0)
    }

    /// Maximum shortest-arc distance from the start along the cycle.
    ///
    /// Read as an undirected loop, the farthest cell is half the cycle
    /// length away (integer floor).
    pub fn furthest_distance(&self) -> usize {
        self.len() / 2
    }

    /// Shortest-arc distance from the start to `coord` along the cycle.
    pub fn arc_distance(&self, coord: Coord) -> Option<usize> {
        let index = self.position(coord)?;
        Some(index.min(self.len() - index))
    }

    /// Twice the signed area enclosed by the cycle (shoelace sum over
    /// consecutive coordinates, including the closing edge).
    ///
    /// Positive in screen orientation means clockwise travel.
    pub fn signed_area2(&self) -> i64 {
        let n = self.len();
        let mut sum = 0i64;
        for i in 0..n {
            let p = self.cells[i];
            let q = self.cells[(i + 1) % n];
            sum += i64::from(p.x) * i64::from(q.y) - i64::from(q.x) * i64::from(p.y);
        }
        sum
    }

    /// The cycle's winding orientation, from the shoelace signed area.
    pub fn winding(&self) -> Winding {
        if self.signed_area2() > 0 {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }
}
