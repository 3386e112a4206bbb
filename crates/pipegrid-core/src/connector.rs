//! The closed set of connector (pipe tile) variants.
//!
//! Each variant maps to exactly the cardinal directions it opens toward.
//! Neighbour compatibility is derived rather than tabulated: a neighbour
//! in direction `d` is compatible iff it opens back toward `d.inverse()`.
//! This replaces a character-keyed lookup table with exhaustively matched
//! enum branches.

use crate::direction::Direction;
use std::fmt;

use Direction::{East, North, South, West};

/// A grid cell's connector shape.
///
/// The six pipe variants each open toward exactly two directions.
/// [`Ground`](ConnectorType::Ground) opens nowhere, and
/// [`Start`](ConnectorType::Start) is the unresolved start marker whose
/// true shape is inferred from its neighbours before any traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConnectorType {
    /// `|` — opens north and south.
    Vertical,
    /// `-` — opens east and west.
    Horizontal,
    /// `L` — bend opening north and east.
    BendNE,
    /// `J` — bend opening north and west.
    BendNW,
    /// `7` — bend opening south and west.
    BendSW,
    /// `F` — bend opening south and east.
    BendSE,
    /// `.` — no openings.
    Ground,
    /// `S` — unresolved start marker; no openings until resolved.
    Start,
}

impl ConnectorType {
    /// The six pipe variants, in symbol-table order.
    pub const PIPES: [ConnectorType; 6] = [
        ConnectorType::Vertical,
        ConnectorType::Horizontal,
        ConnectorType::BendNE,
        ConnectorType::BendNW,
        ConnectorType::BendSW,
        ConnectorType::BendSE,
    ];

    /// Parse one input symbol. Returns `None` for characters outside the
    /// fixed alphabet `| - L J 7 F . S`.
    pub const fn from_symbol(symbol: char) -> Option<ConnectorType> {
        match symbol {
            '|' => Some(ConnectorType::Vertical),
            '-' => Some(ConnectorType::Horizontal),
            'L' => Some(ConnectorType::BendNE),
            'J' => Some(ConnectorType::BendNW),
            '7' => Some(ConnectorType::BendSW),
            'F' => Some(ConnectorType::BendSE),
            '.' => Some(ConnectorType::Ground),
            'S' => Some(ConnectorType::Start),
            _ => None,
        }
    }

    /// The input symbol for this connector.
    pub const fn symbol(self) -> char {
        match self {
            ConnectorType::Vertical => '|',
            ConnectorType::Horizontal => '-',
            ConnectorType::BendNE => 'L',
            ConnectorType::BendNW => 'J',
            ConnectorType::BendSW => '7',
            ConnectorType::BendSE => 'F',
            ConnectorType::Ground => '.',
            ConnectorType::Start => 'S',
        }
    }

    /// A box-drawing glyph for rendering.
    pub const fn glyph(self) -> char {
        match self {
            ConnectorType::Vertical => '│',
            ConnectorType::Horizontal => '─',
            ConnectorType::BendNE => '└',
            ConnectorType::BendNW => '┘',
            ConnectorType::BendSW => '┐',
            ConnectorType::BendSE => '┌',
            ConnectorType::Ground => '·',
            ConnectorType::Start => 'S',
        }
    }

    /// The directions this connector opens toward.
    ///
    /// Exactly two for pipe variants; empty for `Ground` and the
    /// unresolved `Start` marker.
    pub const fn openings(self) -> &'static [Direction] {
        match self {
            ConnectorType::Vertical => &[North, South],
            ConnectorType::Horizontal => &[East, West],
            ConnectorType::BendNE => &[North, East],
            ConnectorType::BendNW => &[North, West],
            ConnectorType::BendSW => &[South, West],
            ConnectorType::BendSE => &[South, East],
            ConnectorType::Ground | ConnectorType::Start => &[],
        }
    }

    /// The edge-adjacent sides: the directions this connector does NOT
    /// open toward. Region classification probes these sides.
    ///
    /// The complement pair for pipe variants; empty for `Ground` and
    /// `Start`, which never sit on a traced cycle.
    pub const fn closed_sides(self) -> &'static [Direction] {
        match self {
            ConnectorType::Vertical => &[East, West],
            ConnectorType::Horizontal => &[North, South],
            ConnectorType::BendNE => &[South, West],
            ConnectorType::BendNW => &[East, South],
            ConnectorType::BendSW => &[North, East],
            ConnectorType::BendSE => &[North, West],
            ConnectorType::Ground | ConnectorType::Start => &[],
        }
    }

    /// Whether this connector opens toward `dir`.
    pub fn opens(self, dir: Direction) -> bool {
        self.openings().contains(&dir)
    }

    /// Whether this is one of the six pipe variants.
    pub const fn is_pipe(self) -> bool {
        !matches!(self, ConnectorType::Ground | ConnectorType::Start)
    }
}

impl fmt::Display for ConnectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
