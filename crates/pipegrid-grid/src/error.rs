//! Error types for grid construction and start resolution.

use pipegrid_core::{ConnectorType, Coord};
use std::fmt;

/// Errors arising from grid parsing or start-cell resolution.
///
/// All are fatal for the pipeline: they signal bad input, never a
/// recoverable condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The input contained no rows (or rows of zero width).
    Empty,
    /// A row's length differs from the first row's.
    MalformedGrid {
        /// Zero-based index of the offending row.
        row: usize,
        /// Its length in symbols.
        len: usize,
        /// The length established by the first row.
        expected: usize,
    },
    /// A character outside the connector alphabet.
    UnknownSymbol {
        /// The offending character.
        symbol: char,
        /// Where it was found.
        coord: Coord,
    },
    /// The grid must carry exactly one start marker.
    InvalidStartCount {
        /// How many were found.
        count: usize,
    },
    /// A grid dimension exceeds the coordinate range.
    DimensionTooLarge {
        /// Which dimension ("width" or "height").
        name: &'static str,
        /// The offending value.
        value: usize,
        /// The maximum supported.
        max: u32,
    },
    /// More than one connector shape is compatible with the start cell's
    /// neighbours.
    AmbiguousStart {
        /// The surviving candidates, in symbol-table order.
        candidates: Vec<ConnectorType>,
    },
    /// No connector shape is compatible with the start cell's neighbours.
    NoValidStart,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid must have at least one non-empty row"),
            Self::MalformedGrid { row, len, expected } => {
                write!(f, "row {row} has length {len}, expected {expected}")
            }
            Self::UnknownSymbol { symbol, coord } => {
                write!(f, "unknown connector symbol {symbol:?} at {coord}")
            }
            Self::InvalidStartCount { count } => {
                write!(f, "expected exactly one start marker, found {count}")
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::AmbiguousStart { candidates } => {
                write!(f, "start cell is ambiguous between ")?;
                for (i, c) in candidates.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{c:?}")?;
                }
                Ok(())
            }
            Self::NoValidStart => {
                write!(f, "no connector shape is compatible with the start cell's neighbours")
            }
        }
    }
}

impl std::error::Error for GridError {}
