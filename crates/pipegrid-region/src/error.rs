//! Error types for region classification.

use pipegrid_core::Coord;
use std::fmt;

/// Errors arising during region classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionError {
    /// A cell was still unresolved after the full boundary walk: a
    /// disconnected pocket no boundary-adjacent seed could reach. This
    /// signals a defective path, not a degraded answer.
    IncompleteClassification {
        /// The first unresolved cell in row-major order.
        coord: Coord,
    },
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteClassification { coord } => {
                write!(f, "cell {coord} left unresolved after classification")
            }
        }
    }
}

impl std::error::Error for RegionError {}
