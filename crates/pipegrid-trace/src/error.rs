//! Error types for cycle tracing.

use pipegrid_core::Coord;
use std::fmt;

/// Errors arising while tracing the cycle through the start cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceError {
    /// A cell on the traversal violated a cycle invariant: wrong opening
    /// degree, a joint that does not reciprocate, or a traversal that
    /// fails to close.
    MalformedLoop {
        /// The offending cell.
        coord: Coord,
        /// What was violated.
        reason: String,
    },
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedLoop { coord, reason } => {
                write!(f, "malformed loop at {coord}: {reason}")
            }
        }
    }
}

impl std::error::Error for TraceError {}
