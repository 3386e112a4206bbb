//! Start-cell resolution by neighbour compatibility.
//!
//! The start marker hides one of the six pipe shapes. A candidate shape
//! is valid only if every direction it would open has a neighbour opening
//! back toward the start; directions it would not open impose no
//! constraint. Intersecting across all four directions must leave exactly
//! one survivor.

use crate::error::GridError;
use crate::grid::Grid;
use pipegrid_core::ConnectorType;

/// Determine the start cell's true connector shape.
///
/// Out-of-bounds neighbours count as ground (they open nowhere), so a
/// start on the grid edge simply has fewer reciprocating sides.
pub(crate) fn resolve(grid: &Grid) -> Result<ConnectorType, GridError> {
    let start = grid.start();
    let candidates: Vec<ConnectorType> = ConnectorType::PIPES
        .iter()
        .copied()
        .filter(|candidate| {
            candidate.openings().iter().all(|&dir| {
                let neighbour = grid.connector(start + dir.offset());
                neighbour.opens(dir.inverse())
            })
        })
        .collect();

    match candidates.as_slice() {
        [only] => Ok(*only),
        [] => Err(GridError::NoValidStart),
        _ => Err(GridError::AmbiguousStart { candidates }),
    }
}
