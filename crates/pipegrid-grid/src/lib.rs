//! Connector grid parsing and start-cell resolution.
//!
//! [`Grid::parse`] turns rows of connector symbols into an addressable,
//! immutable grid; [`Grid::resolve_start`] replaces the start marker with
//! the one connector shape compatible with its neighbours. Later pipeline
//! stages (cycle tracing, region classification) consume the grid
//! read-only.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod start;

pub use error::GridError;
pub use grid::{Cell, Grid};
