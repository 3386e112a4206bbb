//! Core types for the pipegrid workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental value types shared by every later pipeline stage:
//! grid coordinates, cardinal directions, and the closed set of
//! connector (pipe tile) variants with their per-direction openings.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod connector;
pub mod coord;
pub mod direction;

pub use connector::ConnectorType;
pub use coord::Coord;
pub use direction::Direction;
