//! Simple-cycle tracing over connector grids.
//!
//! [`walk`] follows the unique closed cycle through a grid's start cell
//! and returns it as a [`LoopPath`]: an ordered, duplicate-free coordinate
//! sequence with O(1) membership, shoelace winding orientation, and
//! arc-distance queries.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod path;
pub mod walker;

pub use error::TraceError;
pub use path::{LoopPath, Winding};
pub use walker::walk;
