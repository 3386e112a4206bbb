//! Interior/exterior region classification.
//!
//! [`classify()`] labels every cell of a grid relative to a traced cycle:
//! cycle cells become `Boundary`, and every remaining cell is flood-filled
//! `Inside` or `Outside` from seeds probed perpendicular to the cycle's
//! direction of travel, oriented once globally by the path's winding.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod classify;
pub mod error;
pub mod map;

pub use classify::classify;
pub use error::RegionError;
pub use map::{ClassificationMap, RegionCounts, RegionLabel};
