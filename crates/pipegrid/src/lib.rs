//! Pipegrid: loop extraction and interior/exterior classification for
//! pipe-connector grids.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the pipegrid sub-crates and wires the three pipeline stages together.
//! For most users, adding `pipegrid` as a single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use pipegrid::prelude::*;
//!
//! let maze = "\
//! .....
//! .S-7.
//! .|.|.
//! .L-J.
//! .....";
//!
//! let analysis = analyze(maze).unwrap();
//! assert_eq!(analysis.furthest_distance(), 4);
//! assert_eq!(analysis.counts().inside, 1);
//! assert_eq!(analysis.counts().outside, 16);
//! ```
//!
//! # Stages
//!
//! Each stage consumes only the previous stage's output and can be run
//! on its own:
//!
//! | Stage | Sub-crate | Entry point |
//! |-------|-----------|-------------|
//! | Grid parsing + start resolution | `pipegrid-grid` | [`Grid::parse`], [`Grid::resolve_start`] |
//! | Cycle tracing | `pipegrid-trace` | [`walk`] |
//! | Region classification | `pipegrid-region` | [`classify`] |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod pipeline;
pub mod render;

pub use pipegrid_core::{ConnectorType, Coord, Direction};
pub use pipegrid_grid::{Cell, Grid, GridError};
pub use pipegrid_region::{classify, ClassificationMap, RegionCounts, RegionError, RegionLabel};
pub use pipegrid_trace::{walk, LoopPath, TraceError, Winding};

pub use pipeline::{analyze, Analysis, PipelineError};

/// Commonly used items, re-exported for glob import.
pub mod prelude {
    pub use crate::pipeline::{analyze, Analysis, PipelineError};
    pub use pipegrid_core::{ConnectorType, Coord, Direction};
    pub use pipegrid_grid::Grid;
    pub use pipegrid_region::{classify, ClassificationMap, RegionCounts, RegionLabel};
    pub use pipegrid_trace::{walk, LoopPath};
}
