//! The end-to-end pipeline: parse, resolve, trace, classify.

use pipegrid_grid::{Grid, GridError};
use pipegrid_region::{classify, ClassificationMap, RegionCounts, RegionError};
use pipegrid_trace::{walk, LoopPath, TraceError};
use std::error::Error;
use std::fmt;

/// A failure in one of the pipeline stages.
///
/// Every stage error is fatal and propagates here unchanged as the
/// terminal result of the pipeline; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// Parsing or start resolution failed.
    Grid(GridError),
    /// Cycle tracing failed.
    Trace(TraceError),
    /// Region classification failed.
    Region(RegionError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid stage failed: {e}"),
            Self::Trace(e) => write!(f, "trace stage failed: {e}"),
            Self::Region(e) => write!(f, "classification stage failed: {e}"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Trace(e) => Some(e),
            Self::Region(e) => Some(e),
        }
    }
}

impl From<GridError> for PipelineError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<TraceError> for PipelineError {
    fn from(e: TraceError) -> Self {
        Self::Trace(e)
    }
}

impl From<RegionError> for PipelineError {
    fn from(e: RegionError) -> Self {
        Self::Region(e)
    }
}

/// The finished products of a full pipeline run.
///
/// Owns the resolved grid, the traced cycle, and the classification map;
/// all three are immutable once produced.
#[derive(Debug, Clone)]
pub struct Analysis {
    grid: Grid,
    path: LoopPath,
    map: ClassificationMap,
}

impl Analysis {
    /// The parsed grid, with the start cell resolved.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The traced cycle through the start cell.
    pub fn path(&self) -> &LoopPath {
        &self.path
    }

    /// The per-cell classification.
    pub fn map(&self) -> &ClassificationMap {
        &self.map
    }

    /// Maximum shortest-arc distance from the start along the cycle.
    pub fn furthest_distance(&self) -> usize {
        self.path.furthest_distance()
    }

    /// Aggregate boundary/inside/outside cell counts.
    pub fn counts(&self) -> RegionCounts {
        self.map.counts()
    }
}

/// Run the full pipeline over rows of connector symbols.
///
/// Parses the grid, resolves the start cell, traces the cycle, and
/// classifies every remaining cell. Each stage consumes only the previous
/// stage's output.
///
/// # Errors
///
/// The first stage failure, wrapped in [`PipelineError`].
pub fn analyze(text: &str) -> Result<Analysis, PipelineError> {
    let grid = Grid::parse(text)?.resolve_start()?;
    let path = walk(&grid)?;
    let map = classify(&grid, &path)?;
    Ok(Analysis { grid, path, map })
}
