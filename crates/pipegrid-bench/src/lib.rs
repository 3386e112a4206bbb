//! Benchmark crate for the pipegrid pipeline.
//!
//! Holds no library code of its own; see `benches/` for the criterion
//! targets.
