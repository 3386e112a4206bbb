//! Plain-text rendering of a finished classification.
//!
//! This is a passive consumer of a [`ClassificationMap`] snapshot; the
//! pipeline never depends on it.

use pipegrid_core::Coord;
use pipegrid_grid::Grid;
use pipegrid_region::{ClassificationMap, RegionLabel};

/// Render a classification over its grid, one row per line.
///
/// Boundary cells show their connector's box-drawing glyph; other cells
/// show `I` (inside), `O` (outside), or `?` (unresolved — never present
/// in a map produced by a successful classification).
pub fn classification(grid: &Grid, map: &ClassificationMap) -> String {
    let mut out = String::with_capacity(grid.cell_count() + grid.height() as usize);
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let coord = Coord::new(x, y);
            let ch = match map.get(coord) {
                Some(RegionLabel::Boundary) => grid.connector(coord).glyph(),
                Some(RegionLabel::Inside) => 'I',
                Some(RegionLabel::Outside) => 'O',
                _ => '?',
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
