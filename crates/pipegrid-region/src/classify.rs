//! The boundary walk with perpendicular probing and flood fill.
//!
//! The side of the cycle a cell falls on is decided once globally: the
//! path's shoelace winding fixes which perpendicular of the travel
//! direction faces the interior, and every closed side of every cycle
//! cell is compared against that perpendicular for the incoming and
//! outgoing travel offsets. Straight segments agree on both; at a bend
//! only the concave side matches. Each seed then floods its whole
//! 4-connected unresolved component, so every component is labelled
//! exactly once.

use crate::error::RegionError;
use crate::map::{ClassificationMap, RegionLabel};
use pipegrid_core::{Coord, Direction};
use pipegrid_grid::Grid;
use pipegrid_trace::LoopPath;
use std::collections::VecDeque;

/// Label every grid cell relative to the traced cycle.
///
/// Pure function of its inputs: re-running on the same `(grid, path)`
/// yields an identical map.
///
/// # Errors
///
/// [`RegionError::IncompleteClassification`] if any cell is still
/// unresolved after the full walk — a pocket no boundary-adjacent seed
/// could reach, which a valid simple cycle never produces.
pub fn classify(grid: &Grid, path: &LoopPath) -> Result<ClassificationMap, RegionError> {
    let mut map = ClassificationMap::new(grid.width(), grid.height());
    for coord in path.iter() {
        map.set(coord, RegionLabel::Boundary);
    }

    let winding = path.winding();
    let n = path.len();
    for i in 0..n {
        // Indices are taken modulo n, so the lookups cannot miss.
        let (Some(prev), Some(curr), Some(next)) = (
            path.get((i + n - 1) % n),
            path.get(i),
            path.get((i + 1) % n),
        ) else {
            continue;
        };
        let interior_in = winding.interior_offset(curr - prev);
        let interior_out = winding.interior_offset(next - curr);

        for &side in grid.connector(curr).closed_sides() {
            let offset = side.offset();
            let seed = curr + offset;
            if map.get(seed) == Some(RegionLabel::Unresolved) {
                let label = if offset == interior_in || offset == interior_out {
                    RegionLabel::Inside
                } else {
                    RegionLabel::Outside
                };
                flood(&mut map, seed, label);
            }
        }
    }

    match map.first_unresolved() {
        Some(coord) => Err(RegionError::IncompleteClassification { coord }),
        None => Ok(map),
    }
}

/// Expand `label` across the 4-connected unresolved component containing
/// `seed`. Boundary cells are never crossed.
fn flood(map: &mut ClassificationMap, seed: Coord, label: RegionLabel) {
    let mut frontier = VecDeque::new();
    map.set(seed, label);
    frontier.push_back(seed);

    while let Some(coord) = frontier.pop_front() {
        for dir in Direction::ALL {
            let neighbour = coord + dir.offset();
            if map.get(neighbour) == Some(RegionLabel::Unresolved) {
                map.set(neighbour, label);
                frontier.push_back(neighbour);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipegrid_test_utils::{
        ring_inside_count, ring_path_len, ring_text, FOUR_INSIDE, MINIMAL_RING, SQUARE_RING,
    };
    use pipegrid_trace::walk;
    use proptest::prelude::*;

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    fn grid_and_path(text: &str) -> (Grid, LoopPath) {
        let grid = Grid::parse(text).unwrap().resolve_start().unwrap();
        let path = walk(&grid).unwrap();
        (grid, path)
    }

    // ── Known grids ─────────────────────────────────────────────

    #[test]
    fn square_ring_encloses_one_cell() {
        let (grid, path) = grid_and_path(SQUARE_RING);
        let map = classify(&grid, &path).unwrap();
        assert_eq!(map.get(c(2, 2)), Some(RegionLabel::Inside));
        let counts = map.counts();
        assert_eq!(counts.inside, 1);
        assert_eq!(counts.boundary, 8);
        assert_eq!(counts.outside, 16);
    }

    #[test]
    fn minimal_ring_has_no_interior() {
        let (grid, path) = grid_and_path(MINIMAL_RING);
        let map = classify(&grid, &path).unwrap();
        let counts = map.counts();
        assert_eq!(counts.inside, 0);
        assert_eq!(counts.boundary, 4);
        assert_eq!(counts.outside, 0);
    }

    #[test]
    fn doubled_back_loop_classifies_by_side_not_reachability() {
        let (grid, path) = grid_and_path(FOUR_INSIDE);
        let map = classify(&grid, &path).unwrap();
        assert_eq!(map.counts().inside, 4);
        // The two bottom pockets are enclosed.
        assert_eq!(map.get(c(2, 6)), Some(RegionLabel::Inside));
        assert_eq!(map.get(c(7, 6)), Some(RegionLabel::Inside));
        // The middle corridor sits on the exterior side of the doubled-back
        // wall even though the boundary surrounds it on the grid.
        assert_eq!(map.get(c(4, 3)), Some(RegionLabel::Outside));
        assert_eq!(map.get(c(5, 4)), Some(RegionLabel::Outside));
    }

    #[test]
    fn border_reachable_cells_are_outside() {
        let (grid, path) = grid_and_path(SQUARE_RING);
        let map = classify(&grid, &path).unwrap();
        for coord in grid.coords() {
            if coord.x == 0 || coord.y == 0 || coord.x == 4 || coord.y == 4 {
                assert_eq!(map.get(coord), Some(RegionLabel::Outside), "{coord}");
            }
        }
    }

    // ── Winding independence ────────────────────────────────────

    #[test]
    fn both_windings_classify_identically() {
        let (grid, path) = grid_and_path(SQUARE_RING);
        let mut reversed: Vec<Coord> = path.iter().collect();
        reversed.reverse();
        let reversed = LoopPath::new(reversed);
        assert_ne!(path.winding(), reversed.winding());

        let forward = classify(&grid, &path).unwrap();
        let backward = classify(&grid, &reversed).unwrap();
        assert_eq!(forward, backward);
    }

    // ── Idempotence and failure ─────────────────────────────────

    #[test]
    fn classify_is_idempotent() {
        let (grid, path) = grid_and_path(FOUR_INSIDE);
        let first = classify(&grid, &path).unwrap();
        let second = classify(&grid, &path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_path_leaves_everything_unresolved() {
        let grid = Grid::parse(SQUARE_RING).unwrap().resolve_start().unwrap();
        let err = classify(&grid, &LoopPath::new([])).unwrap_err();
        assert_eq!(
            err,
            RegionError::IncompleteClassification { coord: c(0, 0) }
        );
    }

    // ── Properties ──────────────────────────────────────────────

    proptest! {
        #[test]
        fn ring_classification_is_total(w in 2u32..16, h in 2u32..16) {
            let (grid, path) = grid_and_path(&ring_text(w, h));
            let map = classify(&grid, &path).unwrap();
            let counts = map.counts();
            prop_assert_eq!(map.len(), grid.cell_count());
            prop_assert_eq!(counts.inside, ring_inside_count(w, h));
            prop_assert_eq!(counts.boundary, ring_path_len(w, h));
            prop_assert_eq!(
                counts.boundary + counts.inside + counts.outside,
                grid.cell_count()
            );
            prop_assert_eq!(map.first_unresolved(), None);
        }

        #[test]
        fn reversing_the_ring_path_changes_nothing(w in 2u32..10, h in 2u32..10) {
            let (grid, path) = grid_and_path(&ring_text(w, h));
            let mut cells: Vec<Coord> = path.iter().collect();
            cells.reverse();
            let reversed = LoopPath::new(cells);
            prop_assert_eq!(
                classify(&grid, &path).unwrap(),
                classify(&grid, &reversed).unwrap()
            );
        }
    }
}
