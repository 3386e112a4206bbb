//! Cycle traversal: follow openings from the start cell until the walk
//! closes.

use crate::error::TraceError;
use crate::path::LoopPath;
use indexmap::IndexSet;
use pipegrid_core::{Coord, Direction};
use pipegrid_grid::Grid;

/// Trace the unique simple cycle through the grid's start cell.
///
/// The start cell must already be resolved (see
/// [`Grid::resolve_start`]). Traversal keeps `previous`/`current`
/// cursors: every on-cycle cell must expose exactly two openings, one of
/// which leads back to `previous`; the walk moves through the other.
/// Which of the start's two openings is taken first fixes the traversal's
/// handedness but not its correctness.
///
/// # Errors
///
/// [`TraceError::MalformedLoop`] when a visited cell has an opening
/// degree other than two, does not open back toward its predecessor,
/// revisits a coordinate, closes into a side the start does not open
/// toward, or fails to close within the grid's cell count.
pub fn walk(grid: &Grid) -> Result<LoopPath, TraceError> {
    let start = grid.start();
    let openings = grid.connector(start).openings();
    let [out, back] = two_openings(openings, start)?;

    let mut cells: IndexSet<Coord> = IndexSet::new();
    cells.insert(start);

    let mut previous = start;
    let mut current = start + out.offset();
    while current != start {
        if cells.len() > grid.cell_count() {
            return Err(TraceError::MalformedLoop {
                coord: current,
                reason: "traversal exceeded the cell count without closing".into(),
            });
        }
        let next = step(grid.connector(current).openings(), previous, current)?;
        if !cells.insert(current) {
            return Err(TraceError::MalformedLoop {
                coord: current,
                reason: "traversal revisited a coordinate before closing".into(),
            });
        }
        previous = current;
        current = next;
    }

    // The closing edge must enter through the start's other opening.
    if previous != start + back.offset() && previous != start + out.offset() {
        return Err(TraceError::MalformedLoop {
            coord: start,
            reason: "cycle closes into a side the start cell does not open toward".into(),
        });
    }

    Ok(LoopPath::from_set(cells))
}

/// Enforce the degree-2 invariant at the seam where openings are
/// consumed as a slice.
fn two_openings(openings: &[Direction], coord: Coord) -> Result<[Direction; 2], TraceError> {
    match openings {
        &[a, b] => Ok([a, b]),
        other => Err(TraceError::MalformedLoop {
            coord,
            reason: format!("cycle cell exposes {} openings, expected 2", other.len()),
        }),
    }
}

/// One traversal step: of the two cells reachable through `openings`,
/// move to the one that is not `previous`.
fn step(openings: &[Direction], previous: Coord, current: Coord) -> Result<Coord, TraceError> {
    let [a, b] = two_openings(openings, current)?;
    let first = current + a.offset();
    let second = current + b.offset();
    if first == previous {
        Ok(second)
    } else if second == previous {
        Ok(first)
    } else {
        Err(TraceError::MalformedLoop {
            coord: current,
            reason: "cell does not open toward its predecessor".into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipegrid_test_utils::{ring_path_len, ring_text, COMPLEX_LOOP, MINIMAL_RING, SQUARE_RING};
    use proptest::prelude::*;

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    fn traced(text: &str) -> LoopPath {
        let grid = Grid::parse(text).unwrap().resolve_start().unwrap();
        walk(&grid).unwrap()
    }

    // ── Walks ───────────────────────────────────────────────────

    #[test]
    fn minimal_ring_has_four_cells() {
        let path = traced(MINIMAL_RING);
        assert_eq!(path.len(), 4);
        assert_eq!(path.furthest_distance(), 2);
    }

    #[test]
    fn square_ring_walks_in_order() {
        let path = traced(SQUARE_RING);
        assert_eq!(path.len(), 8);
        assert_eq!(path.start(), Some(c(1, 1)));
        // Start resolves to a south-east bend; its first opening is south.
        let cells: Vec<Coord> = path.iter().collect();
        assert_eq!(
            cells,
            vec![
                c(1, 1),
                c(1, 2),
                c(1, 3),
                c(2, 3),
                c(3, 3),
                c(3, 2),
                c(3, 1),
                c(2, 1),
            ]
        );
    }

    #[test]
    fn complex_loop_furthest_distance() {
        let path = traced(COMPLEX_LOOP);
        assert_eq!(path.len(), 16);
        assert_eq!(path.furthest_distance(), 8);
    }

    #[test]
    fn path_cells_all_on_pipes() {
        let grid = Grid::parse(COMPLEX_LOOP).unwrap().resolve_start().unwrap();
        let path = walk(&grid).unwrap();
        for coord in path.iter() {
            assert!(grid.connector(coord).is_pipe(), "{coord}");
        }
    }

    // ── Failures ────────────────────────────────────────────────

    #[test]
    fn unresolved_start_is_malformed() {
        let grid = Grid::parse(SQUARE_RING).unwrap();
        let err = walk(&grid).unwrap_err();
        assert!(matches!(err, TraceError::MalformedLoop { coord, .. } if coord == c(1, 1)));
    }

    #[test]
    fn ground_on_the_cycle_is_malformed() {
        // The bottom run is broken by ground.
        let grid = Grid::parse(".....\n.S-7.\n.|.|.\n.L.J.\n.....")
            .unwrap()
            .resolve_start()
            .unwrap();
        let err = walk(&grid).unwrap_err();
        assert!(matches!(err, TraceError::MalformedLoop { .. }), "{err}");
    }

    #[test]
    fn three_openings_are_rejected() {
        let err = step(
            &[Direction::North, Direction::East, Direction::South],
            c(0, 1),
            c(0, 0),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            TraceError::MalformedLoop { coord, .. } if coord == c(0, 0)
        ));
        assert!(err.to_string().contains("3 openings"));
    }

    #[test]
    fn non_reciprocating_joint_is_rejected() {
        // Neither opening of a north/east bend leads back to a
        // predecessor to the west.
        let err = step(&[Direction::North, Direction::East], c(4, 5), c(5, 5)).unwrap_err();
        assert!(matches!(
            err,
            TraceError::MalformedLoop { coord, .. } if coord == c(5, 5)
        ));
    }

    // ── Properties ──────────────────────────────────────────────

    proptest! {
        #[test]
        fn ring_walks_close_with_known_length(w in 2u32..24, h in 2u32..24) {
            let path = traced(&ring_text(w, h));
            prop_assert_eq!(path.len(), ring_path_len(w, h));
            prop_assert_eq!(path.furthest_distance(), ring_path_len(w, h) / 2);
        }

        #[test]
        fn arc_distances_never_exceed_furthest(w in 2u32..12, h in 2u32..12) {
            let path = traced(&ring_text(w, h));
            for coord in path.iter() {
                let d = path.arc_distance(coord).unwrap();
                prop_assert!(d <= path.furthest_distance());
            }
        }

        #[test]
        fn consecutive_path_cells_are_grid_neighbours(w in 2u32..12, h in 2u32..12) {
            let path = traced(&ring_text(w, h));
            let n = path.len();
            for i in 0..n {
                let p = path.get(i).unwrap();
                let q = path.get((i + 1) % n).unwrap();
                let d = q - p;
                prop_assert_eq!(d.x.abs() + d.y.abs(), 1);
            }
        }
    }
}
