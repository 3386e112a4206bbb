//! Shared test fixtures for pipegrid development.
//!
//! Canonical mazes with known answers, plus a rectangular-ring generator
//! for property tests that need arbitrarily sized valid loops.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The smallest possible loop: four bends, no interior.
///
/// Path length 4, furthest distance 2, zero inside cells.
pub const MINIMAL_RING: &str = "\
S7
LJ";

/// A 3×3 ring with one enclosed cell, padded by ground.
///
/// Path length 8, furthest distance 4, one inside cell at (2, 2).
pub const SQUARE_RING: &str = "\
.....
.S-7.
.|.|.
.L-J.
.....";

/// A winding loop whose farthest cell is 8 steps from the start.
///
/// Path length 16.
pub const COMPLEX_LOOP: &str = "\
..F7.
.FJ|.
SJ.L7
|F--J
LJ...";

/// A loop enclosing four cells, with a pinch that keeps the two
/// bottom pockets outside despite being surrounded on three sides.
pub const FOUR_INSIDE: &str = "\
..........
.S------7.
.|F----7|.
.||....||.
.||....||.
.|L-7F-J|.
.|..||..|.
.L--JL--J.
..........";

/// A larger loop with eight enclosed cells and outside pockets that
/// squeeze between loop walls.
pub const EIGHT_INSIDE: &str = "\
.F----7F7F7F7F-7....
.|F--7||||||||FJ....
.||.FJ||||||||L7....
FJL7L7LJLJ||LJ.L-7..
L--J.L7...LJS7F-7L7.
....F-J..F7FJ|L7L7L7
....L7.F7||L7|.L7L7|
.....|FJLJ|FJ|F7|.LJ
....FJL-7.||.||||...
....L---J.LJ.LJLJ...";

/// A loop threaded through junk pipe that is not part of the cycle;
/// ten cells are enclosed.
pub const TEN_INSIDE: &str = "\
FF7FSF7F7F7F7F7F---7
L|LJ||||||||||||F--J
FL-7LJLJ||||||LJL-77
F--JF--7||LJLJ7F7FJ-
L---JF-JLJ.||-FJLJJ7
|F|F-JF---7F7-L7L|7|
|FFJF7L7F-JF7|JL---7
7-L-JL7||F7|L7F-7F7|
L.L7LFJ|||||FJL7||LJ
L7JLJL-JLJLJL--JLJ.L";

/// Render a `w × h` rectangular ring (outer dimensions, both at least 2)
/// with a one-cell ground margin on every side. The start marker replaces
/// the top-left bend, so resolution must recover a south-east bend.
pub fn ring_text(w: u32, h: u32) -> String {
    assert!(w >= 2 && h >= 2, "ring needs at least 2x2 cells");
    let total_w = (w + 2) as usize;
    let mut rows: Vec<String> = Vec::with_capacity((h + 2) as usize);
    rows.push(".".repeat(total_w));
    let mut top = String::from(".S");
    top.push_str(&"-".repeat((w - 2) as usize));
    top.push_str("7.");
    rows.push(top);
    for _ in 0..h - 2 {
        let mut row = String::from(".|");
        row.push_str(&".".repeat((w - 2) as usize));
        row.push_str("|.");
        rows.push(row);
    }
    let mut bottom = String::from(".L");
    bottom.push_str(&"-".repeat((w - 2) as usize));
    bottom.push_str("J.");
    rows.push(bottom);
    rows.push(".".repeat(total_w));
    rows.join("\n")
}

/// Cycle length of the ring produced by [`ring_text`].
pub fn ring_path_len(w: u32, h: u32) -> usize {
    (2 * (w - 1) + 2 * (h - 1)) as usize
}

/// Number of cells enclosed by the ring produced by [`ring_text`].
pub fn ring_inside_count(w: u32, h: u32) -> usize {
    ((w - 2) as usize) * ((h - 2) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_text_matches_square_ring() {
        assert_eq!(ring_text(3, 3), SQUARE_RING);
    }

    #[test]
    fn ring_text_minimal() {
        assert_eq!(ring_text(2, 2), "....\n.S7.\n.LJ.\n....");
    }

    #[test]
    fn ring_counts() {
        assert_eq!(ring_path_len(3, 3), 8);
        assert_eq!(ring_inside_count(3, 3), 1);
        assert_eq!(ring_path_len(2, 2), 4);
        assert_eq!(ring_inside_count(2, 2), 0);
    }
}
