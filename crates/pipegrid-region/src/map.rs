//! Per-cell region labels and the classification map.

use pipegrid_core::Coord;
use std::fmt;

/// Where a cell sits relative to the traced cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegionLabel {
    /// Not yet determined. None survive a successful classification.
    Unresolved,
    /// On the cycle itself.
    Boundary,
    /// Topologically enclosed by the cycle.
    Inside,
    /// Reachable from outside the cycle.
    Outside,
}

/// Aggregate label counts over a finished map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegionCounts {
    /// Cells on the cycle.
    pub boundary: usize,
    /// Cells enclosed by the cycle.
    pub inside: usize,
    /// Cells outside the cycle.
    pub outside: usize,
}

/// A total mapping from grid coordinates to [`RegionLabel`]s.
///
/// Covers every grid cell exactly once; produced by
/// [`classify`](crate::classify()) and not mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationMap {
    width: u32,
    height: u32,
    labels: Vec<RegionLabel>,
}

impl ClassificationMap {
    /// An all-`Unresolved` map covering a `width × height` grid.
    pub fn new(width: u32, height: u32) -> ClassificationMap {
        ClassificationMap {
            width,
            height,
            labels: vec![RegionLabel::Unresolved; (width as usize) * (height as usize)],
        }
    }

    /// Map width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Map height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells covered (always `width × height`).
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the map covers no cells.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The label at `coord`, or `None` out of bounds.
    pub fn get(&self, coord: Coord) -> Option<RegionLabel> {
        self.index(coord).map(|idx| self.labels[idx])
    }

    /// Assign a label. Out-of-bounds coordinates are ignored.
    pub(crate) fn set(&mut self, coord: Coord, label: RegionLabel) {
        if let Some(idx) = self.index(coord) {
            self.labels[idx] = label;
        }
    }

    /// Iterate `(coordinate, label)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, RegionLabel)> + '_ {
        let width = self.width as usize;
        self.labels.iter().enumerate().map(move |(idx, &label)| {
            let coord = Coord::new((idx % width) as i32, (idx / width) as i32);
            (coord, label)
        })
    }

    /// The first unresolved cell in row-major order, if any.
    pub fn first_unresolved(&self) -> Option<Coord> {
        self.iter()
            .find(|&(_, label)| label == RegionLabel::Unresolved)
            .map(|(coord, _)| coord)
    }

    /// Count cells per label.
    pub fn counts(&self) -> RegionCounts {
        let mut counts = RegionCounts::default();
        for &label in &self.labels {
            match label {
                RegionLabel::Boundary => counts.boundary += 1,
                RegionLabel::Inside => counts.inside += 1,
                RegionLabel::Outside => counts.outside += 1,
                RegionLabel::Unresolved => {}
            }
        }
        counts
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        if coord.x >= 0
            && coord.y >= 0
            && coord.x < self.width as i32
            && coord.y < self.height as i32
        {
            Some((coord.y as usize) * (self.width as usize) + (coord.x as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for ClassificationMap {
    /// One character per cell: `#` boundary, `I` inside, `O` outside,
    /// `?` unresolved.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let ch = match self.get(Coord::new(x, y)) {
                    Some(RegionLabel::Boundary) => '#',
                    Some(RegionLabel::Inside) => 'I',
                    Some(RegionLabel::Outside) => 'O',
                    _ => '?',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
