//! The connector grid: parsing, total coordinate lookup, and rendering.

use crate::error::GridError;
use crate::start;
use pipegrid_core::{ConnectorType, Coord, Direction};
use smallvec::SmallVec;
use std::fmt;

/// One grid position together with its connector shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Where the cell sits.
    pub coord: Coord,
    /// What the cell connects to.
    pub connector: ConnectorType,
}

/// A rectangular grid of connector cells.
///
/// Lookups are total: out-of-bounds coordinates yield a virtual
/// [`ConnectorType::Ground`] cell, never an error. The grid is immutable
/// once parsed except for the single start-cell replacement performed by
/// [`Grid::resolve_start`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<ConnectorType>,
    start: Coord,
}

impl Grid {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Parse rows of connector symbols into a grid.
    ///
    /// Leading and trailing blank lines are ignored; interior rows must
    /// all have the first row's length. Exactly one cell must carry the
    /// `S` start marker.
    ///
    /// # Examples
    ///
    /// ```
    /// use pipegrid_grid::Grid;
    ///
    /// let grid = Grid::parse(".S7.\n.LJ.").unwrap();
    /// assert_eq!(grid.width(), 4);
    /// assert_eq!(grid.height(), 2);
    /// assert_eq!(grid.start(), pipegrid_core::Coord::new(1, 0));
    /// ```
    pub fn parse(text: &str) -> Result<Grid, GridError> {
        let mut lines: Vec<&str> = text.lines().collect();
        while lines.first().is_some_and(|l| l.trim().is_empty()) {
            lines.remove(0);
        }
        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }
        if lines.is_empty() || lines[0].is_empty() {
            return Err(GridError::Empty);
        }

        let expected = lines[0].chars().count();
        if expected > Self::MAX_DIM as usize {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: expected,
                max: Self::MAX_DIM,
            });
        }
        if lines.len() > Self::MAX_DIM as usize {
            return Err(GridError::DimensionTooLarge {
                name: "height",
                value: lines.len(),
                max: Self::MAX_DIM,
            });
        }

        let mut cells = Vec::with_capacity(expected * lines.len());
        let mut starts: Vec<Coord> = Vec::new();
        for (y, line) in lines.iter().enumerate() {
            let len = line.chars().count();
            if len != expected {
                return Err(GridError::MalformedGrid {
                    row: y,
                    len,
                    expected,
                });
            }
            for (x, symbol) in line.chars().enumerate() {
                let coord = Coord::new(x as i32, y as i32);
                let connector = ConnectorType::from_symbol(symbol)
                    .ok_or(GridError::UnknownSymbol { symbol, coord })?;
                if connector == ConnectorType::Start {
                    starts.push(coord);
                }
                cells.push(connector);
            }
        }

        if starts.len() != 1 {
            return Err(GridError::InvalidStartCount {
                count: starts.len(),
            });
        }

        Ok(Grid {
            width: expected as u32,
            height: lines.len() as u32,
            cells,
            start: starts[0],
        })
    }

    /// Replace the start marker with the one connector shape compatible
    /// with its neighbours.
    ///
    /// Fails with [`GridError::AmbiguousStart`] when more than one shape
    /// survives and [`GridError::NoValidStart`] when none does; the shape
    /// is never silently guessed.
    pub fn resolve_start(mut self) -> Result<Grid, GridError> {
        let resolved = start::resolve(&self)?;
        // The start coordinate is in bounds by construction.
        let idx = (self.start.y as usize) * (self.width as usize) + (self.start.x as usize);
        self.cells[idx] = resolved;
        Ok(self)
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// The start cell's coordinate.
    pub fn start(&self) -> Coord {
        self.start
    }

    /// Whether `coord` lies inside the grid rectangle.
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && coord.x < self.width as i32
            && coord.y < self.height as i32
    }

    /// The connector at `coord`; virtual `Ground` when out of bounds.
    pub fn connector(&self, coord: Coord) -> ConnectorType {
        match self.index(coord) {
            Some(idx) => self.cells[idx],
            None => ConnectorType::Ground,
        }
    }

    /// The cell at `coord` (virtual `Ground` cell when out of bounds).
    pub fn cell(&self, coord: Coord) -> Cell {
        Cell {
            coord,
            connector: self.connector(coord),
        }
    }

    /// Coordinates reachable through the openings of the cell at `coord`.
    ///
    /// The returned coordinates may be out of bounds (a pipe opening off
    /// the grid edge); callers that care check [`Grid::in_bounds`].
    pub fn connected_neighbours(&self, coord: Coord) -> SmallVec<[Coord; 4]> {
        self.connector(coord)
            .openings()
            .iter()
            .map(|dir| coord + dir.offset())
            .collect()
    }

    /// Whether the cell at `coord` opens toward `dir` and the neighbour
    /// there opens back.
    pub fn joined(&self, coord: Coord, dir: Direction) -> bool {
        self.connector(coord).opens(dir)
            && self.connector(coord + dir.offset()).opens(dir.inverse())
    }

    /// Row-major coordinate ordering: `(0,0), (1,0), ..., (w-1,h-1)`.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let width = self.width as i32;
        let height = self.height as i32;
        (0..height).flat_map(move |y| (0..width).map(move |x| Coord::new(x, y)))
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some((coord.y as usize) * (self.width as usize) + (coord.x as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Grid {
    /// Renders the grid as box-drawing glyphs, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                write!(f, "{}", self.connector(Coord::new(x, y)).glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
