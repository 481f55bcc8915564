use std::fmt;

use thiserror::Error;

use crate::GridOffset;
use crate::camera::Position;
use crate::cell::Cell;

/// Offsets of the Moore neighborhood, row-major, without the center.
const NEIGHBORHOOD: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Row {row} has {got} cells, expected {expected}")]
    Jagged {
        row: usize,
        expected: usize,
        got: usize,
    },
}

/// A fixed-size, rectangular matrix of cells with hard edges.
///
/// A `Grid` is never mutated once built: advancing the simulation produces a new one (see
/// [`crate::world::next_generation`]). The empty grid (no rows) is valid.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,

    /// Row-major cell storage, `rows * cols` long
    cells: Vec<Cell>,
}

impl Grid {
    /// The grid with no rows and no columns.
    pub const fn empty() -> Self {
        Self {
            rows: 0,
            cols: 0,
            cells: Vec::new(),
        }
    }

    /// A `rows × cols` grid of dead cells.
    pub fn dead(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Build a grid from its rows. Every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Ok(Self::empty());
        };

        let cols = first.len();
        let mut cells = Vec::with_capacity(rows.len() * cols);

        for (row, cs) in rows.iter().enumerate() {
            if cs.len() != cols {
                return Err(GridError::Jagged {
                    row,
                    expected: cols,
                    got: cs.len(),
                });
            }

            cells.extend_from_slice(cs);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Build a `rows × cols` grid by asking `f` for every cell, in row-major order.
    pub(crate) fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Cell,
    {
        let mut cells = Vec::with_capacity(rows * cols);

        for r in 0..rows {
            for c in 0..cols {
                cells.push(f(r, c));
            }
        }

        Self { rows, cols, cells }
    }

    /// Build a grid from lines of glyphs, where `X` is alive and anything else is dead.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = lines
            .into_iter()
            .map(|line| line.as_ref().chars().map(Cell::from_glyph).collect())
            .collect();

        Self::from_rows(rows)
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// True when the grid has no cells at all.
    pub const fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols).then(|| self.cells[self.index(row, col)])
    }

    /// A single row of the grid. Panics if `row` is out of range.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = self.index(row, 0);
        &self.cells[start..start + self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..self.rows).map(move |r| self.row(r))
    }

    /// Iterate over all cells with their positions, in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.rows)
            .flat_map(move |r| (0..self.cols).map(move |c| (r, c)))
            .map(move |(r, c)| (r, c, self.cells[self.index(r, c)]))
    }

    /// Count the live cells around `(row, col)`. Neighbors past the edge of the grid count as
    /// dead, there is no wraparound.
    ///
    /// `(row, col)` must lie inside the grid.
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        debug_assert!(row < self.rows, "row is out of bounds");
        debug_assert!(col < self.cols, "col is out of bounds");

        NEIGHBORHOOD
            .iter()
            .filter(|&&(dr, dc)| {
                let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
                else {
                    return false;
                };

                r < self.rows && c < self.cols && self.cells[self.index(r, c)].is_alive()
            })
            .count() as u8
    }

    /// Whether at least one cell is alive.
    pub fn has_live_cells(&self) -> bool {
        self.cells.iter().any(|c| c.is_alive())
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// The point the camera should follow: the first live cell in row-major order, or the center
    /// of the grid if everything is dead. A grid without cells focuses on `(0, 0)`.
    pub fn find_focus(&self) -> Position {
        if self.is_empty() {
            return Position::ORIGIN;
        }

        match self.cells.iter().position(|c| c.is_alive()) {
            Some(i) => Position::new((i / self.cols) as GridOffset, (i % self.cols) as GridOffset),
            None => Position::new((self.rows / 2) as GridOffset, (self.cols / 2) as GridOffset),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
