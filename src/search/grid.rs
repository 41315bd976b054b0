use super::error::ShapeError;
use super::finder;

/// A rectangular grid of characters, stored row-major in a flat buffer.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<char>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Builds a grid from one string per row.
    ///
    /// All rows must have the same number of characters; an empty row set
    /// produces an empty (0 x 0) grid, which is valid.
    ///
    /// # Errors
    /// Returns `ShapeError::RaggedRow` naming the first row whose length
    /// differs from the first row's.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, ShapeError> {
        let mut cells = Vec::new();
        let mut cols = 0;
        for (row_index, row) in rows.iter().enumerate() {
            let before = cells.len();
            cells.extend(row.as_ref().chars());
            let width = cells.len() - before;
            if row_index == 0 {
                cols = width;
            } else if width != cols {
                return Err(ShapeError::RaggedRow {
                    row: row_index,
                    expected: cols,
                    found: width,
                });
            }
        }
        let rows = if cols == 0 { 0 } else { cells.len() / cols };
        Ok(Self { cells, rows, cols })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total cell count.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if `word` can be traced as a snaking path through the
    /// grid: 4-directional steps only, no cell used twice.  The empty word
    /// is trivially found.
    pub fn find(&self, word: &str) -> bool {
        finder::find(self, word)
    }

    pub(super) fn at(&self, row: usize, col: usize) -> char {
        self.cells[self.index(row, col)]
    }

    pub(super) fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Up to four in-bounds neighbors of `(row, col)`.
    pub(super) fn neighbors(&self, row: usize, col: usize) -> Vec<(usize, usize)> {
        let mut neighbors = Vec::with_capacity(4);
        if row > 0 {
            neighbors.push((row - 1, col));
        }
        if col > 0 {
            neighbors.push((row, col - 1));
        }
        if row + 1 < self.rows {
            neighbors.push((row + 1, col));
        }
        if col + 1 < self.cols {
            neighbors.push((row, col + 1));
        }
        neighbors
    }
}
