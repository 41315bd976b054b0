//! Snaking word search.
//!
//! Determines whether a word can be traced through a rectangular character
//! grid as a "snake": a path of 4-directionally adjacent cells that never
//! revisits a cell.

mod error;
mod finder;
mod grid;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports.
//─────────────────────────────────────────────────────────────────────────────
pub use error::ShapeError;
pub use grid::Grid;

/// Builds a grid from `rows` and searches it for `word`.
///
/// Convenience wrapper around [`Grid::from_rows`] + [`Grid::find`].
///
/// # Errors
/// Returns `ShapeError` if the rows are not all the same length.
pub fn find_in_rows<S: AsRef<str>>(rows: &[S], word: &str) -> Result<bool, ShapeError> {
    let grid = Grid::from_rows(rows)?;
    Ok(grid.find(word))
}
