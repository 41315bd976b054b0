//! File system helpers for the CLI: puzzle-file validation and row loading.
//!
//! Uses macros from the parent `app` module for verbose logging.

use std::fs;
use std::path::PathBuf;

// Use super:: for macros defined in app/mod.rs
use super::error::AppError;
use super::verbose_eprintln;

/// Validates the given puzzle file path and loads its rows.
///
/// Checks that the path exists and points to a file, then reads it and
/// splits it into lines. Blank trailing lines are dropped; interior rows are
/// returned verbatim so ragged input is still caught by grid construction.
///
/// # Errors
/// Returns `AppError::InvalidPath` if the path is missing or not a file,
/// `AppError::Io` if reading fails.
pub fn load_puzzle_rows(puzzle_file: &PathBuf, quiet_mode: bool) -> Result<Vec<String>, AppError> {
    if !puzzle_file.exists() {
        let error_msg = format!("File not found: {}", puzzle_file.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }
    if !puzzle_file.is_file() {
        let error_msg = format!("Path is not a file: {}", puzzle_file.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }

    let content = fs::read_to_string(puzzle_file)?;
    let mut rows: Vec<String> = content.lines().map(str::to_string).collect();
    while rows.last().is_some_and(|line| line.is_empty()) {
        rows.pop();
    }
    Ok(rows)
}
