//! Per-subcommand handlers.
//!
//! Each handler logs its intermediate steps through the verbose macros and
//! prints its result to stdout.

use super::error::AppError;
use super::file_handler;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use crate::expand::BracePattern;
use crate::katas::compass;
use crate::search::Grid;
use std::path::PathBuf;

/// Expands a brace pattern and prints one variant per line.
///
/// # Errors
/// Returns `AppError::Parse` if the pattern's braces are unbalanced.
pub fn run_expand(pattern: &str, quiet_mode: bool) -> Result<(), AppError> {
    verbose_println!(quiet_mode, "[STEP 1] Parsing brace pattern...");
    let parsed = match BracePattern::parse(pattern) {
        Ok(parsed) => parsed,
        Err(e) => {
            verbose_eprintln!(quiet_mode, "   [ERROR] {}", e);
            return Err(e.into());
        }
    };
    verbose_println!(
        quiet_mode,
        "   => Pattern parses to {} variant(s).",
        parsed.variant_count()
    );

    verbose_println!(quiet_mode, "[STEP 2] Expanding...");
    // Lazy iteration: variants are printed as they are produced.
    for variant in parsed.expansions() {
        println!("{}", variant);
    }
    Ok(())
}

/// Loads a puzzle grid from a file and searches it for `word`.
///
/// # Errors
/// Returns `AppError::InvalidPath`/`AppError::Io` for file problems and
/// `AppError::Shape` if the rows are not all the same length.
pub fn run_search(puzzle_file: &PathBuf, word: &str, quiet_mode: bool) -> Result<(), AppError> {
    verbose_println!(quiet_mode, "[STEP 1] Loading puzzle rows...");
    let rows = file_handler::load_puzzle_rows(puzzle_file, quiet_mode)?;
    verbose_println!(quiet_mode, "   => Loaded {} row(s).", rows.len());

    verbose_println!(quiet_mode, "[STEP 2] Building grid...");
    let grid = match Grid::from_rows(&rows) {
        Ok(grid) => grid,
        Err(e) => {
            verbose_eprintln!(quiet_mode, "   [ERROR] {}", e);
            return Err(e.into());
        }
    };
    verbose_println!(
        quiet_mode,
        "   => Grid is {} x {} ({} cells).",
        grid.rows(),
        grid.cols(),
        grid.cell_count()
    );

    verbose_println!(quiet_mode, "[STEP 3] Searching for '{}'...", word);
    if grid.find(word) {
        println!("found");
    } else {
        println!("not found");
    }
    Ok(())
}

/// Prints the 32-point compass table.
pub fn run_compass(quiet_mode: bool) -> Result<(), AppError> {
    verbose_println!(quiet_mode, "[STEP 1] Building compass table...");
    for point in compass::compass_points() {
        println!("{:<5} {:>6.2}", point.abbreviation, point.azimuth);
    }
    Ok(())
}
