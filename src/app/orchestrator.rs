//! Main application orchestrator.
//!
//! Coordinates a CLI run:
//! 1. Initializes logging (unless `--quiet`).
//! 2. Dispatches the subcommand to its handler in `processing`.
//! 3. Flushes the log before returning.
//!
//! The handlers print their results to stdout; the verbose log (`katas.log`)
//! records the intermediate steps.

use super::cli::{Cli, Command};
use super::error::AppError;
use super::logger;
use super::processing;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.

/// Runs the main application logic based on parsed command-line arguments.
///
/// # Errors
/// Returns `AppError` if the subcommand fails: unreadable puzzle file,
/// malformed brace pattern, ragged grid.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    // Initialize global logger if not in quiet mode. This setup is done once.
    if !quiet_mode {
        if let Err(e) = logger::init_global_logger("katas.log") {
            // If logger init fails, print to stderr directly. The application
            // continues, but verbose file logging will be unavailable.
            eprintln!(
                "Warning: Failed to initialize verbose logger (katas.log): {}. Verbose file logging will be unavailable.",
                e
            );
        } else {
            verbose_println!(quiet_mode, "Verbose logging initialized to katas.log");
        }
    }

    let result = match cli.command {
        Command::Expand { ref pattern } => processing::run_expand(pattern, quiet_mode),
        Command::Search {
            ref puzzle_file,
            ref word,
        } => processing::run_search(puzzle_file, word, quiet_mode),
        Command::Compass => processing::run_compass(quiet_mode),
    };

    if let Err(ref e) = result {
        verbose_eprintln!(quiet_mode, "Command failed: {}", e);
    }

    // Final flush of katas.log before exiting.
    if !quiet_mode {
        if let Err(e) = logger::flush_global_logger() {
            eprintln!("[WARNING] Failed to perform final flush of katas.log: {}", e);
        }
    }

    result
}
