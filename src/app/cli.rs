use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Runs the algorithmic katas from the command line.", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Command,

    /// Suppress verbose logging to katas.log.
    #[clap(short, long)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Expand a brace pattern, printing one variant per line
    Expand {
        /// Pattern such as "~/{Downloads,Pictures}/*.{jpg,gif,png}"
        pattern: String,
    },

    /// Search a puzzle grid for a snaking word
    Search {
        /// Text file with one puzzle row per line
        puzzle_file: PathBuf,

        /// Word to look for
        word: String,
    },

    /// Print the 32-point compass table
    Compass,
}
