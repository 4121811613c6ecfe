//! Command-line interface for retrace.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Retrace - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "retrace")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./retrace.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Play a sequence of cells headlessly and print the result
    Replay {
        /// Cell indices (0-8, row-major) in move order
        #[arg(value_parser = clap::value_parser!(u8).range(0..9))]
        cells: Vec<u8>,

        /// Jump to this move after playing the cells
        #[arg(short, long)]
        jump: Option<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
