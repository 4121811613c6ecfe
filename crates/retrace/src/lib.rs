//! Retrace - tic-tac-toe with move history and time travel.
//!
//! # Architecture
//!
//! - **Engine**: [`retrace_tictactoe`] owns snapshots and rules
//! - **Controller**: applies intents to the engine, ignoring rejected ones
//! - **TUI**: ratatui renderer with keyboard and mouse input
//! - **Transcript**: headless rendering for the `replay` command

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod controller;
mod transcript;
pub mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH, Palette, ThemeConfig};

// Crate-level exports - Controller
pub use controller::{BoardView, Controller, Intent};

// Crate-level exports - Transcript
pub use transcript::Transcript;

// Crate-level exports - Game types
pub use retrace_tictactoe::{
    Board, GameState, GameStatus, MoveEntry, Player, Ply, Position, Rejected, Square,
};
