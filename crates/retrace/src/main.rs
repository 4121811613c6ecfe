//! Retrace - unified CLI
//!
//! Terminal tic-tac-toe with move history and time travel.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use retrace::{AppConfig, Cli, Command, Controller, Transcript};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;
    let command = cli.command.unwrap_or(Command::Play);

    init_tracing(&config, &command)?;
    info!(?command, "Starting retrace");

    match command {
        Command::Play => retrace::tui::run(&config),
        Command::Replay { cells, jump, json } => run_replay(&cells, jump, json),
    }
}

/// Install the global subscriber for `command`.
///
/// The terminal UI logs to a file so output stays off the screen; `replay`
/// logs to stderr so stdout carries only the transcript.
fn init_tracing(config: &AppConfig, command: &Command) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    match command {
        Command::Play => {
            let log_file = std::fs::File::create(config.log_file()).with_context(|| {
                format!("Failed to create log file {}", config.log_file().display())
            })?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false)
                .try_init(); // Don't panic if already initialized
        }
        Command::Replay { .. } => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
    Ok(())
}

/// Play `cells` headlessly and print the transcript.
#[instrument]
fn run_replay(cells: &[u8], jump: Option<usize>, json: bool) -> Result<()> {
    let cells: Vec<usize> = cells.iter().map(|&cell| cell as usize).collect();
    let controller = Controller::scripted(&cells, jump);

    let game = controller.state();
    let output = if json {
        Transcript::render_json(game)?
    } else {
        Transcript::render_text(game)
    };
    print!("{}", output);
    if json {
        println!();
    }
    Ok(())
}
