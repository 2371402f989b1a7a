//! Strictly Minimax - console tic-tac-toe
//!
//! One round against the minimax opponent, then exit.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io;
use strictly_minimax::cli::Cli;
use strictly_minimax::console;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so the board on stdout stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let settings = cli.settings()?;
    info!(?settings, "Starting Strictly Minimax");

    let stdin = io::stdin();
    let outcome = console::play(&settings, stdin.lock(), io::stdout(), io::stdout())?;

    info!(%outcome, "Round finished");
    Ok(())
}
