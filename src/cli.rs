//! Command-line interface for strictly_minimax.

use crate::config::{ConfigError, Settings};
use clap::Parser;
use std::path::PathBuf;

/// Strictly Minimax - tic-tac-toe against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Play tic-tac-toe against an exhaustive minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Skip the numbered reference board
    #[arg(long)]
    pub no_guide: bool,
}

impl Cli {
    /// Resolves settings: file (if given), then flag overrides.
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        let mut settings = match &self.config {
            Some(path) => Settings::from_file(path)?,
            None => Settings::default(),
        };
        if self.no_color {
            settings = settings.without_color();
        }
        if self.no_guide {
            settings = settings.without_guide();
        }
        Ok(settings)
    }
}
