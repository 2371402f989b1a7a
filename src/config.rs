//! Console settings.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Presentation settings for the console game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Colour marks and messages with ANSI styles.
    #[serde(default = "default_color")]
    #[getter(copy)]
    color: bool,

    /// Print the numbered reference board before the first move.
    #[serde(default = "default_show_guide")]
    #[getter(copy)]
    show_guide: bool,
}

fn default_color() -> bool {
    true
}

fn default_show_guide() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: default_color(),
            show_guide: default_show_guide(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(color = settings.color, show_guide = settings.show_guide, "Settings loaded");
        Ok(settings)
    }

    /// Disables colour output.
    pub fn without_color(mut self) -> Self {
        self.color = false;
        self
    }

    /// Disables the reference board.
    pub fn without_guide(mut self) -> Self {
        self.show_guide = false;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
