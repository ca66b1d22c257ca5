//! Game configuration loaded from TOML.

use crate::games::grid::{GameError, MIN_BOARD_SIZE, validate_board_size};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings consumed by the rules engine when a board is created.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rows and columns of the board.
    #[serde(default = "default_board_size")]
    board_size: usize,
}

#[instrument]
fn default_board_size() -> usize {
    MIN_BOARD_SIZE
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
        }
    }
}

impl GameConfig {
    /// Creates a configuration for a `board_size` board.
    #[instrument]
    pub fn new(board_size: usize) -> Self {
        Self { board_size }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config: Self = load_toml(path)?;
        info!(board_size = config.board_size, "Game config loaded");
        Ok(config)
    }

    /// Checks the board size.
    pub fn validate(&self) -> Result<(), GameError> {
        validate_board_size(self.board_size)
    }
}

/// Reads and parses a TOML file into `T`.
pub(crate) fn load_toml<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    debug!(path = %path.as_ref().display(), "Loading config from file");
    let content = std::fs::read_to_string(path.as_ref())
        .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

    toml::from_str(&content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
}

/// Configuration file error.
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
