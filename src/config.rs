//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use gomoku_core::{
    DEFAULT_BOARD_SIZE, GameError, HeuristicAi, MAX_BOARD_SIZE, MIN_BOARD_SIZE, SearchWindow,
    Stone, Weights,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Largest accepted score weight.
pub const MAX_WEIGHT: usize = 10_000;

/// Who sits at the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Two humans share the console.
    Pvp,
    /// One human against the heuristic opponent.
    #[default]
    Pve,
}

/// Colour the computer plays in `pve` mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Side {
    /// Computer plays Black and moves first.
    #[serde(rename = "B", alias = "black")]
    Black,
    /// Computer plays White.
    #[default]
    #[serde(rename = "W", alias = "white")]
    White,
}

impl Side {
    /// The stone colour for this side.
    pub fn stone(self) -> Stone {
        match self {
            Side::Black => Stone::Black,
            Side::White => Stone::White,
        }
    }
}

/// Settings for a console session.
///
/// Every field is optional in the file; missing ones take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Board side length for new games.
    #[serde(default = "default_size")]
    size: usize,

    /// Player-vs-player or player-vs-computer.
    #[serde(default)]
    mode: Mode,

    /// Colour the computer plays.
    #[serde(default)]
    ai_stone: Side,

    /// Candidate window for the computer.
    #[serde(default)]
    search: SearchWindow,

    /// Score weights for the computer.
    #[serde(default)]
    weights: Weights,
}

#[instrument]
fn default_size() -> usize {
    DEFAULT_BOARD_SIZE
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            mode: Mode::default(),
            ai_stone: Side::default(),
            search: SearchWindow::default(),
            weights: Weights::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, parsed or validated.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(size = config.size, mode = ?config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if an existing file is invalid.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the board size.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Overrides the play mode.
    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] naming the first out-of-range value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.size) {
            return Err(ConfigError::new(format!(
                "size must be between {} and {} (got {})",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE, self.size
            )));
        }
        let radius = *self.search.radius();
        if !(1..=MAX_BOARD_SIZE).contains(&radius) {
            return Err(ConfigError::new(format!(
                "search.radius must be between 1 and {} (got {})",
                MAX_BOARD_SIZE, radius
            )));
        }
        if *self.search.history_window() == 0 {
            return Err(ConfigError::new(
                "search.history_window must be > 0".to_string(),
            ));
        }
        for (name, weight) in [
            ("weights.own", *self.weights.own()),
            ("weights.block", *self.weights.block()),
        ] {
            if weight > MAX_WEIGHT {
                return Err(ConfigError::new(format!(
                    "{} must be <= {} (got {})",
                    name, MAX_WEIGHT, weight
                )));
            }
        }
        Ok(())
    }

    /// Builds the computer opponent for `pve` mode, or `None` for `pvp`.
    ///
    /// # Errors
    ///
    /// Propagates [`GameError`] from opponent construction.
    #[instrument(skip(self))]
    pub fn opponent(&self) -> Result<Option<HeuristicAi>, GameError> {
        match self.mode {
            Mode::Pvp => Ok(None),
            Mode::Pve => Ok(Some(
                HeuristicAi::new(self.ai_stone.stone())?
                    .with_window(self.search)
                    .with_weights(self.weights),
            )),
        }
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
