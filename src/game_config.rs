//! Game configuration loaded from TOML.

use crate::games::tictactoe::Side;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// File read when no `--config` is given. A missing file means defaults.
pub const DEFAULT_CONFIG_PATH: &str = "noughts.toml";

/// Which side, if any, the human plays.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Seat {
    /// Human plays crosses and moves first.
    X,
    /// Human plays noughts; the computer opens.
    #[default]
    O,
    /// Computer plays both sides.
    None,
}

impl Seat {
    /// Side taken by the human, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Seat::X => Some(Side::Cross),
            Seat::O => Some(Side::Nought),
            Seat::None => None,
        }
    }
}

/// Settings for one session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Seat taken by the human.
    #[serde(default)]
    human: Seat,

    /// Print the computer's chosen `row col` after its turn prompt.
    #[serde(default = "default_echo_ai_moves")]
    echo_ai_moves: bool,
}

#[instrument]
fn default_echo_ai_moves() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human: Seat::default(),
            echo_ai_moves: default_echo_ai_moves(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(human = %config.human, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the human seat.
    pub fn with_human(mut self, human: Seat) -> Self {
        self.human = human;
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
