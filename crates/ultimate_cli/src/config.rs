//! Session configuration loaded from TOML and command-line overrides.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};
use ultimate_tictactoe::Mark;

/// Who sits at the terminal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PlayMode {
    /// One human against the random opponent.
    #[default]
    #[display("single")]
    Single,
    /// Two humans taking turns at the same prompt.
    #[display("multi")]
    Multi,
}

/// Settings for an interactive session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Single or multi player.
    #[serde(default)]
    mode: PlayMode,

    /// Mark the human plays in single mode.
    #[serde(default = "default_human")]
    human: Mark,

    /// Pause before the computer moves, in milliseconds.
    #[serde(default = "default_ai_delay_ms")]
    ai_delay_ms: u64,

    /// Seed for the computer opponent.
    #[serde(default)]
    seed: Option<u64>,

    /// Log filter used when RUST_LOG is unset.
    #[serde(default = "default_log_level")]
    log_level: String,
}

fn default_human() -> Mark {
    Mark::X
}

fn default_ai_delay_ms() -> u64 {
    500
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: PlayMode::default(),
            human: default_human(),
            ai_delay_ms: default_ai_delay_ms(),
            seed: None,
            log_level: default_log_level(),
        }
    }
}

impl SessionConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(mode = %config.mode, human = %config.human, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Applies command-line values on top of the file values.
    pub fn with_overrides(
        mut self,
        mode: Option<PlayMode>,
        human: Option<Mark>,
        ai_delay_ms: Option<u64>,
        seed: Option<u64>,
        log_level: Option<String>,
    ) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(human) = human {
            self.human = human;
        }
        if let Some(ms) = ai_delay_ms {
            self.ai_delay_ms = ms;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(level) = log_level {
            self.log_level = level;
        }
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
