//! Application configuration loaded from a TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::{Difficulty, PerPlayer, Seat, SessionSettings};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Longest accepted computer think time.
const MAX_THINK_TIME_MS: u64 = 60_000;

/// Seat and difficulty for one mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MarkConfig {
    /// Player or Computer.
    seat: Seat,

    /// Computer strength when seated as Computer.
    #[serde(default)]
    difficulty: Difficulty,
}

impl MarkConfig {
    /// Creates a mark configuration.
    pub fn new(seat: Seat, difficulty: Difficulty) -> Self {
        Self { seat, difficulty }
    }
}

/// Configuration for the `noughts` binary.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Delay before a computer move lands, in milliseconds.
    #[serde(default = "default_think_time_ms")]
    think_time_ms: u64,

    /// Fixed seed for reproducible computer moves.
    #[serde(default)]
    seed: Option<u64>,

    /// Log file written by the terminal UI.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Settings for mark X.
    #[serde(default = "default_x")]
    x: MarkConfig,

    /// Settings for mark O.
    #[serde(default = "default_o")]
    o: MarkConfig,
}

fn default_think_time_ms() -> u64 {
    1000
}

fn default_log_file() -> PathBuf {
    PathBuf::from("noughts.log")
}

fn default_x() -> MarkConfig {
    MarkConfig::new(Seat::Computer, Difficulty::Easy)
}

fn default_o() -> MarkConfig {
    MarkConfig::new(Seat::Human, Difficulty::Easy)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            think_time_ms: default_think_time_ms(),
            seed: None,
            log_file: default_log_file(),
            x: default_x(),
            o: default_o(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the defaults; an unreadable or invalid one is an error.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = match std::fs::read_to_string(path.as_ref()) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("Config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ConfigError::new(format!(
                    "Failed to read config file: {}",
                    e
                )));
            }
        };
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        info!(
            think_time_ms = config.think_time_ms,
            x = %config.x.seat,
            o = %config.o.seat,
            "Config loaded successfully"
        );
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.think_time_ms > MAX_THINK_TIME_MS {
            return Err(ConfigError::new(format!(
                "think_time_ms must be at most {}, got {}",
                MAX_THINK_TIME_MS, self.think_time_ms
            )));
        }
        Ok(())
    }

    /// Replaces the think time, as the `--think-ms` flag does.
    pub fn with_think_time_ms(mut self, think_time_ms: u64) -> Self {
        self.think_time_ms = think_time_ms;
        self
    }

    /// Replaces the seed, as the `--seed` flag does.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Builds the session settings the controller starts with.
    pub fn to_session_settings(&self) -> SessionSettings {
        SessionSettings {
            seats: PerPlayer::new(self.x.seat, self.o.seat),
            difficulties: PerPlayer::new(self.x.difficulty, self.o.difficulty),
            think_time: Duration::from_millis(self.think_time_ms),
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
