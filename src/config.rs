//! Player-facing settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for a play session.
///
/// Every field has a default, so an empty or partial file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Delay before a finished round clears itself, in milliseconds.
    #[serde(default = "default_auto_reset_ms")]
    auto_reset_ms: u64,

    /// Whether move/win/draw cues are played.
    #[serde(default = "default_enabled")]
    sound_enabled: bool,

    /// Whether background music is on.
    #[serde(default = "default_enabled")]
    music_enabled: bool,

    /// File the tracing subscriber writes to while the TUI owns the screen.
    #[serde(default = "default_log_file")]
    log_file: String,
}

#[instrument]
fn default_auto_reset_ms() -> u64 {
    2000
}

#[instrument]
fn default_enabled() -> bool {
    true
}

#[instrument]
fn default_log_file() -> String {
    "noughts.log".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_reset_ms: default_auto_reset_ms(),
            sound_enabled: default_enabled(),
            music_enabled: default_enabled(),
            log_file: default_log_file(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings = Self::from_toml(&content)?;
        info!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Loads settings from `path` when it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Settings file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parses settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))
    }

    /// Auto-reset delay as a [`Duration`].
    pub fn auto_reset_delay(&self) -> Duration {
        Duration::from_millis(self.auto_reset_ms)
    }

    /// Overrides the auto-reset delay.
    pub fn with_auto_reset_ms(mut self, auto_reset_ms: u64) -> Self {
        self.auto_reset_ms = auto_reset_ms;
        self
    }

    /// Overrides the sound flag.
    pub fn with_sound(mut self, enabled: bool) -> Self {
        self.sound_enabled = enabled;
        self
    }

    /// Overrides the music flag.
    pub fn with_music(mut self, enabled: bool) -> Self {
        self.music_enabled = enabled;
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
