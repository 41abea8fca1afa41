//! Configuration loaded from `caro.toml`.

use crate::sound::{CommandPlayer, Silent, SoundPlayer, TerminalBell};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Top-level configuration. Every field has a default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct CaroConfig {
    /// Game pacing.
    game: GameSettings,
    /// Sound cues.
    sound: SoundSettings,
}

/// Game pacing settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Pause before the computer answers a human move, in milliseconds.
    computer_delay_ms: u64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            computer_delay_ms: 500,
        }
    }
}

impl GameSettings {
    /// The computer's pause as a duration.
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }
}

/// Sound cue settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundSettings {
    /// Master switch.
    enabled: bool,
    /// Player command; the cue's file is appended. Empty rings the terminal bell.
    command: Vec<String>,
    /// File played on every accepted move.
    move_file: Option<PathBuf>,
    /// File played on a win.
    win_file: Option<PathBuf>,
    /// File played on a tie.
    tie_file: Option<PathBuf>,
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            command: Vec::new(),
            move_file: None,
            win_file: None,
            tie_file: None,
        }
    }
}

impl SoundSettings {
    /// Builds the sound player these settings describe.
    #[instrument(skip(self))]
    pub fn player(&self) -> Box<dyn SoundPlayer> {
        if !self.enabled {
            debug!("Sound disabled");
            Box::new(Silent)
        } else if self.command.is_empty() {
            debug!("Using terminal bell");
            Box::new(TerminalBell::default())
        } else {
            debug!(command = ?self.command, "Using external sound command");
            Box::new(CommandPlayer::new(
                self.command.clone(),
                self.move_file.clone(),
                self.win_file.clone(),
                self.tie_file.clone(),
            ))
        }
    }
}

impl CaroConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CaroConfig::default();
        assert_eq!(*config.game().computer_delay_ms(), 500);
        assert!(*config.sound().enabled());
        assert!(config.sound().command().is_empty());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = CaroConfig::from_toml("[game]\ncomputer_delay_ms = 0\n").unwrap();
        assert_eq!(config.game().computer_delay(), Duration::ZERO);
        assert!(*config.sound().enabled());
    }

    #[test]
    fn test_sound_section() {
        let config = CaroConfig::from_toml(
            r#"
            [sound]
            command = ["paplay", "--volume", "30000"]
            move_file = "click.wav"
            win_file = "win.wav"
            "#,
        )
        .unwrap();
        assert_eq!(config.sound().command().len(), 3);
        assert_eq!(config.sound().move_file(), &Some(PathBuf::from("click.wav")));
        assert_eq!(config.sound().tie_file(), &None);
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        let err = CaroConfig::from_toml("[game]\ncomputer_delay_ms = \"soon\"\n").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }
}
