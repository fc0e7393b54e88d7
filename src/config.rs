//! Game configuration loaded from TOML and command-line overrides.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use gridtac_core::KeyBindings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "gridtac.toml";

/// Largest board that still fits a typical terminal.
pub const MAX_DIMENSION: usize = 16;

/// Game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board side length N.
    dimension: usize,

    /// File that receives log output.
    log_file: PathBuf,

    /// Filter directive used when `RUST_LOG` is unset.
    log_filter: String,

    /// Key bindings.
    keys: KeyBindings,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dimension: 3,
            log_file: PathBuf::from("gridtac.log"),
            log_filter: "info".to_string(),
            keys: KeyBindings::default(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        let config = Self::from_toml_str(&content)?;
        info!(dimension = config.dimension, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Builds the effective configuration for a command line.
    ///
    /// An explicit `--config` must be readable. Without it,
    /// [`DEFAULT_CONFIG_FILE`] is used when present and defaults otherwise.
    /// Command-line values win over file values.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => {
                debug!("No config file, using defaults");
                Self::default()
            }
        };

        if let Some(dimension) = cli.dimension {
            config.dimension = dimension;
        }
        if let Some(log_file) = &cli.log_file {
            config.log_file = log_file.clone();
        }

        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges and binding conflicts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_DIMENSION).contains(&self.dimension) {
            return Err(ConfigError::new(format!(
                "dimension must be between 1 and {}, got {}",
                MAX_DIMENSION, self.dimension
            )));
        }
        if self.keys.is_new_game(*self.keys.quit()) {
            return Err(ConfigError::new(format!(
                "quit and new_game are both bound to '{}'",
                self.keys.quit()
            )));
        }
        for key in [*self.keys.quit(), *self.keys.new_game()] {
            if key.is_whitespace() || key.is_control() {
                return Err(ConfigError::new(format!(
                    "key binding {:?} is not a printable character",
                    key
                )));
            }
        }
        Ok(())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(*config.dimension(), 3);
        assert_eq!(*config.keys().quit(), 'c');
    }

    #[test]
    fn test_partial_keys_table() {
        let config = GameConfig::from_toml_str("dimension = 5\n[keys]\nquit = 'q'\n").unwrap();
        assert_eq!(*config.dimension(), 5);
        assert_eq!(config.keys(), &KeyBindings::new('q', 'n'));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let err = GameConfig::from_toml_str("dimension = 0").unwrap_err();
        assert!(err.message.contains("dimension"));
    }

    #[test]
    fn test_conflicting_keys_rejected() {
        let err = GameConfig::from_toml_str("[keys]\nquit = 'N'\nnew_game = 'n'\n").unwrap_err();
        assert!(err.message.contains("both bound"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = GameConfig::from_toml_str("dimension = \"three\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }
}
