use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::DialogConfig;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl DialogConfig {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/modal-dialog/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("modal-dialog").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `DialogConfig::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(DialogConfig::default());
        }

        Self::load_from(&path)
    }

    /// Reads, parses and validates the file at `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: DialogConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded dialog config");
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Both marker classes are non-empty single class tokens
    /// - The modal and hidden markers differ
    /// - The close-trigger selector is non-empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("classes.modal", &self.classes.modal),
            ("classes.hidden", &self.classes.hidden),
        ] {
            if value.is_empty() {
                return Err(ConfigError::ValidationError {
                    message: format!("'{}' must not be empty", field),
                });
            }
            if value.chars().any(char::is_whitespace) {
                return Err(ConfigError::ValidationError {
                    message: format!("'{}' must be a single class name, got '{}'", field, value),
                });
            }
        }

        if self.classes.modal == self.classes.hidden {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Modal and hidden classes must differ (both are '{}')",
                    self.classes.modal
                ),
            });
        }

        if self.close_trigger.selector.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "'close_trigger.selector' must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
