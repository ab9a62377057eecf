use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

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

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// `~/.config/packlist/config.toml` on Linux, the platform equivalent
    /// elsewhere via `dirs::config_dir()`, or the current directory when no
    /// config dir is known.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("packlist").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Reads, parses and validates the file at `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        tracing::info!(path = %path.display(), "Config loaded");
        Ok(config)
    }

    /// Checks:
    /// - the form offers at least one quantity
    /// - the default quantity is inside `1..=max_quantity`
    /// - the tick rate is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let max = self.form.max_quantity;
        if max == 0 {
            return Err(ConfigError::ValidationError {
                message: "form.max_quantity must be at least 1".to_string(),
            });
        }

        let quantity = self.defaults.quantity;
        if quantity == 0 || quantity > max {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "defaults.quantity {} is outside the allowed range 1..={}",
                    quantity, max
                ),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
