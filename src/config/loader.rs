use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::date_string::{parse_date_string, YEAR_RANGE};

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
    /// Uses `~/.config/datepick/config.toml` on Unix/macOS, or equivalent
    /// on other platforms via `dirs::config_dir()`. Falls back to the
    /// current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("datepick").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file is not an error; it means `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads and validates a specific config file.
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
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The year span stays within the four-digit domain
    /// - The span is ascending
    /// - A configured start value names a real date
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !YEAR_RANGE.contains(&self.min_year) || !YEAR_RANGE.contains(&self.max_year) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Year span {}..{} leaves the supported domain {}..{}",
                    self.min_year,
                    self.max_year,
                    YEAR_RANGE.start(),
                    YEAR_RANGE.end()
                ),
            });
        }

        if self.min_year > self.max_year {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "min_year {} is above max_year {}",
                    self.min_year, self.max_year
                ),
            });
        }

        if let Some(value) = self.value.as_deref() {
            if !value.is_empty() && !parse_date_string(value).is_complete() {
                return Err(ConfigError::ValidationError {
                    message: format!("Start value '{}' is not a YYYY-MM-DD date", value),
                });
            }
        }

        Ok(())
    }
}
