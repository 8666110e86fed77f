use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Upper bound on `api.batch_size`.
pub const MAX_BATCH_SIZE: usize = 100;

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
    /// Uses `~/.config/catswipe/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("catswipe").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::read_from(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses `path` without validating, so callers can layer
    /// overrides on top before calling [`Config::validate`].
    pub fn read_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `batch_size` is within `1..=MAX_BATCH_SIZE`
    /// - both API URLs are http(s) URLs
    /// - request and connect timeouts are non-zero
    /// - UI tick rate and swipe threshold are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let api = &self.api;
        if api.batch_size == 0 || api.batch_size > MAX_BATCH_SIZE {
            return Err(invalid(format!(
                "batch_size must be between 1 and {}, got {}",
                MAX_BATCH_SIZE, api.batch_size
            )));
        }

        check_http_url("base_url", &api.base_url)?;
        check_http_url("image_base_url", &api.image_base_url)?;

        if api.timeout_seconds == 0 {
            return Err(invalid("timeout_seconds must be greater than 0".to_string()));
        }
        if api.connect_timeout_seconds == 0 {
            return Err(invalid("connect_timeout_seconds must be greater than 0".to_string()));
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(invalid("tick_rate_ms must be greater than 0".to_string()));
        }
        if self.ui.swipe_threshold == 0 {
            return Err(invalid("swipe_threshold must be greater than 0".to_string()));
        }

        Ok(())
    }
}

fn check_http_url(field: &str, value: &str) -> Result<(), ConfigError> {
    let url = reqwest::Url::parse(value)
        .map_err(|e| invalid(format!("{} '{}' is not a valid URL: {}", field, value, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(invalid(format!(
            "{} '{}' must use http or https, not '{}'",
            field, value, scheme
        ))),
    }
}

fn invalid(message: String) -> ConfigError {
    ConfigError::ValidationError { message }
}
