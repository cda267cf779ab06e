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

    #[error("API key missing: set {env_var} or api.api_key in the config file")]
    MissingApiKey { env_var: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/marquee/config.toml` on Unix,
    /// or the equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("marquee").join("config.toml")
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

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Both base URLs use http or https
    /// - Timeouts and the tick rate are non-zero
    /// - `max_attempts` is between 1 and 5
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, url) in [
            ("api.base_url", &self.api.base_url),
            ("api.image_base_url", &self.api.image_base_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::ValidationError {
                    message: format!("{name} must be an http(s) URL, got '{url}'"),
                });
            }
        }

        if self.api.timeout_seconds == 0 || self.api.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "Timeouts must be greater than zero".to_string(),
            });
        }

        if !(1..=5).contains(&self.api.max_attempts) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "api.max_attempts must be between 1 and 5, got {}",
                    self.api.max_attempts
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

    /// Resolves the API key.
    ///
    /// Order: explicit override, then the variable named by `api.api_key_env`,
    /// then `api.api_key`. Blank values are skipped.
    pub fn resolve_api_key(&self, explicit: Option<&str>) -> Result<String, ConfigError> {
        let from_env = std::env::var(&self.api.api_key_env).ok();
        let key = [explicit, from_env.as_deref(), self.api.api_key.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|key| !key.is_empty())
            .map(str::to_string)
            .ok_or_else(|| ConfigError::MissingApiKey {
                env_var: self.api.api_key_env.clone(),
            });
        key
    }
}
