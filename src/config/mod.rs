use crate::constants::logging::DEFAULT_LEVEL;
use crate::error::AppError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub mod paths;
pub mod validation;

use paths::get_config_path;
use validation::validate_config;

/// Configuration structure for the application.
///
/// Only ambient settings live here; the permutation rules are fixed.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Path to a log file. If not specified, logs only go to stderr.
    #[serde(default)]
    pub log_file_path: Option<String>,
    /// Log level for this crate's events. Defaults to `warn`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    DEFAULT_LEVEL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_file_path: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    ///
    /// # Returns
    /// * `Ok(Config)` - Loaded configuration, or defaults when no file exists
    /// * `Err(AppError)` - The file exists but could not be read, parsed or validated
    ///
    /// # Notes
    /// - Config file is stored in platform-specific config directory
    /// - The file is never created or written by the program
    pub fn load() -> Result<Self, AppError> {
        Self::load_from_path(&get_config_path())
    }

    /// Loads configuration like [`Config::load`], but never fails.
    ///
    /// A config file that cannot be read, parsed or validated is replaced by
    /// the defaults; the error is handed back so it can be logged once
    /// logging is up.
    pub fn load_or_default() -> (Self, Option<AppError>) {
        Self::load_from_path_or_default(&get_config_path())
    }

    /// Path-specific variant of [`Config::load_or_default`].
    pub fn load_from_path_or_default(config_path: &Path) -> (Self, Option<AppError>) {
        match Self::load_from_path(config_path) {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        }
    }

    /// Loads configuration from a specific path, falling back to defaults
    /// when the file does not exist.
    pub fn load_from_path(config_path: &Path) -> Result<Self, AppError> {
        let config = if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            toml::from_str(&content)?
        } else {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            Config::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> PathBuf {
        paths::get_config_path()
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(&self.log_level, &self.log_file_path)
    }
}
