//! core::config
//!
//! Configuration schema and loading.
//!
//! # Locations
//!
//! Searched in order; the first file that exists wins:
//!
//! 1. `$CIRCULATE_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/circulate/config.toml`
//! 3. `~/.circulate/config.toml`
//!
//! Missing files are not an error; defaults apply. A file that exists but
//! fails to parse or validate is an error.
//!
//! # Example
//!
//! ```no_run
//! use circulate::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("loan period: {} days", config.loan_period_days());
//! println!("regular limit: {}", config.regular_limit());
//! ```

pub mod schema;

pub use schema::{GlobalConfig, LimitsConfig};

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use schema::{DEFAULT_LOAN_PERIOD_DAYS, DEFAULT_PREMIUM_LIMIT, DEFAULT_REGULAR_LIMIT};

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Loaded configuration with defaults applied through accessors.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// The raw parsed configuration.
    pub global: GlobalConfig,
    /// Path the configuration was loaded from, if any file was found.
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed,
    /// or validated. A missing file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = std::env::var("CIRCULATE_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("circulate/config.toml");
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        if let Some(home) = dirs::home_dir() {
            let path = home.join(".circulate/config.toml");
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let global: GlobalConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        global.validate()?;

        Ok(Self {
            global,
            path: Some(path.to_path_buf()),
        })
    }

    /// Loan duration in days. Defaults to 14.
    pub fn loan_period_days(&self) -> u32 {
        self.global
            .loan_period_days
            .unwrap_or(DEFAULT_LOAN_PERIOD_DAYS)
    }

    /// Default borrow limit for regular members. Defaults to 3.
    pub fn regular_limit(&self) -> u32 {
        self.global
            .limits
            .as_ref()
            .and_then(|l| l.regular)
            .unwrap_or(DEFAULT_REGULAR_LIMIT)
    }

    /// Default borrow limit for premium members. Defaults to 5.
    pub fn premium_limit(&self) -> u32 {
        self.global
            .limits
            .as_ref()
            .and_then(|l| l.premium)
            .unwrap_or(DEFAULT_PREMIUM_LIMIT)
    }

    /// Path of the loaded config file, if one was found.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
