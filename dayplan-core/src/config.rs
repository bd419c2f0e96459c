//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/dayplan/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/dayplan/` (~/.config/dayplan/)
//! - Data: `$XDG_DATA_HOME/dayplan/` (~/.local/share/dayplan/)
//! - State/Logs: `$XDG_STATE_HOME/dayplan/` (~/.local/state/dayplan/)

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_DATA_HOME or ~/.local/share
fn xdg_data_home() -> PathBuf {
    std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/share"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize)]
pub struct Config {
    /// User whose plans are read when none is given on the command line
    #[serde(default = "default_user")]
    pub default_user: String,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Database location
    #[serde(default)]
    pub database: DatabaseConfig,

    /// How "today" is resolved
    #[serde(default)]
    pub clock: ClockConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_user: default_user(),
            logging: LoggingConfig::default(),
            database: DatabaseConfig::default(),
            clock: ClockConfig::default(),
        }
    }
}

fn default_user() -> String {
    "default".to_string()
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Maximum number of log files to keep
    #[serde(default = "default_max_log_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            max_files: default_max_log_files(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_log_files() -> usize {
    5
}

/// Database configuration
#[derive(Debug, Deserialize, Default)]
pub struct DatabaseConfig {
    /// Override path for the plans database
    pub path: Option<PathBuf>,
}

/// Clock configuration
#[derive(Debug, Deserialize, Default, Clone, Copy)]
pub struct ClockConfig {
    /// Fixed offset from UTC in minutes; local time when unset
    pub utc_offset_minutes: Option<i32>,
}

impl ClockConfig {
    /// Validate configuration, returning error message if invalid
    pub fn validate(&self) -> Result<()> {
        match self.utc_offset_minutes {
            Some(minutes) if !(-1439..=1439).contains(&minutes) => Err(Error::Config(
                "clock.utc_offset_minutes must be between -1439 and 1439".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate all sections
    pub fn validate(&self) -> Result<()> {
        if self.default_user.trim().is_empty() {
            return Err(Error::Config("default_user must not be empty".to_string()));
        }
        self.clock.validate()
    }

    /// Database file to use, honoring `[database].path`
    pub fn database_path(&self) -> PathBuf {
        self.database
            .path
            .clone()
            .unwrap_or_else(Self::default_database_path)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/dayplan/config.toml` (~/.config/dayplan/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("dayplan").join("config.toml")
    }

    /// Returns the data directory path (for SQLite database)
    ///
    /// `$XDG_DATA_HOME/dayplan/` (~/.local/share/dayplan/)
    pub fn data_dir() -> PathBuf {
        xdg_data_home().join("dayplan")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/dayplan/` (~/.local/state/dayplan/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("dayplan")
    }

    /// Returns the default database file path
    ///
    /// `$XDG_DATA_HOME/dayplan/plans.db` (~/.local/share/dayplan/plans.db)
    pub fn default_database_path() -> PathBuf {
        Self::data_dir().join("plans.db")
    }

    /// Returns the log file written on `date` (UTC)
    ///
    /// Logs rotate daily: `$XDG_STATE_HOME/dayplan/dayplan.YYYY-MM-DD.log`
    pub fn log_path(date: NaiveDate) -> PathBuf {
        Self::state_dir().join(format!("dayplan.{}.log", date.format("%Y-%m-%d")))
    }
}
