//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment
//! variables. A `.env` file is honored when present; stdout is never written
//! to, since the REPL owns it.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default number of days the upcoming-birthday window spans.
pub const DEFAULT_HORIZON_DAYS: i64 = 7;

/// Configuration for the contact book assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Inclusive day-count window for the `birthdays` command (default: 7)
    pub horizon_days: i64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BIRTHDAY_HORIZON_DAYS`: Upcoming-birthday window in days (default: 7)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let horizon_days = Self::parse_env_i64("BIRTHDAY_HORIZON_DAYS", DEFAULT_HORIZON_DAYS)?;

        // A horizon longer than a year would match every birthday twice over
        if !(0..=366).contains(&horizon_days) {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_HORIZON_DAYS".to_string(),
                reason: "Must be between 0 and 366".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            horizon_days,
            log_level,
        })
    }

    /// Parse an environment variable as i64 with a default value.
    fn parse_env_i64(var_name: &str, default: i64) -> ConfigResult<i64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS,
            log_level: "error".to_string(),
        }
    }
}
