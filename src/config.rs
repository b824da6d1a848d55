//! Configuration management for the contact assistant.
//!
//! This module handles loading and validating configuration from environment
//! variables. A `.env` file in the working directory is loaded first if one
//! exists.

use crate::assistant::Locale;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the contact assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Language of every reply (default: English)
    pub locale: Locale,

    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ASSISTANT_LOCALE`: `en` or `uk` (default: `en`)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();
        Self::from_current_env()
    }

    /// Read configuration from the process environment without loading `.env`.
    fn from_current_env() -> ConfigResult<Self> {
        let locale = match env::var("ASSISTANT_LOCALE") {
            Ok(val) => val.parse::<Locale>().map_err(|_| ConfigError::InvalidValue {
                var: "ASSISTANT_LOCALE".to_string(),
                reason: format!("Must be one of: en, uk, got: {}", val),
            })?,
            Err(_) => Locale::default(),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config { locale, log_level })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            locale: Locale::default(),
            log_level: "error".to_string(),
        }
    }
}
