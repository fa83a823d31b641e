//! Configuration management for the contact manager.
//!
//! Settings come from environment variables, with a `.env` file in the
//! working directory loaded first if present. Stdout carries the command
//! feedback, so nothing here prints to it.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// What to do when the data file exists but cannot be loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OnLoadError {
    /// Start with an empty contact list
    #[default]
    Empty,

    /// Refuse to start
    Abort,
}

impl FromStr for OnLoadError {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "empty" => Ok(Self::Empty),
            "abort" => Ok(Self::Abort),
            other => Err(format!("Must be one of: empty, abort, got: {}", other)),
        }
    }
}

/// Configuration for the contact manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON file the contacts are loaded from and saved to
    pub data_file: PathBuf,

    /// Seed the sample contacts when the data file does not exist (default: true)
    pub seed_sample_data: bool,

    /// Policy for an unreadable data file (default: empty)
    pub on_load_error: OnLoadError,

    /// Log level used when `RUST_LOG` is unset (default: "warn")
    pub log_level: String,
}

pub const DEFAULT_DATA_FILE: &str = "data/contacts.json";

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTEXT_DATA_FILE`: Path of the data file (default: data/contacts.json)
    /// - `CONTEXT_SEED_SAMPLE_DATA`: Seed sample contacts for a new file (default: true)
    /// - `CONTEXT_ON_LOAD_ERROR`: `empty` or `abort` (default: empty)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let data_file = match env::var("CONTEXT_DATA_FILE") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTEXT_DATA_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(val) => PathBuf::from(val),
            Err(_) => PathBuf::from(DEFAULT_DATA_FILE),
        };

        let seed_sample_data = Self::parse_env_bool("CONTEXT_SEED_SAMPLE_DATA", true)?;
        let on_load_error = Self::parse_env("CONTEXT_ON_LOAD_ERROR", OnLoadError::Empty)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            data_file,
            seed_sample_data,
            on_load_error,
            log_level,
        })
    }

    /// Parse an environment variable as a boolean with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable with `FromStr`, falling back to a default.
    fn parse_env<T>(var_name: &str, default: T) -> ConfigResult<T>
    where
        T: FromStr<Err = String>,
    {
        match env::var(var_name) {
            Ok(val) => val.parse::<T>().map_err(|reason| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason,
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            seed_sample_data: true,
            on_load_error: OnLoadError::Empty,
            log_level: "warn".to_string(),
        }
    }
}
