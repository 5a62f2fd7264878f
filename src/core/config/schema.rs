//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Config values are validated after parsing. Unknown keys are rejected
//! at parse time.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// default_path = "/home/me/lists/work.txt"
/// json = false
/// quiet = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// List file used when `--file` is not given
    pub default_path: Option<PathBuf>,

    /// Emit JSON output by default
    pub json: Option<bool>,

    /// Suppress non-essential output by default
    pub quiet: Option<bool>,
}

/// Keys accepted by `config get` / `config set`.
pub const KEYS: [&str; 3] = ["default_path", "json", "quiet"];

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.default_path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "default_path cannot be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Read a key as display text. Unset keys yield `None`.
    pub fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        match key {
            "default_path" => Ok(self
                .default_path
                .as_ref()
                .map(|p| p.display().to_string())),
            "json" => Ok(self.json.map(|b| b.to_string())),
            "quiet" => Ok(self.quiet.map(|b| b.to_string())),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a key from text.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "default_path" => self.default_path = Some(PathBuf::from(value)),
            "json" => self.json = Some(parse_bool(key, value)?),
            "quiet" => self.quiet = Some(parse_bool(key, value)?),
            _ => return Err(unknown_key(key)),
        }
        self.validate()
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    value.parse().map_err(|_| {
        ConfigError::InvalidValue(format!("{} must be true or false, got '{}'", key, value))
    })
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::InvalidValue(format!(
        "unknown key '{}', must be one of: {}",
        key,
        KEYS.join(", ")
    ))
}
