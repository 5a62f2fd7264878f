//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order:
//! 1. `$TYPEDLIST_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/typedlist/config.toml`
//! 3. `~/.typedlist/config.toml` (canonical write location)
//!
//! # Example
//!
//! ```no_run
//! use typedlist::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("List file: {}", config.default_path().display());
//! println!("JSON output: {}", config.json());
//! ```

pub mod schema;

pub use schema::GlobalConfig;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::persist;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "TYPEDLIST_CONFIG";

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

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Loaded configuration with defaults applied by the accessors.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub global: GlobalConfig,
    /// Path the config was loaded from, if any
    loaded_from: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed or
    /// fails validation. A missing file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::locate() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file.
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
            loaded_from: Some(path.to_path_buf()),
        })
    }

    /// First existing config file among the standard locations.
    fn locate() -> Option<PathBuf> {
        // 1. Check $TYPEDLIST_CONFIG
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. Check $XDG_CONFIG_HOME/typedlist/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("typedlist/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Check ~/.typedlist/config.toml
        dirs::home_dir()
            .map(|home| home.join(".typedlist/config.toml"))
            .filter(|path| path.exists())
    }

    /// Where `write` puts the config.
    ///
    /// An explicit `$TYPEDLIST_CONFIG` wins, otherwise
    /// `~/.typedlist/config.toml`.
    pub fn write_path() -> Result<PathBuf, ConfigError> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".typedlist/config.toml"))
    }

    /// Write global config atomically to [`write_path`](Self::write_path).
    pub fn write(config: &GlobalConfig) -> Result<PathBuf, ConfigError> {
        let path = Self::write_path()?;
        Self::write_to(&path, config)?;
        Ok(path)
    }

    /// Write a config file atomically.
    ///
    /// Creates parent directories if needed. Writes to a temp file and
    /// renames it into place.
    pub fn write_to(path: &Path, config: &GlobalConfig) -> Result<(), ConfigError> {
        config.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// List file used when none is given on the command line.
    ///
    /// Defaults to `psp4c.txt` in the system temp directory.
    pub fn default_path(&self) -> PathBuf {
        self.global
            .default_path
            .clone()
            .unwrap_or_else(persist::default_path)
    }

    /// Whether JSON output is on by default. Defaults to `false`.
    pub fn json(&self) -> bool {
        self.global.json.unwrap_or(false)
    }

    /// Whether quiet mode is on by default. Defaults to `false`.
    pub fn quiet(&self) -> bool {
        self.global.quiet.unwrap_or(false)
    }

    /// Path of the loaded config file, if one was found.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.loaded_from.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_without_file() {
        let config = Config::default();
        assert_eq!(config.default_path(), persist::default_path());
        assert!(!config.json());
        assert!(!config.quiet());
        assert!(config.loaded_from().is_none());
    }

    #[test]
    fn load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
            default_path = "/srv/lists/main.txt"
            json = true
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.default_path(), PathBuf::from("/srv/lists/main.txt"));
        assert!(config.json());
        assert!(!config.quiet());
        assert_eq!(config.loaded_from(), Some(path.as_path()));
    }

    #[test]
    fn unknown_fields_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "capacity = 40\n").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn invalid_value_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "default_path = \"\"\n").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn write_is_atomic_and_reloadable() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/config.toml");
        let global = GlobalConfig {
            quiet: Some(true),
            ..Default::default()
        };

        Config::write_to(&path, &global).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("toml.tmp").exists());
        assert!(Config::load_from(&path).unwrap().quiet());
    }
}
