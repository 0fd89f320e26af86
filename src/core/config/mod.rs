//! core::config
//!
//! Configuration schema and loading.
//!
//! # Locations
//!
//! If `--config` is given, only that path is consulted. Otherwise the
//! following are searched in order and the first existing file wins:
//! 1. `$OBJECTID_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/objectid/config.toml`
//! 3. `~/.objectid/config.toml` (canonical write location)
//!
//! A missing file is not an error; defaults are used.
//!
//! # Aliases
//!
//! The `[aliases]` table names frequently used OIDs. On the command line,
//! `@name` expands to the alias value and `@name.<arcs>` appends further
//! arcs to a dot notation alias.
//!
//! # Example
//!
//! ```no_run
//! use objectid::core::config::Config;
//!
//! let config = Config::load(None).unwrap();
//! println!("Format: {}", config.format());
//! println!("{}", config.expand("@pen.56521").unwrap());
//! ```

pub mod schema;

pub use schema::{OutputFormat, Settings};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::input::Notation;

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

    #[error("unknown configuration key: {0}")]
    UnknownKey(String),

    #[error("unknown alias: @{0}")]
    UnknownAlias(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed settings (defaults if no file was found)
    pub settings: Settings,
    /// Path the settings were loaded from
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from `explicit` or the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed
    /// or validated.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_first(&[path.to_path_buf()]);
        }
        Self::load_first(&Self::search_paths())
    }

    /// Load the first existing file among `candidates`, or defaults.
    pub fn load_first(candidates: &[PathBuf]) -> Result<Self, ConfigError> {
        match candidates.iter().find(|p| p.exists()) {
            Some(path) => Self::read(path),
            None => Ok(Self::default()),
        }
    }

    /// The default search locations, in precedence order.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Ok(path) = std::env::var("OBJECTID_CONFIG") {
            paths.push(PathBuf::from(path));
        }
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg_home).join("objectid/config.toml"));
        }
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".objectid/config.toml"));
        }
        paths
    }

    /// Read, parse and validate one config file.
    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        settings.validate()?;

        Ok(Self {
            settings,
            path: Some(path.to_path_buf()),
        })
    }

    /// Get the canonical config path, `~/.objectid/config.toml`.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".objectid/config.toml"))
    }

    /// Get the path the configuration was loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Write settings atomically.
    ///
    /// Creates parent directories if needed. The file is written to a
    /// sibling temp file and renamed into place.
    pub fn write(path: &Path, settings: &Settings) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents = toml::to_string_pretty(settings)
            .map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("toml.tmp");
        if let Err(e) = Self::write_temp(&temp_path, contents.as_bytes()) {
            let _ = fs::remove_file(&temp_path);
            return Err(ConfigError::WriteError {
                path: temp_path,
                source: e,
            });
        }

        fs::rename(&temp_path, path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            }
        })?;

        Ok(())
    }

    fn write_temp(temp_path: &Path, contents: &[u8]) -> std::io::Result<()> {
        let mut file = fs::File::create(temp_path)?;
        file.write_all(contents)?;
        file.sync_all()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the default output format. Defaults to text.
    pub fn format(&self) -> OutputFormat {
        self.settings.format.unwrap_or_default()
    }

    /// Look up an alias value.
    pub fn alias(&self, name: &str) -> Option<&str> {
        self.settings.aliases.get(name).map(String::as_str)
    }

    /// Expand `@name` and `@name.<arcs>` references. Other input is returned as is.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownAlias` for an undefined name, or
    /// `ConfigError::InvalidValue` when arcs are appended to a bracket
    /// notation alias.
    pub fn expand(&self, input: &str) -> Result<String, ConfigError> {
        let Some(reference) = input.strip_prefix('@') else {
            return Ok(input.to_string());
        };

        let (name, suffix) = match reference.split_once('.') {
            Some((name, suffix)) => (name, Some(suffix)),
            None => (reference, None),
        };

        let value = self
            .alias(name)
            .ok_or_else(|| ConfigError::UnknownAlias(name.to_string()))?;

        match suffix {
            None => Ok(value.to_string()),
            Some(_) if Notation::detect(value) == Notation::Asn => {
                Err(ConfigError::InvalidValue(format!(
                    "alias '@{name}' is in bracket notation and cannot take a dotted suffix"
                )))
            }
            Some(suffix) => Ok(format!("{value}.{suffix}")),
        }
    }
}

impl Settings {
    /// Get a value by key: `format` or `aliases.<name>`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownKey` for unrecognized keys.
    pub fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        match key {
            "format" => Ok(self.format.map(|f| f.to_string())),
            _ => match key.strip_prefix("aliases.") {
                Some(name) => Ok(self.aliases.get(name).cloned()),
                None => Err(ConfigError::UnknownKey(key.to_string())),
            },
        }
    }

    /// Set a value by key: `format` or `aliases.<name>`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownKey` for unrecognized keys or
    /// `ConfigError::InvalidValue` if the value fails validation.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "format" => {
                self.format = Some(value.parse()?);
                Ok(())
            }
            _ => match key.strip_prefix("aliases.") {
                Some(name) => {
                    schema::validate_alias(name, value)?;
                    self.aliases.insert(name.to_string(), value.to_string());
                    Ok(())
                }
                None => Err(ConfigError::UnknownKey(key.to_string())),
            },
        }
    }

    /// All set values as `(key, value)` pairs, in key order.
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut entries = Vec::new();
        if let Some(format) = self.format {
            entries.push(("format".to_string(), format.to_string()));
        }
        for (name, value) in &self.aliases {
            entries.push((format!("aliases.{name}"), value.clone()));
        }
        entries
    }
}
