//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Config values are validated after parsing: alias names must be valid
//! arc identifiers and alias values must parse in either notation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::input::parse_any;
use crate::core::named::validate_identifier;

/// Default output format for commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable text
    #[default]
    Text,
    /// One JSON document per command
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::InvalidValue(format!(
                "invalid format '{other}', must be one of: text, json"
            ))),
        }
    }
}

/// The configuration file.
///
/// # Example
///
/// ```toml
/// format = "text"
///
/// [aliases]
/// pen = "1.3.6.1.4.1"
/// internet = "{iso(1) identified-organization(3) dod(6) internet(1)}"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Default output format
    pub format: Option<OutputFormat>,

    /// Named OIDs usable as `@name` on the command line
    pub aliases: BTreeMap<String, String>,
}

impl Settings {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any alias is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in &self.aliases {
            validate_alias(name, value)?;
        }
        Ok(())
    }
}

/// Validate a single alias entry.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if the name is not an identifier or
/// the value is not an OID.
pub fn validate_alias(name: &str, value: &str) -> Result<(), ConfigError> {
    validate_identifier(name)
        .map_err(|e| ConfigError::InvalidValue(format!("alias name: {e}")))?;
    parse_any(value)
        .map_err(|e| ConfigError::InvalidValue(format!("alias '{name}': {e}")))?;
    Ok(())
}
