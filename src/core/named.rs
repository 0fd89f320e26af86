//! core::named
//!
//! A single arc in ASN.1 name-and-number form, e.g. `enterprise(1)` or `56521`.
//!
//! # Identifier rules
//!
//! - Cannot be empty
//! - Must start with a lowercase ASCII letter
//! - Must end with an ASCII letter or digit
//! - May only contain ASCII letters, digits and `-`
//! - Cannot contain `--`
//!
//! # Example
//!
//! ```
//! use objectid::core::named::NamedArc;
//!
//! let arc = NamedArc::parse("enterprise(1)").unwrap();
//! assert_eq!(arc.identifier(), "enterprise");
//! assert_eq!(arc.number().to_string(), "1");
//!
//! let bare = NamedArc::parse("56521").unwrap();
//! assert!(!bare.is_named());
//!
//! assert!(NamedArc::parse("Enterprise(1)").is_err());
//! assert!(NamedArc::parse("bad--name(1)").is_err());
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::OidError;
use super::number::{ArcNumber, NumberLike};
use super::text::{is_identifier_char, is_lower};

/// An arc number with an optional identifier.
///
/// The default value is the zero value: unnamed, with a zero-value number.
/// Equality is structural: identifiers (case-sensitive) and numbers must both match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NamedArc {
    identifier: Option<String>,
    number: ArcNumber,
}

impl NamedArc {
    /// Create an arc from its parts.
    ///
    /// An empty or absent identifier produces a number-only arc.
    ///
    /// # Errors
    ///
    /// Returns `OidError::InvalidIdentifier` if the identifier breaks the
    /// identifier rules, or `OidError::InvalidNumber` if the number is unusable.
    pub fn new<'a>(
        identifier: Option<&str>,
        number: impl Into<NumberLike<'a>>,
    ) -> Result<Self, OidError> {
        let identifier = match identifier {
            Some(name) if !name.is_empty() => {
                validate_identifier(name)?;
                Some(name.to_string())
            }
            _ => None,
        };
        let number = ArcNumber::new(number)?;
        Ok(Self { identifier, number })
    }

    /// Parse `identifier(number)` or a bare `number`.
    ///
    /// # Errors
    ///
    /// - `OidError::EmptyInput` for an empty token
    /// - `OidError::InvalidIdentifier` if the name part breaks the identifier rules
    /// - `OidError::InvalidNumber` if the number part is missing or malformed
    pub fn parse(token: &str) -> Result<Self, OidError> {
        if token.is_empty() {
            return Err(OidError::EmptyInput);
        }

        match (token.find('('), token.strip_suffix(')')) {
            (Some(open), Some(inner)) => {
                let name = &inner[..open];
                let number = &inner[open + 1..];
                validate_identifier(name)?;
                Ok(Self {
                    identifier: Some(name.to_string()),
                    number: ArcNumber::parse(number)?,
                })
            }
            _ => Ok(Self {
                identifier: None,
                number: ArcNumber::parse(token)?,
            }),
        }
    }

    /// An arc for a well-known registration whose name needs no validation.
    pub(crate) fn known(name: &'static str, number: u32) -> Self {
        Self {
            identifier: Some(name.to_string()),
            number: ArcNumber::from(number),
        }
    }

    /// The identifier, or an empty string for a number-only arc.
    pub fn identifier(&self) -> &str {
        self.identifier.as_deref().unwrap_or("")
    }

    /// The arc number.
    pub fn number(&self) -> ArcNumber {
        self.number
    }

    /// True if the arc carries an identifier.
    pub fn is_named(&self) -> bool {
        self.identifier.is_some()
    }

    /// True only for the zero value.
    pub fn is_zero(&self) -> bool {
        self.identifier.is_none() && !self.number.valid()
    }

    /// True once the arc has been constructed.
    pub fn valid(&self) -> bool {
        self.number.valid()
    }

    /// Structural equality; same as `==`.
    pub fn equal(&self, other: &NamedArc) -> bool {
        self == other
    }
}

/// Check a name against the identifier rules.
///
/// # Errors
///
/// Returns `OidError::InvalidIdentifier` naming the first rule broken.
pub fn validate_identifier(name: &str) -> Result<(), OidError> {
    let first = name
        .chars()
        .next()
        .ok_or_else(|| OidError::InvalidIdentifier("identifier cannot be empty".into()))?;

    if !is_lower(first) {
        return Err(OidError::InvalidIdentifier(format!(
            "'{name}' must start with a lowercase letter"
        )));
    }

    if let Some(c) = name.chars().find(|&c| !is_identifier_char(c)) {
        return Err(OidError::InvalidIdentifier(format!(
            "'{name}' cannot contain '{c}'"
        )));
    }

    if name.ends_with('-') {
        return Err(OidError::InvalidIdentifier(format!(
            "'{name}' must end with a letter or digit"
        )));
    }

    if name.contains("--") {
        return Err(OidError::InvalidIdentifier(format!(
            "'{name}' cannot contain '--'"
        )));
    }

    Ok(())
}

impl From<ArcNumber> for NamedArc {
    fn from(number: ArcNumber) -> Self {
        Self {
            identifier: None,
            number,
        }
    }
}

impl FromStr for NamedArc {
    type Err = OidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for NamedArc {
    type Error = OidError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<NamedArc> for String {
    fn from(arc: NamedArc) -> Self {
        arc.to_string()
    }
}

impl std::fmt::Display for NamedArc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.identifier {
            Some(name) => write!(f, "{}({})", name, self.number),
            None => write!(f, "{}", self.number),
        }
    }
}
