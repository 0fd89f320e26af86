//! core::input
//!
//! Adapters from loosely typed input onto the identifier types.
//!
//! JSON documents and command lines hand us values whose shape is only
//! known at runtime. These adapters map each shape onto one of the closed
//! operand types ([`NumberLike`], [`OidInput`]) and report anything else
//! as `OidError::UnsupportedInputType`. A JSON `null` is a request for the
//! zero value.
//!
//! # Example
//!
//! ```
//! use objectid::core::oid::ObjectIdentifier;
//! use serde_json::json;
//!
//! let id = ObjectIdentifier::from_json(&json!(["iso(1)", "3", "dod(6)"])).unwrap();
//! assert_eq!(id.to_string(), "{iso(1) 3 dod(6)}");
//!
//! assert!(ObjectIdentifier::from_json(&json!(1.5)).is_err());
//! assert!(ObjectIdentifier::from_json(&json!(null)).unwrap().is_zero());
//! ```

use serde_json::Value;

use super::dot::DotPath;
use super::errors::OidError;
use super::named::NamedArc;
use super::number::{ArcNumber, NumberLike};
use super::oid::{ObjectIdentifier, OidInput};

/// Which notation a piece of text is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// `{iso(1) 3 dod(6)}`
    Asn,
    /// `1.3.6`
    Dot,
}

impl Notation {
    /// Guess the notation from the first non-space character.
    pub fn detect(s: &str) -> Self {
        if s.trim_start().starts_with('{') {
            Notation::Asn
        } else {
            Notation::Dot
        }
    }
}

/// Parse an identifier written in either notation.
///
/// Dot notation input yields unnamed arcs.
///
/// # Errors
///
/// Returns the error of whichever parser the detected notation selects.
pub fn parse_any(s: &str) -> Result<ObjectIdentifier, OidError> {
    match Notation::detect(s) {
        Notation::Asn => ObjectIdentifier::parse(s),
        Notation::Dot => ObjectIdentifier::from_dot(&DotPath::parse(s.trim())?),
    }
}

/// Describe a JSON value's type for error messages.
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "floating point number",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn unsupported(value: &Value, what: &str) -> OidError {
    OidError::UnsupportedInputType(format!("cannot build {what} from {}", type_name(value)))
}

/// Map a JSON scalar onto a number operand.
///
/// Integers wider than 64 bits keep their literal text and are parsed at
/// full width.
fn number_like(value: &Value) -> Option<NumberLike<'_>> {
    match value {
        Value::String(s) => Some(NumberLike::Text(s.as_str())),
        Value::Number(n) if n.is_f64() => None,
        Value::Number(n) => n
            .as_u64()
            .map(NumberLike::from)
            .or_else(|| n.as_i64().map(NumberLike::from))
            .or_else(|| Some(NumberLike::Text(n.as_str()))),
        _ => None,
    }
}

impl ArcNumber {
    /// Build an arc number from a JSON string or integer.
    ///
    /// # Errors
    ///
    /// - `OidError::InvalidNumber` for negative or malformed values
    /// - `OidError::UnsupportedInputType` for floats, booleans, arrays and objects
    pub fn from_json(value: &Value) -> Result<Self, OidError> {
        if value.is_null() {
            return Ok(Self::default());
        }
        number_like(value)
            .ok_or_else(|| unsupported(value, "an arc number"))?
            .resolve()
    }
}

impl NamedArc {
    /// Build an arc from a JSON token string or integer.
    ///
    /// # Errors
    ///
    /// As [`NamedArc::parse`] for strings and [`ArcNumber::from_json`] for numbers.
    pub fn from_json(value: &Value) -> Result<Self, OidError> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::String(s) => Self::parse(s),
            Value::Number(_) => ArcNumber::from_json(value).map(Self::from),
            _ => Err(unsupported(value, "an arc")),
        }
    }
}

impl DotPath {
    /// Build a path from dot notation text or an array of arcs.
    ///
    /// # Errors
    ///
    /// - `OidError::InvalidNotation` for malformed text or arcs
    /// - `OidError::UnsupportedInputType` for any other JSON shape
    pub fn from_json(value: &Value) -> Result<Self, OidError> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::String(s) => Self::parse(s),
            Value::Array(items) => {
                let arcs = items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| match number_like(item) {
                        Some(n) => n
                            .resolve()
                            .map_err(|e| e.into_notation(&format!("arc {i}"))),
                        None => Err(unsupported(item, "an arc number")),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Self::from_arcs(arcs)
            }
            _ => Err(unsupported(value, "a dot notation path")),
        }
    }
}

impl ObjectIdentifier {
    /// Build an identifier from bracketed text or an array of arc tokens.
    ///
    /// # Errors
    ///
    /// - `OidError::InvalidNotation` or `OidError::EmptyInput` for bad text
    /// - `OidError::UnsupportedInputType` for any other JSON shape
    pub fn from_json(value: &Value) -> Result<Self, OidError> {
        match value {
            Value::Null => Self::new(OidInput::Absent),
            Value::String(s) => Self::new(s),
            Value::Array(items) => {
                let tokens = items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => Ok(s.as_str()),
                        other => Err(unsupported(other, "an arc token")),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Self::new(tokens)
            }
            _ => Err(unsupported(value, "an object identifier")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::ErrorKind;
    use serde_json::json;

    mod detection {
        use super::*;

        #[test]
        fn notation() {
            assert_eq!(Notation::detect("{iso(1)}"), Notation::Asn);
            assert_eq!(Notation::detect("  {iso(1)}"), Notation::Asn);
            assert_eq!(Notation::detect("1.3.6"), Notation::Dot);
            assert_eq!(Notation::detect(""), Notation::Dot);
        }

        #[test]
        fn parse_any_both_forms() {
            let asn = parse_any("{iso(1) identified-organization(3) dod(6)}").unwrap();
            let dot = parse_any("1.3.6").unwrap();
            assert!(asn.number_eq(&dot));
            assert_ne!(asn, dot);
        }

        #[test]
        fn parse_any_errors() {
            assert!(parse_any("").is_err());
            assert!(parse_any("1..3").is_err());
            assert!(parse_any("{iso(1)").is_err());
        }
    }

    mod arc_number {
        use super::*;

        #[test]
        fn accepted_shapes() {
            assert_eq!(ArcNumber::from_json(&json!(42)).unwrap().value(), 42);
            assert_eq!(ArcNumber::from_json(&json!("42")).unwrap().value(), 42);
            assert!(!ArcNumber::from_json(&json!(null)).unwrap().valid());
        }

        #[test]
        fn wide_integers_keep_full_width() {
            let value: Value = serde_json::from_str("987895962269883002155146617097157934").unwrap();
            let n = ArcNumber::from_json(&value).unwrap();
            assert_eq!(n.to_string(), "987895962269883002155146617097157934");

            let max: Value = serde_json::from_str(&u128::MAX.to_string()).unwrap();
            assert_eq!(ArcNumber::from_json(&max).unwrap().value(), u128::MAX);
        }

        #[test]
        fn integers_past_128_bits_are_invalid_number() {
            let value: Value =
                serde_json::from_str("340282366920938463463374607431768211456").unwrap();
            let err = ArcNumber::from_json(&value).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidNumber);
        }

        #[test]
        fn negative_is_invalid_number() {
            let err = ArcNumber::from_json(&json!(-42)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidNumber);
        }

        #[test]
        fn unsupported_shapes() {
            for value in [json!(1.5), json!(true), json!([1]), json!({"n": 1})] {
                let err = ArcNumber::from_json(&value).unwrap_err();
                assert_eq!(err.kind(), ErrorKind::UnsupportedInputType, "value {value}");
            }
        }
    }

    mod named_arc {
        use super::*;

        #[test]
        fn accepted_shapes() {
            assert_eq!(
                NamedArc::from_json(&json!("enterprise(1)")).unwrap().to_string(),
                "enterprise(1)"
            );
            assert_eq!(NamedArc::from_json(&json!(77)).unwrap().to_string(), "77");
            assert!(NamedArc::from_json(&json!(null)).unwrap().is_zero());
        }

        #[test]
        fn rejected_shapes() {
            assert_eq!(
                NamedArc::from_json(&json!(-4)).unwrap_err().kind(),
                ErrorKind::InvalidNumber
            );
            assert_eq!(
                NamedArc::from_json(&json!(1.0)).unwrap_err().kind(),
                ErrorKind::UnsupportedInputType
            );
        }
    }

    mod dot_path {
        use super::*;

        #[test]
        fn from_array() {
            let dot = DotPath::from_json(&json!([1, "3", 6])).unwrap();
            assert_eq!(dot.to_string(), "1.3.6");
        }

        #[test]
        fn array_errors() {
            assert_eq!(
                DotPath::from_json(&json!([1, -3])).unwrap_err().kind(),
                ErrorKind::InvalidNotation
            );
            assert_eq!(
                DotPath::from_json(&json!([1, 2.5])).unwrap_err().kind(),
                ErrorKind::UnsupportedInputType
            );
            assert!(DotPath::from_json(&json!([])).is_err());
        }

        #[test]
        fn from_text_and_null() {
            assert_eq!(DotPath::from_json(&json!("1.3")).unwrap().len(), 2);
            assert!(DotPath::from_json(&json!(null)).unwrap().is_zero());
            assert_eq!(
                DotPath::from_json(&json!(13)).unwrap_err().kind(),
                ErrorKind::UnsupportedInputType
            );
        }
    }

    mod object_identifier {
        use super::*;

        #[test]
        fn unsupported_scalar() {
            let err = ObjectIdentifier::from_json(&json!(1.0)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::UnsupportedInputType);
            assert!(err.to_string().contains("floating point number"));
        }

        #[test]
        fn token_array_must_hold_strings() {
            let err = ObjectIdentifier::from_json(&json!(["iso(1)", 3])).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::UnsupportedInputType);
        }

        #[test]
        fn bracket_text() {
            let id = ObjectIdentifier::from_json(&json!("{iso(1) 3}")).unwrap();
            assert_eq!(id.len(), 2);
        }

        #[test]
        fn empty_array_is_invalid() {
            let err = ObjectIdentifier::from_json(&json!([])).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidNotation);
        }
    }
}
