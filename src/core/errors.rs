//! core::errors
//!
//! Error types for object identifier parsing.
//!
//! Every parse failure is reported as an [`OidError`]. Comparison and
//! accessor operations never produce errors; they degrade to `false` or
//! a zero value instead.

use thiserror::Error;

/// Errors from parsing and constructing identifier values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OidError {
    #[error("empty input")]
    EmptyInput,

    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("invalid notation: {0}")]
    InvalidNotation(String),

    #[error("unsupported input type: {0}")]
    UnsupportedInputType(String),
}

/// The kind of an [`OidError`], without its detail message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyInput,
    InvalidNumber,
    InvalidIdentifier,
    InvalidNotation,
    UnsupportedInputType,
}

impl OidError {
    /// Get the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            OidError::EmptyInput => ErrorKind::EmptyInput,
            OidError::InvalidNumber(_) => ErrorKind::InvalidNumber,
            OidError::InvalidIdentifier(_) => ErrorKind::InvalidIdentifier,
            OidError::InvalidNotation(_) => ErrorKind::InvalidNotation,
            OidError::UnsupportedInputType(_) => ErrorKind::UnsupportedInputType,
        }
    }

    /// Re-report a lower level failure as a notation error.
    ///
    /// The original message is kept so callers still see which token failed.
    pub(crate) fn into_notation(self, context: &str) -> Self {
        match self {
            OidError::InvalidNotation(_) => self,
            other => OidError::InvalidNotation(format!("{context}: {other}")),
        }
    }
}
