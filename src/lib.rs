//! objectid - Parse, inspect and convert ASN.1 object identifiers
//!
//! An object identifier (OID) is a path of non-negative integer arcs in a
//! global naming tree. This crate models OIDs in both common notations:
//!
//! - dot notation: `1.3.6.1.4.1.56521.999`
//! - bracketed ASN.1 notation:
//!   `{iso(1) identified-organization(3) dod(6) internet(1) private(4) enterprise(1) 56521 example(999)}`
//!
//! # Architecture
//!
//! - [`core`] - Value types, parsing, validation and configuration
//! - [`cli`] - Command-line interface layer for the `oid` binary
//! - [`ui`] - Output formatting and diagnostics
//!
//! # Invariants
//!
//! 1. Every value produced by a successful parse is valid
//! 2. Parsed values round-trip through their canonical text form
//! 3. Values are immutable; derivation returns new values

pub mod cli;
pub mod core;
pub mod ui;

pub use crate::core::dot::DotPath;
pub use crate::core::errors::{ErrorKind, OidError};
pub use crate::core::named::NamedArc;
pub use crate::core::number::ArcNumber;
pub use crate::core::oid::ObjectIdentifier;
