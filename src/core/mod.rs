//! core
//!
//! Value types for object identifiers and the configuration they are
//! resolved against.
//!
//! # Modules
//!
//! - [`number`] - [`ArcNumber`](number::ArcNumber), one non-negative arc
//! - [`named`] - [`NamedArc`](named::NamedArc), an arc with an optional name
//! - [`dot`] - [`DotPath`](dot::DotPath), dot notation paths
//! - [`oid`] - [`ObjectIdentifier`](oid::ObjectIdentifier), bracket notation
//! - [`input`] - Notation detection and JSON value adapters
//! - [`errors`] - The shared error type
//! - [`text`] - Character classes and whitespace handling
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Constructors validate; a value that exists is valid or is the zero value
//! - Zero values are inert: they render empty and answer `false`
//! - Nothing here prints or touches the process environment except `config`

pub mod config;
pub mod dot;
pub mod errors;
pub mod input;
pub mod named;
pub mod number;
pub mod oid;
pub mod text;
