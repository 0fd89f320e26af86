//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Output formatting, JSON printing and diagnostics
//!
//! # Design
//!
//! All diagnostics go through this module so verbosity flags are
//! honored consistently.

pub mod output;
