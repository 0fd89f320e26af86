//! cli
//!
//! Command-line interface for the `oid` binary.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load configuration and expand alias references
//! - Delegate to command handlers, which call into [`crate::core`]
//!
//! The CLI layer is thin: all parsing and validation of identifiers lives
//! in the core types.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context as _, Result};

use crate::core::config::{Config, OutputFormat};
use crate::core::dot::DotPath;
use crate::core::input::{parse_any, Notation};
use crate::core::named::NamedArc;
use crate::core::oid::ObjectIdentifier;
use crate::ui::output::{self, Verbosity};

/// Settings shared by every command handler.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output verbosity
    pub verbosity: Verbosity,
    /// Output format after applying `--json` over the config default
    pub format: OutputFormat,
    /// Loaded configuration
    pub config: Config,
    /// Path given with `--config`, if any
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// True if results should be printed as JSON.
    pub fn json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Expand aliases in `input`.
    pub fn expand(&self, input: &str) -> Result<String> {
        let expanded = self.config.expand(input)?;
        if expanded != input {
            output::debug(format!("expanded '{input}' to '{expanded}'"), self.verbosity);
        }
        Ok(expanded)
    }

    /// Resolve a command-line input to an identifier.
    pub fn resolve(&self, input: &str) -> Result<ObjectIdentifier> {
        let expanded = self.expand(input)?;
        output::debug(
            format!("parsing '{expanded}' as {:?} notation", Notation::detect(&expanded)),
            self.verbosity,
        );
        parse_any(&expanded).with_context(|| format!("Invalid identifier '{input}'"))
    }

    /// Resolve a command-line input to a dot notation path.
    ///
    /// Unlike [`ObjectIdentifier::dot`], single-arc inputs are accepted.
    pub fn resolve_dot(&self, input: &str) -> Result<DotPath> {
        let id = self.resolve(input)?;
        DotPath::from_arcs(id.arcs().iter().map(NamedArc::number).collect())
            .with_context(|| format!("Invalid identifier '{input}'"))
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);

    let config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    match config.loaded_from() {
        Some(path) => output::debug(format!("loaded config from {}", path.display()), verbosity),
        None => output::debug("no config file found, using defaults", verbosity),
    }

    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.format()
    };

    let ctx = Context {
        verbosity,
        format,
        config,
        config_path: cli.config,
    };

    commands::dispatch(cli.command, &ctx)
}
