//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//! - `--json`: Machine-readable output
//! - `--config <path>`: Use this config file
//!
//! # Inputs
//!
//! Wherever a command takes an `INPUT`, it accepts dot notation
//! (`1.3.6.1`), bracket notation (`'{iso(1) 3 dod(6) internet(1)}'`) or
//! an alias reference (`@pen`, `@pen.56521`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// oid - Parse, inspect and convert ASN.1 object identifiers
#[derive(Parser, Debug)]
#[command(name = "oid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print results as JSON (overrides the configured format)
    #[arg(long, global = true)]
    pub json: bool,

    /// Read configuration from this file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show every view of an identifier
    #[command(
        name = "show",
        long_about = "Show every view of an identifier.\n\n\
            Prints the arc count, dot notation, bracket notation, and the root, \
            parent and leaf arcs. Dot notation input produces unnamed arcs.",
        after_help = "\
EXAMPLES:
    oid show 1.3.6.1.4.1.56521.999.5
    oid show '{joint-iso-itu-t(2) uuid(25) ans(987895962269883002155146617097157934)}'
    oid show @pen.56521 --json"
    )]
    Show {
        /// Identifier in either notation
        input: String,
    },

    /// Convert to dot notation
    #[command(
        name = "dot",
        after_help = "\
EXAMPLES:
    oid dot '{iso(1) identified-organization(3) dod(6) internet(1)}'
        1.3.6.1

NOTES:
    Identifiers with a single arc have no dot notation form."
    )]
    Dot {
        /// Identifier in either notation
        input: String,
    },

    /// Convert to bracket notation
    #[command(name = "asn")]
    Asn {
        /// Identifier in either notation
        input: String,
    },

    /// List every prefix of an identifier, root first
    #[command(name = "ancestry")]
    Ancestry {
        /// Identifier in either notation
        input: String,
    },

    /// Check whether one identifier is an ancestor of (or equal to) another
    #[command(
        name = "ancestor",
        long_about = "Check whether one identifier is an ancestor of (or equal to) another.\n\n\
            Prints true or false. Exits with status 1 when the answer is false, \
            so the command can be used directly in shell conditionals.",
        after_help = "\
EXAMPLES:
    oid ancestor 1.3.6 1.3.6.1.4        # true
    oid ancestor 1.3.6.1.4 1.3.6        # false, exit 1"
    )]
    Ancestor {
        /// The candidate ancestor
        ancestor: String,
        /// The candidate descendant
        descendant: String,
    },

    /// Append one arc to an identifier
    #[command(name = "child")]
    Child {
        /// Identifier in either notation
        input: String,
        /// The new arc: `number` or `name(number)`
        arc: String,
    },

    /// Get one arc by position
    #[command(
        name = "index",
        after_help = "\
EXAMPLES:
    oid index 1.3.6.1.4.1.56521.999.5 1      # 3
    oid index 1.3.6.1.4.1.56521.999.5 -1     # 5
    oid index 1.3.6.1.4.1.56521.999.5 100    # 5

NOTES:
    Negative positions count from the end. Positions past either end
    are clamped to the first or last arc."
    )]
    Index {
        /// Identifier in either notation
        input: String,
        /// Zero-based position; negative values count from the end
        #[arg(allow_negative_numbers = true)]
        position: isize,
    },

    /// Compare two arc numbers
    #[command(
        name = "compare",
        long_about = "Compare two arc numbers of up to 128 bits.\n\n\
            Prints `<`, `=` or `>`. Exits with status 1 if either operand is \
            not a valid arc number."
    )]
    Compare {
        /// Left operand
        #[arg(allow_negative_numbers = true)]
        left: String,
        /// Right operand
        #[arg(allow_negative_numbers = true)]
        right: String,
    },

    /// Validate identifiers
    #[command(
        name = "validate",
        long_about = "Validate one or more identifiers.\n\n\
            Prints one line per input. Exits with status 1 if any input is invalid."
    )]
    Validate {
        /// Identifiers in either notation
        #[arg(required = true)]
        inputs: Vec<String>,
    },

    /// Convert a UUID to its OID under joint-iso-itu-t(2) uuid(25)
    #[command(
        name = "uuid",
        after_help = "\
EXAMPLES:
    oid uuid f81d4fae-7dec-11d0-a765-00a0c91e6bf6
        2.25.329800735698586629295641978511506172918"
    )]
    Uuid {
        /// UUID in any format the uuid crate accepts
        uuid: String,
    },

    /// Get, set, or list configuration values
    #[command(
        name = "config",
        after_help = "\
KEYS:
    format            Default output format: text or json
    aliases.<name>    An OID usable as @<name>

EXAMPLES:
    oid config set aliases.pen 1.3.6.1.4.1
    oid show @pen.56521"
    )]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(name = "completion")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Value to set
        value: String,
    },
    /// List all configuration values
    List,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
