//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Resolves its inputs through [`Context`] (alias expansion, parsing)
//! 2. Calls into [`crate::core`]
//! 3. Formats and displays output
//!
//! # Exit Status
//!
//! Errors exit with status 1 via `main`. Predicate commands (`ancestor`,
//! `validate`) also exit with status 1 when their answer is negative, so
//! they can be used in shell conditionals.

mod compare;
mod completion;
mod config_cmd;
mod navigation;
mod show;
mod uuid_cmd;
mod validate;

// Re-export command functions for testing and direct invocation
pub use compare::compare;
pub use completion::completion;
pub use config_cmd::{get as config_get, list as config_list, set as config_set};
pub use navigation::{ancestor, ancestry, child, index};
pub use show::{asn, dot, show};
pub use uuid_cmd::uuid;
pub use validate::validate;

use std::process::ExitCode;

use anyhow::Result;

use crate::cli::args::{Command, ConfigAction};
use crate::cli::Context;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<ExitCode> {
    let ok = match command {
        // Views
        Command::Show { input } => done(show::show(ctx, &input))?,
        Command::Dot { input } => done(show::dot(ctx, &input))?,
        Command::Asn { input } => done(show::asn(ctx, &input))?,

        // Hierarchy
        Command::Ancestry { input } => done(navigation::ancestry(ctx, &input))?,
        Command::Ancestor {
            ancestor,
            descendant,
        } => navigation::ancestor(ctx, &ancestor, &descendant)?,
        Command::Child { input, arc } => done(navigation::child(ctx, &input, &arc))?,
        Command::Index { input, position } => done(navigation::index(ctx, &input, position))?,

        // Utilities
        Command::Compare { left, right } => done(compare::compare(ctx, &left, &right))?,
        Command::Validate { inputs } => validate::validate(ctx, &inputs)?,
        Command::Uuid { uuid } => done(uuid_cmd::uuid(ctx, &uuid))?,

        // Setup
        Command::Config { action } => done(match action {
            ConfigAction::Get { key } => config_cmd::get(ctx, &key),
            ConfigAction::Set { key, value } => config_cmd::set(ctx, &key, &value),
            ConfigAction::List => config_cmd::list(ctx),
        })?,
        Command::Completion { shell } => done(completion::completion(shell))?,
    };

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Treat a handler without a negative outcome as a passing predicate.
fn done(result: Result<()>) -> Result<bool> {
    result.map(|()| true)
}
