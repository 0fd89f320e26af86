//! Hierarchy commands - ancestry, ancestor, child, index

use anyhow::{Context as _, Result};
use serde::Serialize;

use crate::cli::Context;
use crate::core::input::Notation;
use crate::core::number::ArcNumber;
use crate::ui::output;

/// List every prefix of an identifier, root first.
pub fn ancestry(ctx: &Context, input: &str) -> Result<()> {
    let dot = ctx.resolve_dot(input)?;
    let prefixes: Vec<String> = dot.ancestry().map(|p| p.to_string()).collect();

    if ctx.json() {
        output::json(&prefixes)?;
    } else {
        for prefix in &prefixes {
            println!("{prefix}");
        }
    }
    Ok(())
}

/// Check whether `ancestor` is an ancestor of (or equal to) `descendant`.
///
/// Returns the answer so the caller can set the exit status.
pub fn ancestor(ctx: &Context, ancestor: &str, descendant: &str) -> Result<bool> {
    let upper = ctx.resolve_dot(ancestor)?;
    let lower = ctx.resolve_dot(descendant)?;
    let answer = upper.ancestor_of(&lower);
    output::debug(
        format!("{upper} ancestor of {lower}: {answer}"),
        ctx.verbosity,
    );

    if ctx.json() {
        output::json(&answer)?;
    } else {
        println!("{answer}");
    }
    Ok(answer)
}

#[derive(Debug, Serialize)]
struct Child {
    dot: String,
    asn: String,
}

/// Append one arc to an identifier.
///
/// Text output uses the notation the input was written in.
pub fn child(ctx: &Context, input: &str, arc: &str) -> Result<()> {
    let notation = Notation::detect(&ctx.expand(input)?);
    let parent = ctx.resolve(input)?;
    let child = parent
        .new_subordinate(arc)
        .with_context(|| format!("Invalid arc '{arc}'"))?;

    if ctx.json() {
        output::json(&Child {
            dot: child.dot_string(),
            asn: child.asn(),
        })?;
    } else if notation == Notation::Dot {
        println!("{}", child.dot());
    } else {
        println!("{child}");
    }
    Ok(())
}

/// Print the arc at `position`; negative positions count from the end.
pub fn index(ctx: &Context, input: &str, position: isize) -> Result<()> {
    let dot = ctx.resolve_dot(input)?;
    let arc: ArcNumber = dot
        .index(position)
        .with_context(|| format!("'{input}' has no arcs"))?;

    if ctx.json() {
        output::json(&arc)?;
    } else {
        println!("{arc}");
    }
    Ok(())
}
