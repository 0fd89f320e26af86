//! show, dot and asn commands - Display an identifier's notations

use anyhow::{bail, Result};
use serde::Serialize;

use crate::cli::Context;
use crate::core::oid::ObjectIdentifier;
use crate::ui::output;

/// Every view of one identifier.
#[derive(Debug, Serialize)]
struct Summary {
    length: usize,
    dot: Option<String>,
    asn: String,
    root: String,
    parent: Option<String>,
    leaf: String,
}

impl Summary {
    fn of(id: &ObjectIdentifier) -> Self {
        let dot = id.dot();
        Self {
            length: id.len(),
            dot: dot.valid().then(|| dot.to_string()),
            asn: id.asn(),
            root: id.root().to_string(),
            parent: (id.len() > 1).then(|| id.parent().to_string()),
            leaf: id.leaf().to_string(),
        }
    }

    fn rows(&self) -> Vec<(&'static str, String)> {
        let none = || "(none)".to_string();
        vec![
            ("length", self.length.to_string()),
            ("dot", self.dot.clone().unwrap_or_else(none)),
            ("asn", self.asn.clone()),
            ("root", self.root.clone()),
            ("parent", self.parent.clone().unwrap_or_else(none)),
            ("leaf", self.leaf.clone()),
        ]
    }
}

/// Show every view of an identifier.
pub fn show(ctx: &Context, input: &str) -> Result<()> {
    let id = ctx.resolve(input)?;
    let summary = Summary::of(&id);

    if ctx.json() {
        output::json(&summary)?;
    } else {
        println!("{}", output::format_rows(&summary.rows()));
    }
    Ok(())
}

/// Print an identifier in dot notation.
pub fn dot(ctx: &Context, input: &str) -> Result<()> {
    let id = ctx.resolve(input)?;
    let dot = id.dot();
    if !dot.valid() {
        bail!("'{input}' has a single arc and no dot notation form");
    }

    if ctx.json() {
        output::json(&dot)?;
    } else {
        println!("{dot}");
    }
    Ok(())
}

/// Print an identifier in bracket notation.
pub fn asn(ctx: &Context, input: &str) -> Result<()> {
    let id = ctx.resolve(input)?;

    if ctx.json() {
        output::json(&id)?;
    } else {
        println!("{id}");
    }
    Ok(())
}
