//! compare command - Order two arc numbers

use std::cmp::Ordering;

use anyhow::{Context as _, Result};
use serde::Serialize;

use crate::cli::Context;
use crate::core::number::ArcNumber;
use crate::ui::output;

#[derive(Debug, Serialize)]
struct Comparison {
    left: ArcNumber,
    right: ArcNumber,
    ordering: &'static str,
}

fn symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}

fn operand(text: &str) -> Result<ArcNumber> {
    ArcNumber::parse(text).with_context(|| format!("Invalid arc number '{text}'"))
}

/// Compare two arc numbers and print `<`, `=` or `>`.
pub fn compare(ctx: &Context, left: &str, right: &str) -> Result<()> {
    let left = operand(left)?;
    let right = operand(right)?;
    let ordering = symbol(left.cmp(&right));

    if ctx.json() {
        output::json(&Comparison {
            left,
            right,
            ordering,
        })?;
    } else {
        println!("{ordering}");
    }
    Ok(())
}
