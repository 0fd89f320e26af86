//! validate command - Check identifiers for validity

use anyhow::Result;
use serde::Serialize;

use crate::cli::Context;
use crate::ui::output;

/// Outcome for one input.
#[derive(Debug, Serialize)]
struct Report {
    input: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    asn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn check(ctx: &Context, input: &str) -> Report {
    match ctx.resolve(input) {
        Ok(id) => Report {
            input: input.to_string(),
            valid: true,
            asn: Some(id.asn()),
            error: None,
        },
        Err(err) => Report {
            input: input.to_string(),
            valid: false,
            asn: None,
            error: Some(err.root_cause().to_string()),
        },
    }
}

/// Validate each input, printing one line per input.
///
/// Returns true if every input is valid.
pub fn validate(ctx: &Context, inputs: &[String]) -> Result<bool> {
    let reports: Vec<Report> = inputs.iter().map(|input| check(ctx, input)).collect();
    let failures = reports.iter().filter(|r| !r.valid).count();
    output::debug(
        format!("{} of {} inputs invalid", failures, reports.len()),
        ctx.verbosity,
    );

    if ctx.json() {
        output::json(&reports)?;
    } else {
        for report in &reports {
            match &report.error {
                None => println!("ok       {}", report.input),
                Some(error) => println!("invalid  {}: {}", report.input, error),
            }
        }
    }
    Ok(failures == 0)
}
