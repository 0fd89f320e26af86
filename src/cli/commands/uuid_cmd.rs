//! uuid command - Map a UUID into the joint-iso-itu-t(2) uuid(25) arc

use anyhow::{Context as _, Result};
use serde::Serialize;
use uuid::Uuid;

use crate::cli::Context;
use crate::core::oid::ObjectIdentifier;
use crate::ui::output;

#[derive(Debug, Serialize)]
struct UuidOid {
    uuid: String,
    dot: String,
    asn: String,
}

/// Print the OID for a UUID.
pub fn uuid(ctx: &Context, text: &str) -> Result<()> {
    let id = Uuid::parse_str(text.trim()).with_context(|| format!("Invalid UUID '{text}'"))?;
    let oid = ObjectIdentifier::from_uuid(id);

    if ctx.json() {
        output::json(&UuidOid {
            uuid: id.hyphenated().to_string(),
            dot: oid.dot_string(),
            asn: oid.asn(),
        })?;
    } else {
        println!("{}", oid.dot());
    }
    Ok(())
}
