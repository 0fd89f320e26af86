//! config command - Get, set, or list configuration values

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::config::Config;
use crate::ui::output;

/// The file `config set` writes to: `--config`, else the file that was
/// loaded, else the canonical location.
fn target(ctx: &Context) -> Result<PathBuf> {
    if let Some(path) = &ctx.config_path {
        return Ok(path.clone());
    }
    if let Some(path) = ctx.config.loaded_from() {
        return Ok(path.to_path_buf());
    }
    Config::default_path().context("Failed to locate config file")
}

/// Get a configuration value.
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    let value = ctx.config.settings.get(key)?;

    if ctx.json() {
        output::json(&value)?;
    } else if let Some(value) = value {
        println!("{}", value);
    }
    // Key exists but has no value - exit silently
    Ok(())
}

/// Set a configuration value.
pub fn set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let path = target(ctx)?;
    let mut settings = ctx.config.settings.clone();

    if let Some(old) = settings.get(key)? {
        if old != value {
            output::warn(format!("replacing {} = {}", key, old), ctx.verbosity);
        }
    }
    settings
        .set(key, value)
        .with_context(|| format!("Invalid value for {}", key))?;

    Config::write(&path, &settings).context("Failed to write config")?;
    output::debug(format!("wrote {}", path.display()), ctx.verbosity);
    output::print(format!("Set {} = {}", key, value), ctx.verbosity);

    Ok(())
}

/// List all configuration values.
pub fn list(ctx: &Context) -> Result<()> {
    let entries = ctx.config.settings.entries();

    if ctx.json() {
        let map: BTreeMap<String, String> = entries.into_iter().collect();
        output::json(&map)?;
        return Ok(());
    }

    match ctx.config.loaded_from() {
        Some(path) => println!("# Configuration ({})", path.display()),
        None => println!("# Configuration (defaults)"),
    }
    for (key, value) in &entries {
        println!("{} = {}", key, value);
    }
    if entries.is_empty() {
        println!("format = {} (default)", ctx.config.format());
    }

    Ok(())
}
