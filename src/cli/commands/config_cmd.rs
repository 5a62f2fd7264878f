//! config command - Get, set, and list configuration values

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::config::schema::KEYS;
use crate::core::config::Config;
use crate::ui::output;

/// Print one config value, or nothing if unset.
pub fn get(_ctx: &Context, key: &str) -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    if let Some(value) = config.global.get(key)? {
        println!("{}", value);
    }
    Ok(())
}

/// Set one config value and write the config file.
pub fn set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let mut global = Config::load()
        .context("Failed to load configuration")?
        .global;
    global.set(key, value)?;
    let path = Config::write(&global).context("Failed to write configuration")?;
    output::print(
        format!("set {} = {} in {}", key, value, path.display()),
        ctx.verbosity,
    );
    Ok(())
}

/// Print every config key with its effective value.
pub fn list(ctx: &Context) -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;

    if ctx.json {
        output::json(&config.global)?;
        return Ok(());
    }

    let mut lines = Vec::with_capacity(KEYS.len());
    for key in KEYS {
        let value = config.global.get(key)?.unwrap_or_else(|| "(unset)".to_string());
        lines.push(format!("{} = {}", key, value));
    }
    println!("{}", output::format_list(&lines, ""));

    match config.loaded_from() {
        Some(path) => output::debug(format!("from {}", path.display()), ctx.verbosity),
        None => output::debug("no config file found, using defaults", ctx.verbosity),
    }
    Ok(())
}
