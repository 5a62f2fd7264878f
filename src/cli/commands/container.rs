//! container commands - Create, edit and print a list file

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::list::List;
use crate::core::types::Kind;
use crate::ui::output;

/// Create an empty list of `kind` at the list file.
pub fn new(ctx: &Context, kind: Kind) -> Result<()> {
    ctx.save_to(&ctx.list_file(), &List::with_kind(kind))?;
    output::print(
        format!("created empty {} list at {}", kind, ctx.file.display()),
        ctx.verbosity,
    );
    Ok(())
}

/// Insert `raw` before `index`.
pub fn add(ctx: &Context, index: usize, raw: &str) -> Result<()> {
    let mut list = ctx.load()?;
    let value = list.kind().parse_element(raw)?;
    list.add(index, value.clone())
        .with_context(|| format!("Failed to add '{}' at {}", value, index))?;
    ctx.save(&list)?;
    output::print(format!("added {} at {}", value, index), ctx.verbosity);
    Ok(())
}

/// Remove the value at `index`.
pub fn remove(ctx: &Context, index: usize) -> Result<()> {
    let mut list = ctx.load()?;
    let removed = list
        .remove(index)
        .with_context(|| format!("Failed to remove position {}", index))?;
    ctx.save(&list)?;
    output::print(format!("removed {} from {}", removed, index), ctx.verbosity);
    Ok(())
}

/// Replace the value at `index` of a text list.
pub fn update(ctx: &Context, index: usize, raw: &str) -> Result<()> {
    let mut list = ctx.load()?;
    let value = raw.trim();
    list.update(index, value)
        .with_context(|| format!("Failed to update position {}", index))?;
    ctx.save(&list)?;
    output::print(format!("updated {} to {}", index, value), ctx.verbosity);
    Ok(())
}

/// Show every position and value.
pub fn print(ctx: &Context) -> Result<()> {
    let list = ctx.load()?;
    if ctx.json {
        output::json(&list)?;
    } else {
        list.print();
    }
    Ok(())
}
