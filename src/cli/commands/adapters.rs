//! adapter commands - Stack and queue operations on a list file

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::types::Element;
use crate::ui::output;

/// Push `raw` onto the list viewed as a stack.
pub fn push(ctx: &Context, raw: &str) -> Result<()> {
    let mut list = ctx.load()?;
    let value = list.kind().parse_element(raw)?;
    list.as_stack()
        .push(value.clone())
        .with_context(|| format!("Failed to push '{}'", value))?;
    ctx.save(&list)?;
    output::print(format!("pushed {}", value), ctx.verbosity);
    Ok(())
}

/// Pop from the list viewed as a stack and print the value.
pub fn pop(ctx: &Context) -> Result<()> {
    let mut list = ctx.load()?;
    let value = list.as_stack().pop().context("Failed to pop")?;
    ctx.save(&list)?;
    show(ctx, &value)
}

/// Enqueue `raw` onto the list viewed as a queue.
pub fn enqueue(ctx: &Context, raw: &str) -> Result<()> {
    let mut list = ctx.load()?;
    let value = list.kind().parse_element(raw)?;
    list.as_queue()
        .enqueue(value.clone())
        .with_context(|| format!("Failed to enqueue '{}'", value))?;
    ctx.save(&list)?;
    output::print(format!("enqueued {}", value), ctx.verbosity);
    Ok(())
}

/// Dequeue from the list viewed as a queue and print the value.
pub fn dequeue(ctx: &Context) -> Result<()> {
    let mut list = ctx.load()?;
    let value = list.as_queue().dequeue().context("Failed to dequeue")?;
    ctx.save(&list)?;
    show(ctx, &value)
}

fn show(ctx: &Context, value: &Element) -> Result<()> {
    if ctx.json {
        output::json(value)?;
    } else {
        println!("{}", value);
    }
    Ok(())
}
