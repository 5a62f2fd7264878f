//! ordering commands - Sort, check order, split and merge list files

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use serde_json::json;

use crate::cli::Context;
use crate::ui::output;

/// Sort the list file in place.
pub fn sort(ctx: &Context, ascending: bool) -> Result<()> {
    let mut list = ctx.load()?;
    list.sort(ascending).context("Failed to sort list")?;
    ctx.save(&list)?;
    output::print(
        format!(
            "sorted {} element(s) {}",
            list.len(),
            direction(ascending)
        ),
        ctx.verbosity,
    );
    Ok(())
}

/// Report whether the list file is sorted.
pub fn is_sorted(ctx: &Context, ascending: bool) -> Result<()> {
    let list = ctx.load()?;
    let sorted = list
        .is_sorted(ascending)
        .context("Failed to check sort order")?;
    if ctx.json {
        output::json(&json!({ "sorted": sorted, "direction": direction(ascending) }))?;
    } else {
        println!("{}", sorted);
    }
    Ok(())
}

/// Split the list file at `index` into two new files.
pub fn split(ctx: &Context, index: usize, first: PathBuf, second: PathBuf) -> Result<()> {
    let list = ctx.load()?;
    let (head, tail) = list
        .split(index)
        .with_context(|| format!("Failed to split at {}", index))?;

    let first = ctx.file_at(first);
    let second = ctx.file_at(second);
    ctx.save_to(&first, &head)?;
    ctx.save_to(&second, &tail)?;

    output::print(
        format!(
            "{} element(s) -> {}, {} element(s) -> {}",
            head.len(),
            first.path().display(),
            tail.len(),
            second.path().display()
        ),
        ctx.verbosity,
    );
    Ok(())
}

/// Concatenate the list file and `other` into `out`.
///
/// On overflow the truncated result is still written before the command
/// fails.
pub fn merge(ctx: &Context, other: PathBuf, out: PathBuf) -> Result<()> {
    let list = ctx.load()?;
    let other_file = ctx.file_at(other);
    let other = other_file
        .read()
        .with_context(|| format!("Failed to load list from {}", other_file.path().display()))?;
    let out = ctx.file_at(out);

    match list.merge(&other) {
        Ok(merged) => {
            ctx.save_to(&out, &merged)?;
            output::print(
                format!(
                    "merged {} element(s) into {}",
                    merged.len(),
                    out.path().display()
                ),
                ctx.verbosity,
            );
            Ok(())
        }
        Err(mut err) => {
            if let Some(partial) = err.partial.take() {
                ctx.save_to(&out, &partial)?;
                output::warn(
                    format!(
                        "wrote the first {} element(s) to {}",
                        partial.len(),
                        out.path().display()
                    ),
                    ctx.verbosity,
                );
            }
            Err(anyhow::Error::new(err).context("Failed to merge lists"))
        }
    }
}

fn direction(ascending: bool) -> &'static str {
    if ascending {
        "ascending"
    } else {
        "descending"
    }
}
