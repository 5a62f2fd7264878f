//! stats command - Show summary statistics for a list file

use anyhow::Result;

use crate::cli::Context;
use crate::ui::output;

/// Show every statistic the list kind supports.
///
/// Statistics that are undefined for the list (wrong kind, or empty list)
/// are shown as `-` in text mode and `null` in JSON mode.
pub fn stats(ctx: &Context) -> Result<()> {
    let list = ctx.load()?;
    let summary = list.stats().summary();
    if ctx.json {
        output::json(&summary)?;
    } else {
        println!("{}", summary);
    }
    Ok(())
}
