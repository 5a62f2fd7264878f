//! demo command - Build and print a small list without touching any file

use anyhow::Result;

use crate::cli::Context;
use crate::core::list::List;
use crate::ui::output;

/// Insert `"a"` and `"b"` at the front of an unspecified list, append
/// `"c"`, and print the result.
pub fn demo(ctx: &Context) -> Result<()> {
    let mut list = List::new();
    list.add(0, "a")?;
    list.add(0, "b")?;
    list.add(2, "c")?;

    if ctx.json {
        output::json(&list)?;
    } else {
        list.print();
    }
    Ok(())
}
