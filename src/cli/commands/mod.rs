//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Loads the list file through the [`Context`]
//! 2. Calls one library operation
//! 3. Saves the list if it changed, and formats the result
//!
//! Library errors are wrapped with `anyhow` context naming the operation.

mod adapters;
mod completion;
mod config_cmd;
mod container;
mod demo;
mod ordering;
mod stats;

// Re-export command functions for testing and direct invocation
pub use adapters::{dequeue, enqueue, pop, push};
pub use completion::completion;
pub use config_cmd::{get as config_get, list as config_list, set as config_set};
pub use container::{add, new, print, remove, update};
pub use demo::demo;
pub use ordering::{is_sorted, merge, sort, split};
pub use stats::stats;

use crate::cli::args::{Command, ConfigAction};
use crate::cli::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        // Container
        Command::New { kind } => container::new(ctx, kind.into()),
        Command::Add { index, value } => container::add(ctx, index, &value),
        Command::Remove { index } => container::remove(ctx, index),
        Command::Update { index, value } => container::update(ctx, index, &value),
        Command::Print => container::print(ctx),

        // Ordering
        Command::Sort { desc } => ordering::sort(ctx, !desc),
        Command::IsSorted { desc } => ordering::is_sorted(ctx, !desc),
        Command::Split {
            index,
            first,
            second,
        } => ordering::split(ctx, index, first, second),
        Command::Merge { other, out } => ordering::merge(ctx, other, out),

        // Statistics
        Command::Stats => stats::stats(ctx),

        // Adapters
        Command::Push { value } => adapters::push(ctx, &value),
        Command::Pop => adapters::pop(ctx),
        Command::Enqueue { value } => adapters::enqueue(ctx, &value),
        Command::Dequeue => adapters::dequeue(ctx),

        // Setup
        Command::Config { action } => match action {
            ConfigAction::Get { key } => config_cmd::get(ctx, &key),
            ConfigAction::Set { key, value } => config_cmd::set(ctx, &key, &value),
            ConfigAction::List => config_cmd::list(ctx),
        },
        Command::Completion { shell } => completion::completion(shell),
        Command::Demo => demo::demo(ctx),
    }
}
