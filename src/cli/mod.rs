//! cli
//!
//! Command-line interface layer for `tl`.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Merge flags with the loaded configuration
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. Every command loads the list file, applies one
//! library operation from [`crate::core`], and writes the file back if the
//! operation mutated it.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::core::config::Config;
use crate::core::list::List;
use crate::core::persist::ListFile;
use crate::ui::output::{self, Verbosity};

/// Settings shared by every command handler.
#[derive(Debug, Clone)]
pub struct Context {
    /// The list file commands operate on.
    pub file: PathBuf,
    pub verbosity: Verbosity,
    pub json: bool,
}

impl Context {
    /// Combine CLI flags with configuration. Flags win.
    pub fn new(cli: &Cli, config: &Config) -> Self {
        Self {
            file: cli.file.clone().unwrap_or_else(|| config.default_path()),
            verbosity: Verbosity::from_flags(cli.quiet || config.quiet(), cli.debug),
            json: cli.json || config.json(),
        }
    }

    /// The list file, carrying this context's verbosity.
    pub fn list_file(&self) -> ListFile {
        self.file_at(self.file.clone())
    }

    /// Another list file, carrying this context's verbosity.
    pub fn file_at(&self, path: PathBuf) -> ListFile {
        ListFile::new(path).with_verbosity(self.verbosity)
    }

    /// Load the list file.
    pub fn load(&self) -> Result<List> {
        let file = self.list_file();
        file.read()
            .with_context(|| format!("Failed to load list from {}", file.path().display()))
    }

    /// Write `list` back to the list file it was loaded from.
    pub fn save(&self, list: &List) -> Result<()> {
        let file = self.list_file();
        let outcome = file
            .rewrite(list)
            .with_context(|| format!("Failed to write list to {}", file.path().display()))?;
        self.saved(list, &outcome.path);
        Ok(())
    }

    /// Write `list` to `file`, warning if that replaces an existing file.
    pub fn save_to(&self, file: &ListFile, list: &List) -> Result<()> {
        let outcome = file
            .write(list)
            .with_context(|| format!("Failed to write list to {}", file.path().display()))?;
        self.saved(list, &outcome.path);
        Ok(())
    }

    fn saved(&self, list: &List, path: &Path) {
        output::debug(
            format!("saved {} element(s) to {}", list.len(), path.display()),
            self.verbosity,
        );
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let config = Config::load().context("Failed to load configuration")?;
    let ctx = Context::new(&cli, &config);

    if let Some(path) = config.loaded_from() {
        output::debug(format!("config loaded from {}", path.display()), ctx.verbosity);
    }
    output::debug(format!("list file: {}", ctx.file.display()), ctx.verbosity);

    // Dispatch to command handler
    commands::dispatch(cli.command, &ctx)
}
