//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--file <path>` / `-f`: List file to operate on
//! - `--json`: Machine-readable output
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::types::Kind;

/// tl - bounded integer and text lists with stack/queue views
#[derive(Parser, Debug)]
#[command(name = "tl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// List file to operate on (defaults to the configured path)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    // ========== Container ==========
    /// Create an empty list file
    #[command(
        name = "new",
        after_help = "\
EXAMPLES:
    # Start an integer list at the default path
    tl new integer

    # Start a text list in a specific file
    tl -f names.txt new text"
    )]
    New {
        /// Element kind of the new list
        #[arg(value_enum)]
        kind: KindArg,
    },

    /// Insert a value before a position
    Add {
        /// Position to insert before (0 to length)
        index: usize,

        /// Value to insert
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Remove the value at a position
    Remove {
        /// Position to remove
        index: usize,
    },

    /// Replace the value at a position (text lists only)
    Update {
        /// Position to replace
        index: usize,

        /// Replacement value
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Show each position and value
    Print,

    // ========== Ordering ==========
    /// Sort the list in place
    Sort {
        /// Sort descending instead of ascending
        #[arg(long)]
        desc: bool,
    },

    /// Check whether the list is sorted
    #[command(name = "is-sorted")]
    IsSorted {
        /// Check for descending order instead of ascending
        #[arg(long)]
        desc: bool,
    },

    /// Split the list into two files at a position
    #[command(
        name = "split",
        long_about = "Split the list into two new files.\n\n\
            Values before INDEX go to FIRST, the rest to SECOND. Splitting at the \
            last position keeps every value in FIRST and leaves SECOND empty. The \
            source file is not modified."
    )]
    Split {
        /// Position where the second list starts
        index: usize,

        /// Output file for the first part
        first: PathBuf,

        /// Output file for the second part
        second: PathBuf,
    },

    /// Concatenate another list file onto this one into a new file
    #[command(
        name = "merge",
        long_about = "Concatenate this list and OTHER into a new file.\n\n\
            Both lists must have the same kind. If the result would exceed the \
            capacity, the first values up to the capacity are still written to \
            --out and the command then fails."
    )]
    Merge {
        /// List file to append
        other: PathBuf,

        /// Output file for the merged list
        #[arg(long)]
        out: PathBuf,
    },

    // ========== Statistics ==========
    /// Show count, average, max, min, mean and standard deviation
    Stats,

    // ========== Adapters ==========
    /// Push onto the list viewed as a stack (inserts at the front)
    Push {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Pop from the list viewed as a stack (takes the last value)
    Pop,

    /// Enqueue onto the list viewed as a queue (appends)
    Enqueue {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Dequeue from the list viewed as a queue (takes the first value)
    Dequeue,

    // ========== Setup ==========
    /// Get or set configuration values
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
INSTALLATION:
    # Bash
    tl completion bash > ~/.local/share/bash-completion/completions/tl

    # Zsh
    tl completion zsh > ~/.zfunc/_tl

    # Fish
    tl completion fish > ~/.config/fish/completions/tl.fish

    # PowerShell
    tl completion powershell >> $PROFILE"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Build and print a small mixed list
    Demo,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Value to set
        value: String,
    },
    /// List all config values
    List,
}

/// Element kinds a new list can be created with.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum KindArg {
    Integer,
    Text,
}

impl From<KindArg> for Kind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Integer => Kind::Integer,
            KindArg::Text => Kind::Text,
        }
    }
}

/// Supported shells for completion.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
