//! completion command - Generate shell completion scripts for `tl`

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, shells};

use crate::cli::args::{Cli, Shell};

/// Write the completion script for `shell` to stdout.
pub fn completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let bin = cmd.get_name().to_string();
    let mut out = std::io::stdout();

    match shell {
        Shell::Bash => generate(shells::Bash, &mut cmd, &bin, &mut out),
        Shell::Zsh => generate(shells::Zsh, &mut cmd, &bin, &mut out),
        Shell::Fish => generate(shells::Fish, &mut cmd, &bin, &mut out),
        Shell::PowerShell => generate(shells::PowerShell, &mut cmd, &bin, &mut out),
    }
    Ok(())
}
