//! completion command - shell completion scripts for the `circ` binary

use std::io;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Generator, shells};

use crate::cli::args::{Cli, Shell};

/// Write a completion script for the requested shell to stdout.
pub fn completion(shell: Shell) -> Result<()> {
    match shell {
        Shell::Bash => emit(shells::Bash),
        Shell::Zsh => emit(shells::Zsh),
        Shell::Fish => emit(shells::Fish),
        Shell::PowerShell => emit(shells::PowerShell),
    }
    Ok(())
}

fn emit(generator: impl Generator) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(generator, &mut cmd, name, &mut io::stdout());
}
