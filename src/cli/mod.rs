//! cli
//!
//! Command-line interface layer for Circulate.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Build the service from configuration and run the session
//! - Does NOT mutate entities directly
//!
//! # Architecture
//!
//! The CLI layer is thin. Top-level arguments are parsed via clap; the
//! interactive session re-parses each input line with a clap multicall
//! parser and dispatches to command handlers. All state changes flow through
//! the [`crate::service::LendingService`].

pub mod args;
pub mod commands;
pub mod shell;

pub use args::{Cli, Command, SessionCli, SessionCommand, Shell};

use anyhow::Result;

use crate::core::config::Config;
use crate::service::{LendingPolicy, LendingService};
use crate::ui::output;
use crate::ui::Verbosity;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);

    match cli.command {
        Some(Command::Completion { shell }) => commands::completion(shell),
        Some(Command::Session) | None => session(&cli, verbosity),
    }
}

/// Load configuration, build the service, and run the interactive session.
fn session(cli: &Cli, verbosity: Verbosity) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(path) = config.loaded_from() {
        output::debug(format!("config loaded from {}", path.display()), verbosity);
    }

    let policy = LendingPolicy::from_config(&config)?;
    let service = LendingService::in_memory(policy);

    if cli.seed {
        commands::seed_demo(&service)?;
        output::print("Seeded demonstration catalog.", verbosity);
    }

    shell::run_session(&service, verbosity)
}
