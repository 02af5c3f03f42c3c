//! cli::shell
//!
//! The interactive session loop.
//!
//! Reads one command per line from stdin, tokenizes it (double quotes group
//! words, backslash escapes inside quotes), parses the tokens with the
//! multicall [`SessionCli`] parser, and dispatches to the command handlers.
//! Expected lending failures print as `error:` lines and the session keeps
//! going; only storage failures abort it.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use crate::cli::args::SessionCli;
use crate::cli::commands::{self, SessionFlow};
use crate::service::LendingService;
use crate::ui::output;
use crate::ui::Verbosity;

/// Run the session until `quit` or end of input.
pub fn run_session(service: &LendingService, verbosity: Verbosity) -> Result<()> {
    output::print("Circulate - library circulation desk", verbosity);
    output::print("Type 'help' for commands, 'quit' to leave.", verbosity);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if verbosity != Verbosity::Quiet {
            print!("circ> ");
            io::stdout().flush()?;
        }

        let Some(line) = lines.next() else { break };
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let tokens = match split_line(line) {
            Ok(tokens) => tokens,
            Err(message) => {
                output::error(message);
                continue;
            }
        };

        let parsed = match SessionCli::try_parse_from(&tokens) {
            Ok(parsed) => parsed,
            Err(err) => {
                // clap routes help/usage to the right stream itself.
                let _ = err.print();
                continue;
            }
        };

        match commands::dispatch(service, parsed.command, verbosity) {
            Ok(SessionFlow::Continue) => {}
            Ok(SessionFlow::Quit) => break,
            Err(err) if err.is_fatal() => return Err(err.into()),
            Err(err) => output::error(err),
        }
    }

    output::print("Goodbye.", verbosity);
    Ok(())
}

/// Split a session line into tokens.
///
/// Whitespace separates tokens; double quotes group words; backslash escapes
/// `"` and `\` inside quotes.
pub fn split_line(line: &str) -> Result<Vec<String>, String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut quoted = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                quoted = true;
            }
            '\\' if in_quotes => match chars.next() {
                Some(escaped @ ('"' | '\\')) => current.push(escaped),
                Some(other) => {
                    current.push('\\');
                    current.push(other);
                }
                None => return Err("trailing backslash".to_string()),
            },
            c if c.is_whitespace() && !in_quotes => {
                if quoted || !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                    quoted = false;
                }
            }
            c => current.push(c),
        }
    }

    if in_quotes {
        return Err("unterminated quote".to_string());
    }
    if quoted || !current.is_empty() {
        tokens.push(current);
    }
    Ok(tokens)
}
