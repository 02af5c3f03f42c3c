//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Load configuration from a specific file
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//! - `--seed`: Start with a demonstration catalog
//!
//! # Session Commands
//!
//! The interactive session parses each input line with [`SessionCli`], a
//! multicall parser: the first word of the line is the command.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::types::MembershipTier;

/// Circulate - library circulation desk
#[derive(Parser, Debug)]
#[command(name = "circ")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Load configuration from this file instead of the default locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Start the session with a small demonstration catalog
    #[arg(long, global = true)]
    pub seed: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
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
    /// Run the interactive circulation session (the default)
    #[command(
        name = "session",
        long_about = "Run the interactive circulation session.\n\n\
            The session reads one command per line and applies it to an \
            in-memory library: register books and members, lend and return \
            copies, queue reservations, and ask for recommendations. State \
            lives for the duration of the session.",
        after_help = "\
SESSION COMMANDS:
    add-book <title> <author> [--genre G] [--copies N]
    add-member <name> [--tier regular|premium] [--limit N]
    remove-book <book>        remove-member <member>
    books [--available|--unavailable]
    members
    search <query> [--field any|title|author]
    borrow <member> <book>    return <member> <book>
    reserve <member> <book>   recommend <member>
    overdue                   history <member> [--json]
    help                      quit

EXAMPLE:
    circ --seed
    circ> borrow 1 3
    circ> reserve 2 3
    circ> return 1 3"
    )]
    Session,

    /// Generate shell completion scripts
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Shells supported by the completion command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Which book field a search matches against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SearchField {
    /// Title or author
    #[default]
    Any,
    /// Title only
    Title,
    /// Author only
    Author,
}

fn parse_tier(s: &str) -> Result<MembershipTier, String> {
    s.parse().map_err(|e: crate::core::types::TypeError| e.to_string())
}

/// One line of session input.
#[derive(Parser, Debug)]
#[command(name = "circ-session", multicall = true)]
pub struct SessionCli {
    #[command(subcommand)]
    pub command: SessionCommand,
}

/// Commands accepted inside the session.
#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Add a book to the catalog
    AddBook {
        /// Book title (quote multi-word titles)
        title: String,
        /// Author name
        author: String,
        /// Genre label used by recommendations
        #[arg(long)]
        genre: Option<String>,
        /// Number of copies the library owns
        #[arg(long, default_value_t = 1)]
        copies: u32,
    },

    /// Register a library member
    AddMember {
        /// Member name
        name: String,
        /// Membership tier (sets the default borrow limit)
        #[arg(long, value_parser = parse_tier, default_value = "regular")]
        tier: MembershipTier,
        /// Borrow limit override
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Remove a book; refused while copies are on loan
    RemoveBook {
        /// Book id
        book: u64,
    },

    /// Remove a member; refused while they hold loans
    RemoveMember {
        /// Member id
        member: u64,
    },

    /// List the catalog
    Books {
        /// Only books with copies on the shelf
        #[arg(long, conflicts_with = "unavailable")]
        available: bool,

        /// Only books with no copies on the shelf
        #[arg(long)]
        unavailable: bool,
    },

    /// List the member roster
    Members,

    /// Search books by title and/or author substring
    Search {
        /// Search text (case-insensitive)
        query: String,
        /// Field to match against
        #[arg(long, value_enum, default_value_t = SearchField::Any)]
        field: SearchField,
    },

    /// Lend a book to a member
    Borrow {
        /// Member id
        member: u64,
        /// Book id
        book: u64,
    },

    /// Take a book back from a member
    Return {
        /// Member id
        member: u64,
        /// Book id
        book: u64,
    },

    /// Queue a member for a book with no copies available
    Reserve {
        /// Member id
        member: u64,
        /// Book id
        book: u64,
    },

    /// Rank available books for a member
    Recommend {
        /// Member id
        member: u64,
    },

    /// List members with overdue loans
    Overdue,

    /// Show a member's borrowing history
    History {
        /// Member id
        member: u64,
        /// Emit history as JSON
        #[arg(long)]
        json: bool,
    },

    /// End the session
    #[command(alias = "exit")]
    Quit,
}
