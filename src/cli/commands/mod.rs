//! cli::commands
//!
//! Session command dispatch and handlers.
//!
//! # Architecture
//!
//! Each handler:
//! 1. Converts raw CLI ids into domain ids
//! 2. Calls the lending service
//! 3. Formats and displays the outcome
//!
//! Handlers never mutate entities directly; everything goes through the
//! service. A handler returning `Err` hands the error back to the session
//! loop, which prints expected failures and aborts only on storage errors.

mod books;
mod completion;
mod lending;
mod members;
mod recommend;
mod seed;

pub use completion::completion;
pub use seed::seed_demo;

use crate::cli::args::SessionCommand;
use crate::core::types::{BookId, MemberId};
use crate::service::{LendingError, LendingService};
use crate::ui::Verbosity;

/// Whether the session continues after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionFlow {
    Continue,
    Quit,
}

/// Dispatch a session command to its handler.
pub fn dispatch(
    service: &LendingService,
    command: SessionCommand,
    verbosity: Verbosity,
) -> Result<SessionFlow, LendingError> {
    match command {
        SessionCommand::AddBook {
            title,
            author,
            genre,
            copies,
        } => books::add_book(service, title, author, genre, copies, verbosity)?,
        SessionCommand::RemoveBook { book } => {
            books::remove_book(service, BookId::new(book), verbosity)?
        }
        SessionCommand::Books {
            available,
            unavailable,
        } => books::list(service, available, unavailable, verbosity)?,
        SessionCommand::Search { query, field } => {
            books::search(service, &query, field, verbosity)?
        }

        SessionCommand::AddMember { name, tier, limit } => {
            members::add_member(service, name, tier, limit, verbosity)?
        }
        SessionCommand::RemoveMember { member } => {
            members::remove_member(service, MemberId::new(member), verbosity)?
        }
        SessionCommand::Members => members::list(service, verbosity)?,
        SessionCommand::History { member, json } => {
            members::history(service, MemberId::new(member), json, verbosity)?
        }
        SessionCommand::Overdue => members::overdue(service, verbosity)?,

        SessionCommand::Borrow { member, book } => {
            lending::borrow(service, MemberId::new(member), BookId::new(book), verbosity)?
        }
        SessionCommand::Return { member, book } => {
            lending::return_book(service, MemberId::new(member), BookId::new(book), verbosity)?
        }
        SessionCommand::Reserve { member, book } => {
            lending::reserve(service, MemberId::new(member), BookId::new(book), verbosity)?
        }

        SessionCommand::Recommend { member } => {
            recommend::recommend(service, MemberId::new(member), verbosity)?
        }

        SessionCommand::Quit => return Ok(SessionFlow::Quit),
    }
    Ok(SessionFlow::Continue)
}

/// Human label for a book: its title, or `book #id` if it cannot be loaded.
pub(crate) fn book_label(service: &LendingService, id: BookId) -> String {
    service
        .book(id)
        .map(|b| b.title().to_string())
        .unwrap_or_else(|_| format!("book #{}", id))
}

/// Human label for a member: `Name (#id)`, or `member #id` if unloadable.
pub(crate) fn member_label(service: &LendingService, id: MemberId) -> String {
    service
        .member(id)
        .map(|m| format!("{} (#{})", m.name(), m.id()))
        .unwrap_or_else(|_| format!("member #{}", id))
}
