//! Circulation commands - borrow, return, reserve

use crate::core::types::{BookId, MemberId};
use crate::service::{CopyDisposition, LendingError, LendingService, ReserveOutcome};
use crate::ui::output;
use crate::ui::Verbosity;

use super::{book_label, member_label};

/// Lend a book to a member.
pub fn borrow(
    service: &LendingService,
    member: MemberId,
    book: BookId,
    verbosity: Verbosity,
) -> Result<(), LendingError> {
    let record = service.borrow(member, book)?;
    output::print(
        format!(
            "Borrowed: {} for {} - due {}",
            book_label(service, book),
            member_label(service, member),
            record.due_on()
        ),
        verbosity,
    );
    Ok(())
}

/// Take a book back and report where the copy went.
pub fn return_book(
    service: &LendingService,
    member: MemberId,
    book: BookId,
    verbosity: Verbosity,
) -> Result<(), LendingError> {
    let outcome = service.return_book(member, book)?;

    if outcome.was_overdue {
        output::print("Note: this loan came back overdue.", verbosity);
    }
    match outcome.disposition {
        CopyDisposition::Shelved => {
            output::print("Returned. The copy is back on the shelf.", verbosity);
        }
        CopyDisposition::Transferred { member: next } => {
            output::print(
                format!(
                    "Returned. {} was next in line and now has it on loan.",
                    member_label(service, next)
                ),
                verbosity,
            );
        }
        CopyDisposition::HeldAtLimit { member: next } => {
            output::print(
                format!(
                    "Returned. {} was next in line but cannot take the loan; \
                     the copy is back on the shelf and their reservation was dropped.",
                    member_label(service, next)
                ),
                verbosity,
            );
        }
    }
    Ok(())
}

/// Queue a member for an unavailable book.
pub fn reserve(
    service: &LendingService,
    member: MemberId,
    book: BookId,
    verbosity: Verbosity,
) -> Result<(), LendingError> {
    match service.reserve(book, member)? {
        ReserveOutcome::NotNeeded => {
            output::print(
                "Copies are on the shelf - borrow it instead of reserving.",
                verbosity,
            );
        }
        ReserveOutcome::Queued { position } => {
            output::print(
                format!(
                    "Reserved: {} is position {} in the queue for {}.",
                    member_label(service, member),
                    position,
                    book_label(service, book)
                ),
                verbosity,
            );
        }
    }
    Ok(())
}
