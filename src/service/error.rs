//! service::error
//!
//! The lending error taxonomy.
//!
//! Every variant except [`LendingError::Store`] is an expected, recoverable
//! condition: the caller asked for something the current state does not
//! allow, and the answer is a value, not a fault. `Store` wraps a
//! repository-layer failure and is the only fatal case; the service
//! propagates it unchanged and never retries.

use thiserror::Error;

use crate::core::types::{BookId, MemberId};
use crate::store::StoreError;

/// Why a lending operation was refused.
#[derive(Debug, Error)]
pub enum LendingError {
    #[error("member {0} not found")]
    MemberNotFound(MemberId),

    #[error("book {0} not found")]
    BookNotFound(BookId),

    #[error("member {member} already has book {book} on loan")]
    DuplicateLoan { member: MemberId, book: BookId },

    #[error("member {member} is at their borrow limit of {limit}")]
    LimitReached { member: MemberId, limit: u32 },

    #[error("no copies of book {0} are available")]
    Unavailable(BookId),

    #[error("member {member} already holds a reservation for book {book}")]
    DuplicateReservation { member: MemberId, book: BookId },

    #[error("member {member} has no active loan for book {book}")]
    NotBorrowed { member: MemberId, book: BookId },

    #[error("book {0} has copies on loan")]
    BookOnLoan(BookId),

    #[error("member {0} has active loans")]
    MemberHasLoans(MemberId),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl LendingError {
    /// Whether this error is a storage failure rather than a refused
    /// operation. Fatal errors should abort the caller; the rest are
    /// ordinary answers.
    pub fn is_fatal(&self) -> bool {
        matches!(self, LendingError::Store(_))
    }
}
