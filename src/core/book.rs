//! core::book
//!
//! The Book entity: copy accounting and the reservation queue.
//!
//! # Invariants
//!
//! - `0 <= available_copies <= total_copies`, so
//!   `available_copies + copies_on_loan == total_copies` at all times
//! - the reservation queue is FIFO and holds no duplicate member
//!
//! Both are enforced by the mutating methods here; the service layer composes
//! them but cannot violate them. The queue holds member *identifiers*, not
//! member data: entries are resolved through the member store when a copy
//! frees up, so a member deleted while queued is simply skipped.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::types::{BookId, MemberId};

/// Input for creating a book. The store issues the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub genre: Option<String>,
    pub copies: u32,
}

/// A title in the catalog.
///
/// Created once via the book store; afterwards only `available_copies` and
/// the reservation queue change, and only through the lending service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    genre: Option<String>,
    total_copies: u32,
    available_copies: u32,
    reservations: VecDeque<MemberId>,
}

impl Book {
    /// Construct a book with a store-issued id. All copies start available.
    pub fn new(id: BookId, draft: NewBook) -> Self {
        Self {
            id,
            title: draft.title,
            author: draft.author,
            genre: draft.genre,
            total_copies: draft.copies,
            available_copies: draft.copies,
            reservations: VecDeque::new(),
        }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref()
    }

    pub fn total_copies(&self) -> u32 {
        self.total_copies
    }

    pub fn available_copies(&self) -> u32 {
        self.available_copies
    }

    /// Copies currently lent out.
    pub fn copies_on_loan(&self) -> u32 {
        self.total_copies - self.available_copies
    }

    /// Whether at least one copy is on the shelf.
    pub fn is_available(&self) -> bool {
        self.available_copies > 0
    }

    /// Take one copy off the shelf for a loan.
    ///
    /// Returns `false` (and changes nothing) when no copy is available.
    pub fn take_copy(&mut self) -> bool {
        if self.available_copies == 0 {
            return false;
        }
        self.available_copies -= 1;
        true
    }

    /// Put one returned copy back on the shelf.
    ///
    /// Returns `false` (and changes nothing) when all copies are already
    /// accounted for.
    pub fn put_copy(&mut self) -> bool {
        if self.available_copies == self.total_copies {
            return false;
        }
        self.available_copies += 1;
        true
    }

    /// Append a member to the reservation queue.
    ///
    /// Returns `false` when the member is already queued.
    pub fn enqueue_reservation(&mut self, member: MemberId) -> bool {
        if self.reservations.contains(&member) {
            return false;
        }
        self.reservations.push_back(member);
        true
    }

    /// Pop the oldest reservation, if any.
    pub fn pop_reservation(&mut self) -> Option<MemberId> {
        self.reservations.pop_front()
    }

    /// 1-based position of a member in the queue.
    pub fn reservation_position(&self, member: MemberId) -> Option<usize> {
        self.reservations.iter().position(|m| *m == member).map(|i| i + 1)
    }

    /// Number of members waiting for this title.
    pub fn reservation_count(&self) -> usize {
        self.reservations.len()
    }

    /// Queued members, oldest first.
    pub fn reservations(&self) -> impl Iterator<Item = MemberId> + '_ {
        self.reservations.iter().copied()
    }

    /// Case-insensitive substring match against title or author.
    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.title.to_lowercase().contains(&q) || self.author.to_lowercase().contains(&q)
    }
}
