//! core::member
//!
//! The Member entity: active loans, the borrow limit, and borrowing history.
//!
//! # Invariants
//!
//! - the number of active loans never exceeds the borrow limit
//! - a member holds at most one active loan per book id
//!
//! [`Member::add_loan`] is the single doorway onto the loan list and rejects
//! anything that would break either invariant; duplicate loans are reported
//! before the limit, matching the precondition order of the borrow
//! operation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::loan::{BorrowRecord, LoanEvent};
use super::types::{BookId, BorrowLimit, MemberId, MembershipTier};

/// Input for registering a member. The store issues the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub name: String,
    pub tier: MembershipTier,
    pub borrow_limit: BorrowLimit,
}

/// Why a loan could not be added to a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanRefusal {
    /// The member already holds an active loan for this book.
    AlreadyBorrowed,
    /// The member is at their borrow limit.
    AtLimit,
}

/// A registered library member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    id: MemberId,
    name: String,
    tier: MembershipTier,
    borrow_limit: BorrowLimit,
    loans: Vec<BorrowRecord>,
    history: Vec<LoanEvent>,
}

impl Member {
    /// Construct a member with a store-issued id and no loans.
    pub fn new(id: MemberId, draft: NewMember) -> Self {
        Self {
            id,
            name: draft.name,
            tier: draft.tier,
            borrow_limit: draft.borrow_limit,
            loans: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn id(&self) -> MemberId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tier(&self) -> MembershipTier {
        self.tier
    }

    pub fn borrow_limit(&self) -> BorrowLimit {
        self.borrow_limit
    }

    /// Active loans in borrow order.
    pub fn loans(&self) -> &[BorrowRecord] {
        &self.loans
    }

    /// Borrowing history, oldest first. Includes still-open loans.
    pub fn history(&self) -> &[LoanEvent] {
        &self.history
    }

    /// The active loan for a book, if any.
    pub fn loan_for(&self, book: BookId) -> Option<&BorrowRecord> {
        self.loans.iter().find(|r| r.book_id() == book)
    }

    /// Whether the member has reached their borrow limit.
    pub fn at_limit(&self) -> bool {
        self.loans.len() >= self.borrow_limit.get() as usize
    }

    /// Add an active loan, opening its history entry.
    ///
    /// Rejects a duplicate book before checking the limit; on refusal the
    /// member is unchanged.
    pub fn add_loan(&mut self, record: BorrowRecord) -> Result<(), LoanRefusal> {
        if self.loan_for(record.book_id()).is_some() {
            return Err(LoanRefusal::AlreadyBorrowed);
        }
        if self.at_limit() {
            return Err(LoanRefusal::AtLimit);
        }
        self.history
            .push(LoanEvent::opened(record.book_id(), record.borrowed_on()));
        self.loans.push(record);
        Ok(())
    }

    /// Remove the active loan for a book, completing its history entry.
    ///
    /// Returns the removed record, or `None` when the book is not on loan to
    /// this member.
    pub fn remove_loan(&mut self, book: BookId, returned_on: NaiveDate) -> Option<BorrowRecord> {
        let index = self.loans.iter().position(|r| r.book_id() == book)?;
        let record = self.loans.remove(index);
        let overdue = record.is_overdue(returned_on);
        if let Some(event) = self
            .history
            .iter_mut()
            .rev()
            .find(|e| e.book_id() == book && e.is_open())
        {
            event.complete(returned_on, overdue);
        }
        Some(record)
    }

    /// Whether any active loan is overdue as of `today`.
    ///
    /// Evaluated fresh on every call; nothing is cached.
    pub fn has_overdue(&self, today: NaiveDate) -> bool {
        self.loans.iter().any(|r| r.is_overdue(today))
    }

    /// Active loans that are overdue as of `today`, in borrow order.
    pub fn overdue_loans(&self, today: NaiveDate) -> Vec<&BorrowRecord> {
        self.loans.iter().filter(|r| r.is_overdue(today)).collect()
    }
}
