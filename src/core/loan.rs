//! core::loan
//!
//! Loan records and borrowing history.
//!
//! [`BorrowRecord`] is the active-loan value: created on a successful borrow,
//! removed from the member on return, never mutated in between. Overdue
//! status is derived on demand from a caller-supplied date so it always
//! reflects the clock the caller is using.
//!
//! [`LoanEvent`] is the append-only history counterpart: opened alongside the
//! record and completed on return. History outlives the active loan and feeds
//! the popularity term of recommendation scoring and the member history
//! export.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::types::{BookId, LoanPeriod};

/// An active loan of one book by one member.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use circulate::core::loan::BorrowRecord;
/// use circulate::core::types::{BookId, LoanPeriod};
///
/// let borrowed = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
/// let record = BorrowRecord::new(BookId::new(1), borrowed, LoanPeriod::new(14).unwrap());
///
/// assert_eq!(record.due_on(), NaiveDate::from_ymd_opt(2026, 8, 15).unwrap());
/// assert!(!record.is_overdue(record.due_on()));
/// assert!(record.is_overdue(NaiveDate::from_ymd_opt(2026, 8, 16).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowRecord {
    book_id: BookId,
    borrowed_on: NaiveDate,
    due_on: NaiveDate,
}

impl BorrowRecord {
    /// Create a record for a loan starting on `borrowed_on`.
    ///
    /// The due date is `borrowed_on + period`.
    pub fn new(book_id: BookId, borrowed_on: NaiveDate, period: LoanPeriod) -> Self {
        let due_on = borrowed_on
            .checked_add_days(Days::new(u64::from(period.days())))
            .unwrap_or(NaiveDate::MAX);
        Self {
            book_id,
            borrowed_on,
            due_on,
        }
    }

    /// The borrowed book.
    pub fn book_id(&self) -> BookId {
        self.book_id
    }

    /// The date the loan started.
    pub fn borrowed_on(&self) -> NaiveDate {
        self.borrowed_on
    }

    /// The date the loan is due back.
    pub fn due_on(&self) -> NaiveDate {
        self.due_on
    }

    /// Whether the loan is overdue as of `today`.
    ///
    /// Strictly after the due date: a loan is not overdue on its due date.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        today > self.due_on
    }
}

/// One entry in a member's borrowing history.
///
/// Opened when a loan starts (`returned_on` empty) and completed when the
/// book comes back. Never removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanEvent {
    book_id: BookId,
    borrowed_on: NaiveDate,
    returned_on: Option<NaiveDate>,
    returned_overdue: bool,
}

impl LoanEvent {
    /// Open a history entry for a loan starting on `borrowed_on`.
    pub fn opened(book_id: BookId, borrowed_on: NaiveDate) -> Self {
        Self {
            book_id,
            borrowed_on,
            returned_on: None,
            returned_overdue: false,
        }
    }

    /// Complete this entry with the return date and overdue flag.
    pub fn complete(&mut self, returned_on: NaiveDate, overdue: bool) {
        self.returned_on = Some(returned_on);
        self.returned_overdue = overdue;
    }

    /// The borrowed book.
    pub fn book_id(&self) -> BookId {
        self.book_id
    }

    /// The date the loan started.
    pub fn borrowed_on(&self) -> NaiveDate {
        self.borrowed_on
    }

    /// The return date, if the book has come back.
    pub fn returned_on(&self) -> Option<NaiveDate> {
        self.returned_on
    }

    /// Whether the book came back after its due date.
    pub fn returned_overdue(&self) -> bool {
        self.returned_overdue
    }

    /// Whether the loan is still out.
    pub fn is_open(&self) -> bool {
        self.returned_on.is_none()
    }
}
