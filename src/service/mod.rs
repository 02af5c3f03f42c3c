//! service
//!
//! The lending service: the single place where entity state changes.
//!
//! # Architecture
//!
//! Every operation follows the same shape: load entities through the store
//! capability, validate, mutate the loaded copies via their
//! invariant-preserving methods, write them back. Entities travel by value,
//! so a refused operation leaves nothing to roll back - copies that were
//! never saved simply drop.
//!
//! # Concurrency
//!
//! Mutating operations serialize behind one service-level mutex. A borrow
//! touches both a book and a member; without the mutex two concurrent
//! borrows could each pass the availability and limit checks before either
//! writes back. Read-only operations go straight to the stores, which are
//! individually thread-safe.
//!
//! # Errors
//!
//! Refused operations come back as [`LendingError`] values in the order the
//! preconditions are specified (member, book, duplicate, limit,
//! availability). Storage failures are the only fatal case.

pub mod error;
pub mod recommend;

pub use error::LendingError;
pub use recommend::Recommendation;

use std::sync::{Arc, Mutex, MutexGuard};

use crate::core::book::{Book, NewBook};
use crate::core::clock::{Clock, SystemClock};
use crate::core::config::{Config, ConfigError};
use crate::core::loan::{BorrowRecord, LoanEvent};
use crate::core::member::{LoanRefusal, Member, NewMember};
use crate::core::types::{BookId, BorrowLimit, LoanPeriod, MemberId, MembershipTier};
use crate::store::{BookStore, InMemoryBookStore, InMemoryMemberStore, MemberStore};

/// Lending parameters resolved from configuration.
#[derive(Debug, Clone, Copy)]
pub struct LendingPolicy {
    loan_period: LoanPeriod,
    regular_limit: BorrowLimit,
    premium_limit: BorrowLimit,
}

impl LendingPolicy {
    /// Create a policy directly from validated parts.
    pub fn new(
        loan_period: LoanPeriod,
        regular_limit: BorrowLimit,
        premium_limit: BorrowLimit,
    ) -> Self {
        Self {
            loan_period,
            regular_limit,
            premium_limit,
        }
    }

    /// Build a policy from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a configured limit or period
    /// cannot be represented (validation normally catches this earlier).
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            loan_period: LoanPeriod::new(config.loan_period_days())
                .map_err(|e| ConfigError::InvalidValue(e.to_string()))?,
            regular_limit: BorrowLimit::new(config.regular_limit())
                .map_err(|e| ConfigError::InvalidValue(e.to_string()))?,
            premium_limit: BorrowLimit::new(config.premium_limit())
                .map_err(|e| ConfigError::InvalidValue(e.to_string()))?,
        })
    }

    /// The loan duration.
    pub fn loan_period(&self) -> LoanPeriod {
        self.loan_period
    }

    /// The default borrow limit for a membership tier.
    pub fn limit_for(&self, tier: MembershipTier) -> BorrowLimit {
        match tier {
            MembershipTier::Regular => self.regular_limit,
            MembershipTier::Premium => self.premium_limit,
        }
    }
}

/// What happened to the freed copy after a return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyDisposition {
    /// No reservations; the copy went back on the shelf.
    Shelved,
    /// The copy transferred directly to the next member in the queue.
    Transferred { member: MemberId },
    /// The next member in the queue could not take the loan (at their
    /// limit); the copy went back on the shelf and their reservation was
    /// dropped.
    HeldAtLimit { member: MemberId },
}

/// Result of a successful return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReturnOutcome {
    /// Whether the loan came back after its due date. Reporting only; an
    /// overdue return is still a successful return.
    pub was_overdue: bool,
    /// Where the freed copy went.
    pub disposition: CopyDisposition,
}

/// Result of a reservation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReserveOutcome {
    /// Queued; `position` is 1-based from the head.
    Queued { position: usize },
    /// Copies are on the shelf; borrow instead of reserving.
    NotNeeded,
}

/// One member's overdue loans.
#[derive(Debug, Clone)]
pub struct OverdueEntry {
    pub member: Member,
    pub records: Vec<BorrowRecord>,
}

/// Orchestrates all lending state transitions.
///
/// The service is `Send + Sync`; share it behind an `Arc` to call it from
/// several threads.
pub struct LendingService {
    books: Arc<dyn BookStore>,
    members: Arc<dyn MemberStore>,
    clock: Arc<dyn Clock>,
    policy: LendingPolicy,
    write_lock: Mutex<()>,
}

impl LendingService {
    /// Create a service over the given stores with the system clock.
    pub fn new(books: Arc<dyn BookStore>, members: Arc<dyn MemberStore>, policy: LendingPolicy) -> Self {
        Self::with_clock(books, members, policy, Arc::new(SystemClock))
    }

    /// Create a service with an explicit clock source.
    pub fn with_clock(
        books: Arc<dyn BookStore>,
        members: Arc<dyn MemberStore>,
        policy: LendingPolicy,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            books,
            members,
            clock,
            policy,
            write_lock: Mutex::new(()),
        }
    }

    /// Convenience constructor over fresh in-memory stores.
    pub fn in_memory(policy: LendingPolicy) -> Self {
        Self::new(
            Arc::new(InMemoryBookStore::new()),
            Arc::new(InMemoryMemberStore::new()),
            policy,
        )
    }

    /// The active lending policy.
    pub fn policy(&self) -> &LendingPolicy {
        &self.policy
    }

    fn mutate(&self) -> MutexGuard<'_, ()> {
        // The lock carries no data, only ordering; a poisoned guard is safe
        // to reuse.
        self.write_lock.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn load_member(&self, id: MemberId) -> Result<Member, LendingError> {
        self.members
            .find_by_id(id)?
            .ok_or(LendingError::MemberNotFound(id))
    }

    fn load_book(&self, id: BookId) -> Result<Book, LendingError> {
        self.books
            .find_by_id(id)?
            .ok_or(LendingError::BookNotFound(id))
    }

    // =========================================================================
    // Catalog and roster
    // =========================================================================

    /// Add a book to the catalog. The store issues the id.
    pub fn add_book(&self, draft: NewBook) -> Result<Book, LendingError> {
        let _guard = self.mutate();
        Ok(self.books.create(draft)?)
    }

    /// Register a member. The tier's default limit applies unless an
    /// explicit limit is given.
    pub fn register_member(
        &self,
        name: impl Into<String>,
        tier: MembershipTier,
        limit: Option<BorrowLimit>,
    ) -> Result<Member, LendingError> {
        let _guard = self.mutate();
        let draft = NewMember {
            name: name.into(),
            tier,
            borrow_limit: limit.unwrap_or_else(|| self.policy.limit_for(tier)),
        };
        Ok(self.members.create(draft)?)
    }

    /// Remove a book from the catalog.
    ///
    /// Refused while any copy is on loan; reservations die with the book.
    pub fn remove_book(&self, id: BookId) -> Result<(), LendingError> {
        let _guard = self.mutate();
        let book = self.load_book(id)?;
        if book.copies_on_loan() > 0 {
            return Err(LendingError::BookOnLoan(id));
        }
        Ok(self.books.delete(id)?)
    }

    /// Remove a member from the roster.
    ///
    /// Refused while the member holds active loans. The member may still sit
    /// in reservation queues; those entries are skipped when a copy frees up.
    pub fn remove_member(&self, id: MemberId) -> Result<(), LendingError> {
        let _guard = self.mutate();
        let member = self.load_member(id)?;
        if !member.loans().is_empty() {
            return Err(LendingError::MemberHasLoans(id));
        }
        Ok(self.members.delete(id)?)
    }

    // =========================================================================
    // Lending
    // =========================================================================

    /// Lend a copy of a book to a member.
    ///
    /// Preconditions, first failure wins: member exists, book exists, member
    /// does not already hold the book, member is under their limit, a copy
    /// is available. On success both entities are persisted and the new
    /// record is returned.
    pub fn borrow(&self, member_id: MemberId, book_id: BookId) -> Result<BorrowRecord, LendingError> {
        let _guard = self.mutate();
        let mut member = self.load_member(member_id)?;
        let mut book = self.load_book(book_id)?;

        let record = BorrowRecord::new(book_id, self.clock.today(), self.policy.loan_period());
        member.add_loan(record.clone()).map_err(|refusal| match refusal {
            LoanRefusal::AlreadyBorrowed => LendingError::DuplicateLoan {
                member: member_id,
                book: book_id,
            },
            LoanRefusal::AtLimit => LendingError::LimitReached {
                member: member_id,
                limit: member.borrow_limit().get(),
            },
        })?;

        if !book.take_copy() {
            // The loaded copies are dropped unsaved, so the refused borrow
            // leaves no trace.
            return Err(LendingError::Unavailable(book_id));
        }

        self.books.save(&book)?;
        self.members.save(&member)?;
        Ok(record)
    }

    /// Take a book back from a member.
    ///
    /// The freed copy transfers to the oldest resolvable reservation if that
    /// member can take it, and goes back on the shelf otherwise; see
    /// [`CopyDisposition`]. The cascade never fails the return itself.
    pub fn return_book(
        &self,
        member_id: MemberId,
        book_id: BookId,
    ) -> Result<ReturnOutcome, LendingError> {
        let _guard = self.mutate();
        let mut member = self.load_member(member_id)?;
        let mut book = self.load_book(book_id)?;
        let today = self.clock.today();

        let record = member
            .remove_loan(book_id, today)
            .ok_or(LendingError::NotBorrowed {
                member: member_id,
                book: book_id,
            })?;
        let was_overdue = record.is_overdue(today);
        self.members.save(&member)?;

        let disposition = loop {
            match book.pop_reservation() {
                None => {
                    book.put_copy();
                    break CopyDisposition::Shelved;
                }
                Some(next_id) => {
                    // A queued member who has since been removed no longer
                    // resolves; skip to the next reservation.
                    let Some(mut next) = self.members.find_by_id(next_id)? else {
                        continue;
                    };
                    let next_record =
                        BorrowRecord::new(book_id, today, self.policy.loan_period());
                    match next.add_loan(next_record) {
                        Ok(()) => {
                            // The copy passes straight to the new borrower
                            // without touching the shelf.
                            self.members.save(&next)?;
                            break CopyDisposition::Transferred { member: next_id };
                        }
                        Err(_) => {
                            book.put_copy();
                            break CopyDisposition::HeldAtLimit { member: next_id };
                        }
                    }
                }
            }
        };

        self.books.save(&book)?;
        Ok(ReturnOutcome {
            was_overdue,
            disposition,
        })
    }

    /// Queue a member for a book with no available copies.
    ///
    /// Refused as [`ReserveOutcome::NotNeeded`] while copies are on the
    /// shelf. The member's limit is not checked here; it is enforced when
    /// the reservation would convert into a loan.
    pub fn reserve(&self, book_id: BookId, member_id: MemberId) -> Result<ReserveOutcome, LendingError> {
        let _guard = self.mutate();
        let _member = self.load_member(member_id)?;
        let mut book = self.load_book(book_id)?;

        if book.is_available() {
            return Ok(ReserveOutcome::NotNeeded);
        }
        if !book.enqueue_reservation(member_id) {
            return Err(LendingError::DuplicateReservation {
                member: member_id,
                book: book_id,
            });
        }
        self.books.save(&book)?;
        Ok(ReserveOutcome::Queued {
            position: book.reservation_count(),
        })
    }

    // =========================================================================
    // Read-only queries
    // =========================================================================

    /// Look up a single book.
    pub fn book(&self, id: BookId) -> Result<Book, LendingError> {
        self.load_book(id)
    }

    /// Look up a single member.
    pub fn member(&self, id: MemberId) -> Result<Member, LendingError> {
        self.load_member(id)
    }

    /// The whole catalog, ascending id.
    pub fn list_books(&self) -> Result<Vec<Book>, LendingError> {
        Ok(self.books.find_all()?)
    }

    /// The whole roster, ascending id.
    pub fn list_members(&self) -> Result<Vec<Member>, LendingError> {
        Ok(self.members.find_all()?)
    }

    /// Books matching a title-or-author substring, case-insensitively.
    pub fn search_books(&self, query: &str) -> Result<Vec<Book>, LendingError> {
        Ok(self.books.find_by_query(query)?)
    }

    /// Books whose title contains the substring, case-insensitively.
    pub fn search_by_title(&self, title: &str) -> Result<Vec<Book>, LendingError> {
        let needle = title.to_lowercase();
        Ok(self
            .books
            .find_all()?
            .into_iter()
            .filter(|b| b.title().to_lowercase().contains(&needle))
            .collect())
    }

    /// Books whose author contains the substring, case-insensitively.
    pub fn search_by_author(&self, author: &str) -> Result<Vec<Book>, LendingError> {
        let needle = author.to_lowercase();
        Ok(self
            .books
            .find_all()?
            .into_iter()
            .filter(|b| b.author().to_lowercase().contains(&needle))
            .collect())
    }

    /// Books filtered by shelf availability.
    pub fn search_by_availability(&self, available: bool) -> Result<Vec<Book>, LendingError> {
        Ok(self
            .books
            .find_all()?
            .into_iter()
            .filter(|b| b.is_available() == available)
            .collect())
    }

    /// Whether a member currently holds any overdue loan.
    pub fn has_overdue_books(&self, member_id: MemberId) -> Result<bool, LendingError> {
        Ok(self.load_member(member_id)?.has_overdue(self.clock.today()))
    }

    /// Every member with overdue loans, with the offending records.
    pub fn overdue_report(&self) -> Result<Vec<OverdueEntry>, LendingError> {
        let today = self.clock.today();
        Ok(self
            .members
            .find_all()?
            .into_iter()
            .filter_map(|member| {
                let records: Vec<BorrowRecord> =
                    member.overdue_loans(today).into_iter().cloned().collect();
                if records.is_empty() {
                    None
                } else {
                    Some(OverdueEntry { member, records })
                }
            })
            .collect())
    }

    /// A member's borrowing history, oldest first.
    pub fn member_history(&self, member_id: MemberId) -> Result<Vec<LoanEvent>, LendingError> {
        Ok(self.load_member(member_id)?.history().to_vec())
    }

    /// A member's borrowing history rendered for humans.
    pub fn export_member_history(&self, member_id: MemberId) -> Result<String, LendingError> {
        let member = self.load_member(member_id)?;
        if member.history().is_empty() {
            return Ok(format!(
                "{} (#{}) has no borrowing history.",
                member.name(),
                member.id()
            ));
        }

        let titles: std::collections::HashMap<BookId, String> = self
            .books
            .find_all()?
            .into_iter()
            .map(|b| (b.id(), b.title().to_string()))
            .collect();

        let mut out = format!("Borrowing history for {} (#{}):\n", member.name(), member.id());
        for event in member.history() {
            let title = titles
                .get(&event.book_id())
                .cloned()
                .unwrap_or_else(|| format!("book #{}", event.book_id()));
            match event.returned_on() {
                Some(returned) => {
                    let overdue = if event.returned_overdue() {
                        " (overdue)"
                    } else {
                        ""
                    };
                    out.push_str(&format!(
                        "  {}  {} - returned {}{}\n",
                        event.borrowed_on(),
                        title,
                        returned,
                        overdue
                    ));
                }
                None => {
                    out.push_str(&format!("  {}  {} - still out\n", event.borrowed_on(), title));
                }
            }
        }
        Ok(out)
    }

    /// Rank available books for a member; see [`recommend`](crate::service::recommend).
    ///
    /// Returns the FULL ordered candidate list with scores; callers truncate
    /// for display if they wish.
    pub fn recommend(&self, member_id: MemberId) -> Result<Vec<Recommendation>, LendingError> {
        let member = self.load_member(member_id)?;
        recommend::recommend(self.books.as_ref(), self.members.as_ref(), &member)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ManualClock;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    struct Fixture {
        service: LendingService,
        clock: Arc<ManualClock>,
    }

    impl Fixture {
        fn new() -> Self {
            let clock = Arc::new(ManualClock::new(date(2026, 8, 1)));
            let service = LendingService::with_clock(
                Arc::new(InMemoryBookStore::new()),
                Arc::new(InMemoryMemberStore::new()),
                LendingPolicy::from_config(&Config::default()).unwrap(),
                Arc::clone(&clock) as Arc<dyn Clock>,
            );
            Self { service, clock }
        }

        fn book(&self, title: &str, copies: u32) -> Book {
            self.book_in_genre(title, None, copies)
        }

        fn book_in_genre(&self, title: &str, genre: Option<&str>, copies: u32) -> Book {
            self.service
                .add_book(NewBook {
                    title: title.to_string(),
                    author: "Author".to_string(),
                    genre: genre.map(str::to_string),
                    copies,
                })
                .unwrap()
        }

        fn member(&self, name: &str, limit: u32) -> Member {
            self.service
                .register_member(
                    name,
                    MembershipTier::Regular,
                    Some(BorrowLimit::new(limit).unwrap()),
                )
                .unwrap()
        }
    }

    mod borrow {
        use super::*;

        #[test]
        fn success_decrements_copies_and_records_loan() {
            let f = Fixture::new();
            let book = f.book("Clean Code", 2);
            let member = f.member("Alice", 3);

            let record = f.service.borrow(member.id(), book.id()).unwrap();
            assert_eq!(record.book_id(), book.id());
            assert_eq!(record.borrowed_on(), date(2026, 8, 1));
            assert_eq!(record.due_on(), date(2026, 8, 15));

            assert_eq!(f.service.book(book.id()).unwrap().available_copies(), 1);
            assert_eq!(f.service.member(member.id()).unwrap().loans().len(), 1);
        }

        #[test]
        fn unknown_member_rejected_first() {
            let f = Fixture::new();
            let book = f.book("Clean Code", 1);
            let err = f.service.borrow(MemberId::new(99), book.id()).unwrap_err();
            assert!(matches!(err, LendingError::MemberNotFound(_)));
        }

        #[test]
        fn unknown_book_rejected() {
            let f = Fixture::new();
            let member = f.member("Alice", 3);
            let err = f.service.borrow(member.id(), BookId::new(99)).unwrap_err();
            assert!(matches!(err, LendingError::BookNotFound(_)));
        }

        #[test]
        fn duplicate_loan_rejected() {
            let f = Fixture::new();
            let book = f.book("Clean Code", 2);
            let member = f.member("Alice", 3);

            f.service.borrow(member.id(), book.id()).unwrap();
            let err = f.service.borrow(member.id(), book.id()).unwrap_err();
            assert!(matches!(err, LendingError::DuplicateLoan { .. }));

            // The refused borrow changed nothing.
            assert_eq!(f.service.book(book.id()).unwrap().available_copies(), 1);
        }

        #[test]
        fn limit_of_two_blocks_the_third_borrow() {
            let f = Fixture::new();
            let b1 = f.book("One", 1);
            let b2 = f.book("Two", 1);
            let b3 = f.book("Three", 1);
            let member = f.member("Alice", 2);

            f.service.borrow(member.id(), b1.id()).unwrap();
            f.service.borrow(member.id(), b2.id()).unwrap();
            let err = f.service.borrow(member.id(), b3.id()).unwrap_err();
            assert!(matches!(err, LendingError::LimitReached { limit: 2, .. }));
            assert_eq!(f.service.book(b3.id()).unwrap().available_copies(), 1);
        }

        #[test]
        fn no_copies_rejected() {
            let f = Fixture::new();
            let book = f.book("Clean Code", 1);
            let alice = f.member("Alice", 3);
            let bob = f.member("Bob", 3);

            f.service.borrow(alice.id(), book.id()).unwrap();
            let err = f.service.borrow(bob.id(), book.id()).unwrap_err();
            assert!(matches!(err, LendingError::Unavailable(_)));
            assert_eq!(f.service.member(bob.id()).unwrap().loans().len(), 0);
        }

        #[test]
        fn duplicate_wins_over_limit() {
            let f = Fixture::new();
            let book = f.book("Clean Code", 2);
            let member = f.member("Alice", 1);

            f.service.borrow(member.id(), book.id()).unwrap();
            let err = f.service.borrow(member.id(), book.id()).unwrap_err();
            assert!(matches!(err, LendingError::DuplicateLoan { .. }));
        }
    }

    mod return_book {
        use super::*;

        #[test]
        fn restores_availability_with_empty_queue() {
            let f = Fixture::new();
            let book = f.book("Clean Code", 1);
            let member = f.member("Alice", 3);

            f.service.borrow(member.id(), book.id()).unwrap();
            let outcome = f.service.return_book(member.id(), book.id()).unwrap();

            assert!(!outcome.was_overdue);
            assert_eq!(outcome.disposition, CopyDisposition::Shelved);
            assert_eq!(f.service.book(book.id()).unwrap().available_copies(), 1);
            assert_eq!(f.service.member(member.id()).unwrap().loans().len(), 0);
        }

        #[test]
        fn returning_a_book_never_borrowed_is_rejected() {
            let f = Fixture::new();
            let book = f.book("Clean Code", 1);
            let member = f.member("Alice", 3);

            let err = f.service.return_book(member.id(), book.id()).unwrap_err();
            assert!(matches!(err, LendingError::NotBorrowed { .. }));
        }

        #[test]
        fn reports_overdue_returns() {
            let f = Fixture::new();
            let book = f.book("Clean Code", 1);
            let member = f.member("Alice", 3);

            f.service.borrow(member.id(), book.id()).unwrap();
            f.clock.advance_days(20); // due after 14

            let outcome = f.service.return_book(member.id(), book.id()).unwrap();
            assert!(outcome.was_overdue);
        }

        #[test]
        fn freed_copy_transfers_to_next_reservation() {
            let f = Fixture::new();
            let book = f.book("Clean Code", 1);
            let alice = f.member("Alice", 3);
            let bob = f.member("Bob", 3);

            f.service.borrow(alice.id(), book.id()).unwrap();
            assert_eq!(
                f.service.reserve(book.id(), bob.id()).unwrap(),
                ReserveOutcome::Queued { position: 1 }
            );

            let outcome = f.service.return_book(alice.id(), book.id()).unwrap();
            assert_eq!(
                outcome.disposition,
                CopyDisposition::Transferred { member: bob.id() }
            );

            // Transferred, not freed: the copy never touched the shelf.
            let book = f.service.book(book.id()).unwrap();
            assert_eq!(book.available_copies(), 0);
            assert_eq!(book.reservation_count(), 0);

            let bob = f.service.member(bob.id()).unwrap();
            assert_eq!(bob.loans().len(), 1);
            assert_eq!(bob.loans()[0].book_id(), book.id());
        }

        #[test]
        fn queue_head_at_limit_frees_copy_and_drops_reservation() {
            let f = Fixture::new();
            let wanted = f.book("Clean Code", 1);
            let other1 = f.book("Other One", 1);
            let other2 = f.book("Other Two", 1);
            let alice = f.member("Alice", 3);
            let bob = f.member("Bob", 2);

            f.service.borrow(alice.id(), wanted.id()).unwrap();
            f.service.reserve(wanted.id(), bob.id()).unwrap();

            // Bob fills up while waiting.
            f.service.borrow(bob.id(), other1.id()).unwrap();
            f.service.borrow(bob.id(), other2.id()).unwrap();

            let outcome = f.service.return_book(alice.id(), wanted.id()).unwrap();
            assert_eq!(
                outcome.disposition,
                CopyDisposition::HeldAtLimit { member: bob.id() }
            );

            let book = f.service.book(wanted.id()).unwrap();
            assert_eq!(book.available_copies(), 1);
            assert_eq!(book.reservation_count(), 0);
            assert_eq!(f.service.member(bob.id()).unwrap().loans().len(), 2);
        }

        #[test]
        fn removed_member_in_queue_is_skipped() {
            let f = Fixture::new();
            let book = f.book("Clean Code", 1);
            let alice = f.member("Alice", 3);
            let ghost = f.member("Ghost", 3);
            let carol = f.member("Carol", 3);

            f.service.borrow(alice.id(), book.id()).unwrap();
            f.service.reserve(book.id(), ghost.id()).unwrap();
            f.service.reserve(book.id(), carol.id()).unwrap();
            f.service.remove_member(ghost.id()).unwrap();

            let outcome = f.service.return_book(alice.id(), book.id()).unwrap();
            assert_eq!(
                outcome.disposition,
                CopyDisposition::Transferred { member: carol.id() }
            );
            assert_eq!(f.service.member(carol.id()).unwrap().loans().len(), 1);
        }

        #[test]
        fn queue_of_only_removed_members_drains_to_shelf() {
            let f = Fixture::new();
            let book = f.book("Clean Code", 1);
            let alice = f.member("Alice", 3);
            let ghost = f.member("Ghost", 3);

            f.service.borrow(alice.id(), book.id()).unwrap();
            f.service.reserve(book.id(), ghost.id()).unwrap();
            f.service.remove_member(ghost.id()).unwrap();

            let outcome = f.service.return_book(alice.id(), book.id()).unwrap();
            assert_eq!(outcome.disposition, CopyDisposition::Shelved);
            assert_eq!(f.service.book(book.id()).unwrap().available_copies(), 1);
        }

        #[test]
        fn borrow_then_return_restores_the_shelf() {
            let f = Fixture::new();
            let book = f.book("Clean Code", 3);
            let member = f.member("Alice", 3);

            let before = f.service.book(book.id()).unwrap().available_copies();
            f.service.borrow(member.id(), book.id()).unwrap();
            f.service.return_book(member.id(), book.id()).unwrap();
            assert_eq!(f.service.book(book.id()).unwrap().available_copies(), before);
        }
    }

    mod reserve {
        use super::*;

        #[test]
        fn refused_while_copies_available() {
            let f = Fixture::new();
            let book = f.book("Clean Code", 1);
            let member = f.member("Alice", 3);

            assert_eq!(
                f.service.reserve(book.id(), member.id()).unwrap(),
                ReserveOutcome::NotNeeded
            );
            assert_eq!(f.service.book(book.id()).unwrap().reservation_count(), 0);
        }

        #[test]
        fn positions_count_from_one() {
            let f = Fixture::new();
            let book = f.book("Clean Code", 1);
            let alice = f.member("Alice", 3);
            let bob = f.member("Bob", 3);
            let carol = f.member("Carol", 3);

            f.service.borrow(alice.id(), book.id()).unwrap();
            assert_eq!(
                f.service.reserve(book.id(), bob.id()).unwrap(),
                ReserveOutcome::Queued { position: 1 }
            );
            assert_eq!(
                f.service.reserve(book.id(), carol.id()).unwrap(),
                ReserveOutcome::Queued { position: 2 }
            );
        }

        #[test]
        fn duplicate_reservation_rejected() {
            let f = Fixture::new();
            let book = f.book("Clean Code", 1);
            let alice = f.member("Alice", 3);
            let bob = f.member("Bob", 3);

            f.service.borrow(alice.id(), book.id()).unwrap();
            f.service.reserve(book.id(), bob.id()).unwrap();
            let err = f.service.reserve(book.id(), bob.id()).unwrap_err();
            assert!(matches!(err, LendingError::DuplicateReservation { .. }));
        }

        #[test]
        fn unknown_member_rejected() {
            let f = Fixture::new();
            let book = f.book("Clean Code", 1);
            let err = f.service.reserve(book.id(), MemberId::new(9)).unwrap_err();
            assert!(matches!(err, LendingError::MemberNotFound(_)));
        }

        #[test]
        fn no_limit_check_at_reservation_time() {
            let f = Fixture::new();
            let wanted = f.book("Clean Code", 1);
            let other = f.book("Other", 1);
            let alice = f.member("Alice", 3);
            let bob = f.member("Bob", 1);

            f.service.borrow(alice.id(), wanted.id()).unwrap();
            f.service.borrow(bob.id(), other.id()).unwrap(); // Bob now at limit

            assert_eq!(
                f.service.reserve(wanted.id(), bob.id()).unwrap(),
                ReserveOutcome::Queued { position: 1 }
            );
        }
    }

    mod overdue {
        use super::*;

        #[test]
        fn fresh_loan_is_not_overdue() {
            let f = Fixture::new();
            let book = f.book("Clean Code", 1);
            let member = f.member("Alice", 3);

            f.service.borrow(member.id(), book.id()).unwrap();
            assert!(!f.service.has_overdue_books(member.id()).unwrap());
        }

        #[test]
        fn loan_becomes_overdue_as_the_clock_moves() {
            let f = Fixture::new();
            let book = f.book("Clean Code", 1);
            let member = f.member("Alice", 3);

            f.service.borrow(member.id(), book.id()).unwrap();
            f.clock.set(date(2026, 8, 15)); // due date
            assert!(!f.service.has_overdue_books(member.id()).unwrap());

            f.clock.set(date(2026, 8, 16));
            assert!(f.service.has_overdue_books(member.id()).unwrap());
        }

        #[test]
        fn report_lists_only_members_with_overdue_loans() {
            let f = Fixture::new();
            let b1 = f.book("One", 1);
            let b2 = f.book("Two", 1);
            let alice = f.member("Alice", 3);
            let bob = f.member("Bob", 3);

            f.service.borrow(alice.id(), b1.id()).unwrap();
            f.clock.advance_days(10);
            f.service.borrow(bob.id(), b2.id()).unwrap();
            f.clock.advance_days(6); // Alice at day 16, Bob at day 6

            let report = f.service.overdue_report().unwrap();
            assert_eq!(report.len(), 1);
            assert_eq!(report[0].member.id(), alice.id());
            assert_eq!(report[0].records.len(), 1);
        }
    }

    mod catalog {
        use super::*;

        #[test]
        fn remove_book_refused_while_on_loan() {
            let f = Fixture::new();
            let book = f.book("Clean Code", 1);
            let member = f.member("Alice", 3);

            f.service.borrow(member.id(), book.id()).unwrap();
            let err = f.service.remove_book(book.id()).unwrap_err();
            assert!(matches!(err, LendingError::BookOnLoan(_)));

            f.service.return_book(member.id(), book.id()).unwrap();
            f.service.remove_book(book.id()).unwrap();
            assert!(matches!(
                f.service.book(book.id()),
                Err(LendingError::BookNotFound(_))
            ));
        }

        #[test]
        fn remove_member_refused_while_holding_loans() {
            let f = Fixture::new();
            let book = f.book("Clean Code", 1);
            let member = f.member("Alice", 3);

            f.service.borrow(member.id(), book.id()).unwrap();
            let err = f.service.remove_member(member.id()).unwrap_err();
            assert!(matches!(err, LendingError::MemberHasLoans(_)));
        }

        #[test]
        fn search_filters_compose_with_lending_state() {
            let f = Fixture::new();
            let java = f.book("Effective Java", 1);
            let _clean = f.book("Clean Code", 1);
            let member = f.member("Alice", 3);

            f.service.borrow(member.id(), java.id()).unwrap();

            let available = f.service.search_by_availability(true).unwrap();
            assert_eq!(available.len(), 1);
            assert_eq!(available[0].title(), "Clean Code");

            let unavailable = f.service.search_by_availability(false).unwrap();
            assert_eq!(unavailable.len(), 1);
            assert_eq!(unavailable[0].title(), "Effective Java");
        }

        #[test]
        fn title_and_author_searches_are_substring_matches() {
            let f = Fixture::new();
            f.service
                .add_book(NewBook {
                    title: "Effective Java".to_string(),
                    author: "Joshua Bloch".to_string(),
                    genre: None,
                    copies: 1,
                })
                .unwrap();
            f.service
                .add_book(NewBook {
                    title: "Clean Code".to_string(),
                    author: "Robert Martin".to_string(),
                    genre: None,
                    copies: 1,
                })
                .unwrap();

            assert_eq!(f.service.search_by_title("effective").unwrap().len(), 1);
            assert_eq!(f.service.search_by_author("martin").unwrap().len(), 1);
            assert_eq!(f.service.search_books("e").unwrap().len(), 2);
        }
    }

    mod history {
        use super::*;

        #[test]
        fn export_mentions_returned_and_open_loans() {
            let f = Fixture::new();
            let b1 = f.book("Clean Code", 1);
            let b2 = f.book("Effective Java", 1);
            let member = f.member("Alice", 3);

            f.service.borrow(member.id(), b1.id()).unwrap();
            f.service.return_book(member.id(), b1.id()).unwrap();
            f.service.borrow(member.id(), b2.id()).unwrap();

            let export = f.service.export_member_history(member.id()).unwrap();
            assert!(export.contains("Alice"));
            assert!(export.contains("Clean Code - returned"));
            assert!(export.contains("Effective Java - still out"));
        }

        #[test]
        fn export_flags_overdue_returns() {
            let f = Fixture::new();
            let book = f.book("Clean Code", 1);
            let member = f.member("Alice", 3);

            f.service.borrow(member.id(), book.id()).unwrap();
            f.clock.advance_days(30);
            f.service.return_book(member.id(), book.id()).unwrap();

            let export = f.service.export_member_history(member.id()).unwrap();
            assert!(export.contains("(overdue)"));
        }

        #[test]
        fn empty_history_has_a_friendly_message() {
            let f = Fixture::new();
            let member = f.member("Alice", 3);
            let export = f.service.export_member_history(member.id()).unwrap();
            assert!(export.contains("no borrowing history"));
        }
    }
}
