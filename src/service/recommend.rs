//! service::recommend
//!
//! Recommendation scoring.
//!
//! # Algorithm
//!
//! Candidates are every book with a copy on the shelf that the member does
//! not currently hold. Each candidate scores:
//!
//! - `+1.0` when its genre appears among the genres of the member's current
//!   loans
//! - `+0.5` per distinct member who holds or has ever held the book (the
//!   popularity term, computed from borrowing history)
//!
//! The result is sorted by descending score, ties broken by ascending book
//! id, and is recomputed from live store state on every call - nothing is
//! cached.

use std::collections::HashSet;

use crate::core::book::Book;
use crate::core::member::Member;
use crate::core::types::BookId;
use crate::store::{BookStore, MemberStore};

use super::LendingError;

/// Genre-match bonus.
const GENRE_WEIGHT: f64 = 1.0;

/// Per-distinct-borrower popularity bonus.
const POPULARITY_WEIGHT: f64 = 0.5;

/// A candidate book with its score.
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub book: Book,
    pub score: f64,
}

/// Rank every available, not-currently-held book for `member`.
pub(crate) fn recommend(
    books: &dyn BookStore,
    members: &dyn MemberStore,
    member: &Member,
) -> Result<Vec<Recommendation>, LendingError> {
    let catalog = books.find_all()?;
    let roster = members.find_all()?;

    let held: HashSet<BookId> = member.loans().iter().map(|r| r.book_id()).collect();
    let preferred: HashSet<&str> = catalog
        .iter()
        .filter(|b| held.contains(&b.id()))
        .filter_map(|b| b.genre())
        .collect();

    let mut ranked: Vec<Recommendation> = catalog
        .iter()
        .filter(|b| b.is_available() && !held.contains(&b.id()))
        .map(|book| {
            let mut score = 0.0;
            if book.genre().is_some_and(|g| preferred.contains(g)) {
                score += GENRE_WEIGHT;
            }
            score += POPULARITY_WEIGHT * f64::from(distinct_borrowers(&roster, book.id()));
            Recommendation {
                book: book.clone(),
                score,
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.book.id().cmp(&b.book.id()))
    });
    Ok(ranked)
}

/// Members who hold or have ever held the book.
fn distinct_borrowers(roster: &[Member], book: BookId) -> u32 {
    roster
        .iter()
        .filter(|m| m.history().iter().any(|e| e.book_id() == book))
        .count() as u32
}
