//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag. Expected
//! failures print as `error:` lines on stderr; debug chatter only appears
//! with `--debug`.

use std::fmt::Display;

use crate::core::book::Book;
use crate::core::loan::BorrowRecord;
use crate::core::member::Member;
use crate::service::Recommendation;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// One-line rendering of a book.
///
/// `#1  Clean Code - Robert C. Martin  [Software]  1/2 available  (2 waiting)`
pub fn format_book(book: &Book) -> String {
    let mut line = format!("#{}  {} - {}", book.id(), book.title(), book.author());
    if let Some(genre) = book.genre() {
        line.push_str(&format!("  [{}]", genre));
    }
    line.push_str(&format!(
        "  {}/{} available",
        book.available_copies(),
        book.total_copies()
    ));
    match book.reservation_count() {
        0 => {}
        1 => line.push_str("  (1 waiting)"),
        n => line.push_str(&format!("  ({} waiting)", n)),
    }
    line
}

/// One-line rendering of a member.
///
/// `#2  Alice  (regular, 1/3 on loan)`
pub fn format_member(member: &Member) -> String {
    format!(
        "#{}  {}  ({}, {}/{} on loan)",
        member.id(),
        member.name(),
        member.tier(),
        member.loans().len(),
        member.borrow_limit()
    )
}

/// One-line rendering of a loan.
pub fn format_loan(record: &BorrowRecord, title: &str) -> String {
    format!(
        "{} - borrowed {}, due {}",
        title,
        record.borrowed_on(),
        record.due_on()
    )
}

/// One-line rendering of a recommendation.
pub fn format_recommendation(rec: &Recommendation) -> String {
    format!("{}  (score {:.1})", format_book(&rec.book), rec.score)
}

/// Format a list of items.
pub fn format_list<T: Display>(items: &[T], prefix: &str) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", prefix, item))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::book::NewBook;
    use crate::core::member::NewMember;
    use crate::core::types::{BookId, BorrowLimit, MemberId, MembershipTier};

    #[test]
    fn verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(true, false), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
        // Quiet wins over debug.
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
    }

    #[test]
    fn book_line_includes_genre_and_counts() {
        let book = Book::new(
            BookId::new(1),
            NewBook {
                title: "Clean Code".to_string(),
                author: "Robert C. Martin".to_string(),
                genre: Some("Software".to_string()),
                copies: 2,
            },
        );
        let line = format_book(&book);
        assert!(line.contains("#1"));
        assert!(line.contains("Clean Code - Robert C. Martin"));
        assert!(line.contains("[Software]"));
        assert!(line.contains("2/2 available"));
        assert!(!line.contains("waiting"));
    }

    #[test]
    fn book_line_counts_waiters() {
        let mut book = Book::new(
            BookId::new(1),
            NewBook {
                title: "Clean Code".to_string(),
                author: "Robert C. Martin".to_string(),
                genre: None,
                copies: 1,
            },
        );
        book.take_copy();
        book.enqueue_reservation(MemberId::new(2));
        assert!(format_book(&book).contains("(1 waiting)"));

        book.enqueue_reservation(MemberId::new(3));
        assert!(format_book(&book).contains("(2 waiting)"));
    }

    #[test]
    fn member_line_shows_tier_and_load() {
        let member = Member::new(
            MemberId::new(2),
            NewMember {
                name: "Alice".to_string(),
                tier: MembershipTier::Premium,
                borrow_limit: BorrowLimit::new(5).unwrap(),
            },
        );
        let line = format_member(&member);
        assert!(line.contains("#2  Alice"));
        assert!(line.contains("premium"));
        assert!(line.contains("0/5 on loan"));
    }

    #[test]
    fn list_formatting_applies_prefix() {
        let formatted = format_list(&["a", "b"], "  - ");
        assert_eq!(formatted, "  - a\n  - b");
    }
}
