//! Catalog commands - add, remove, list, search

use crate::cli::args::SearchField;
use crate::core::book::NewBook;
use crate::core::types::BookId;
use crate::service::{LendingError, LendingService};
use crate::ui::output;
use crate::ui::Verbosity;

/// Add a book to the catalog.
pub fn add_book(
    service: &LendingService,
    title: String,
    author: String,
    genre: Option<String>,
    copies: u32,
    verbosity: Verbosity,
) -> Result<(), LendingError> {
    let book = service.add_book(NewBook {
        title,
        author,
        genre,
        copies,
    })?;
    output::print(format!("Added: {}", output::format_book(&book)), verbosity);
    Ok(())
}

/// Remove a book from the catalog.
pub fn remove_book(
    service: &LendingService,
    book: BookId,
    verbosity: Verbosity,
) -> Result<(), LendingError> {
    service.remove_book(book)?;
    output::print(format!("Removed book #{}.", book), verbosity);
    Ok(())
}

/// List the catalog, optionally filtered by availability.
pub fn list(
    service: &LendingService,
    available: bool,
    unavailable: bool,
    verbosity: Verbosity,
) -> Result<(), LendingError> {
    let books = if available {
        service.search_by_availability(true)?
    } else if unavailable {
        service.search_by_availability(false)?
    } else {
        service.list_books()?
    };

    if books.is_empty() {
        output::print("No books found.", verbosity);
        return Ok(());
    }
    for book in &books {
        output::print(output::format_book(book), verbosity);
    }
    Ok(())
}

/// Search books by substring.
pub fn search(
    service: &LendingService,
    query: &str,
    field: SearchField,
    verbosity: Verbosity,
) -> Result<(), LendingError> {
    let books = match field {
        SearchField::Any => service.search_books(query)?,
        SearchField::Title => service.search_by_title(query)?,
        SearchField::Author => service.search_by_author(query)?,
    };

    if books.is_empty() {
        output::print(format!("No results for '{}'.", query), verbosity);
        return Ok(());
    }
    for book in &books {
        output::print(output::format_book(book), verbosity);
    }
    Ok(())
}
