//! store::traits
//!
//! Repository capability traits.
//!
//! # Design
//!
//! The lending service talks to storage exclusively through these traits: a
//! minimal key-value capability per entity type. `create` takes a draft and
//! returns the entity with a store-issued id; `save` persists the current
//! state of an already-created entity. Ids are minted by the store (an
//! internal sequence), never by callers.
//!
//! Implementations MUST:
//! - be thread-safe (`Send + Sync`) with atomic single-key operations
//! - issue ids monotonically and never reuse them
//! - return entities by value; a loaded entity is a private copy until it is
//!   written back with `save`
//!
//! # Example
//!
//! ```ignore
//! use circulate::store::{BookStore, StoreError};
//!
//! fn shelf_count(store: &dyn BookStore) -> Result<usize, StoreError> {
//!     Ok(store.find_all()?.len())
//! }
//! ```

use thiserror::Error;

use crate::core::book::{Book, NewBook};
use crate::core::member::{Member, NewMember};
use crate::core::types::{BookId, MemberId};

/// Errors from the storage layer.
///
/// These are unrecoverable backend failures, not domain conditions; the
/// service propagates them unchanged.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A store lock was poisoned by a panicking writer.
    #[error("store lock poisoned: {0}")]
    Poisoned(String),
}

/// Storage capability for books.
pub trait BookStore: Send + Sync {
    /// Persist a new book, issuing its id.
    fn create(&self, draft: NewBook) -> Result<Book, StoreError>;

    /// Persist the current state of an existing book.
    fn save(&self, book: &Book) -> Result<(), StoreError>;

    /// Look up a book by id.
    fn find_by_id(&self, id: BookId) -> Result<Option<Book>, StoreError>;

    /// All books in ascending id order.
    fn find_all(&self) -> Result<Vec<Book>, StoreError>;

    /// Books whose title or author contains `query`, case-insensitively.
    fn find_by_query(&self, query: &str) -> Result<Vec<Book>, StoreError>;

    /// Remove a book if present. Removing an absent id is a no-op.
    fn delete(&self, id: BookId) -> Result<(), StoreError>;

    /// Whether a book with this id exists.
    ///
    /// Default implementation uses `find_by_id`.
    fn exists(&self, id: BookId) -> Result<bool, StoreError> {
        Ok(self.find_by_id(id)?.is_some())
    }
}

/// Storage capability for members.
pub trait MemberStore: Send + Sync {
    /// Persist a new member, issuing their id.
    fn create(&self, draft: NewMember) -> Result<Member, StoreError>;

    /// Persist the current state of an existing member.
    fn save(&self, member: &Member) -> Result<(), StoreError>;

    /// Look up a member by id.
    fn find_by_id(&self, id: MemberId) -> Result<Option<Member>, StoreError>;

    /// All members in ascending id order.
    fn find_all(&self) -> Result<Vec<Member>, StoreError>;

    /// Remove a member if present. Removing an absent id is a no-op.
    fn delete(&self, id: MemberId) -> Result<(), StoreError>;

    /// Whether a member with this id exists.
    ///
    /// Default implementation uses `find_by_id`.
    fn exists(&self, id: MemberId) -> Result<bool, StoreError> {
        Ok(self.find_by_id(id)?.is_some())
    }
}
