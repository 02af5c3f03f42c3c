//! store::memory
//!
//! In-memory store implementations.
//!
//! # Design
//!
//! Each store is a reader-writer-locked `BTreeMap` keyed by raw id plus an
//! atomic id sequence starting at 1. The ordered map makes `find_all`
//! deterministic (ascending id), which keeps downstream orderings such as
//! recommendation tie-breaks reproducible.
//!
//! Entities go in and out by value: readers get clones, writers replace the
//! stored value wholesale. Single-key operations are atomic under the lock;
//! cross-entity coordination is the lending service's job.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::core::book::{Book, NewBook};
use crate::core::member::{Member, NewMember};
use crate::core::types::{BookId, MemberId};

use super::traits::{BookStore, MemberStore, StoreError};

fn read_guard<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, StoreError> {
    lock.read().map_err(|e| StoreError::Poisoned(e.to_string()))
}

fn write_guard<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, StoreError> {
    lock.write().map_err(|e| StoreError::Poisoned(e.to_string()))
}

/// In-memory book store.
#[derive(Debug)]
pub struct InMemoryBookStore {
    books: RwLock<BTreeMap<u64, Book>>,
    next_id: AtomicU64,
}

impl InMemoryBookStore {
    /// Create an empty store. Ids start at 1.
    pub fn new() -> Self {
        Self {
            books: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for InMemoryBookStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookStore for InMemoryBookStore {
    fn create(&self, draft: NewBook) -> Result<Book, StoreError> {
        let id = BookId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        let book = Book::new(id, draft);
        write_guard(&self.books)?.insert(id.get(), book.clone());
        Ok(book)
    }

    fn save(&self, book: &Book) -> Result<(), StoreError> {
        write_guard(&self.books)?.insert(book.id().get(), book.clone());
        Ok(())
    }

    fn find_by_id(&self, id: BookId) -> Result<Option<Book>, StoreError> {
        Ok(read_guard(&self.books)?.get(&id.get()).cloned())
    }

    fn find_all(&self) -> Result<Vec<Book>, StoreError> {
        Ok(read_guard(&self.books)?.values().cloned().collect())
    }

    fn find_by_query(&self, query: &str) -> Result<Vec<Book>, StoreError> {
        Ok(read_guard(&self.books)?
            .values()
            .filter(|b| b.matches_query(query))
            .cloned()
            .collect())
    }

    fn delete(&self, id: BookId) -> Result<(), StoreError> {
        write_guard(&self.books)?.remove(&id.get());
        Ok(())
    }
}

/// In-memory member store.
#[derive(Debug)]
pub struct InMemoryMemberStore {
    members: RwLock<BTreeMap<u64, Member>>,
    next_id: AtomicU64,
}

impl InMemoryMemberStore {
    /// Create an empty store. Ids start at 1.
    pub fn new() -> Self {
        Self {
            members: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for InMemoryMemberStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemberStore for InMemoryMemberStore {
    fn create(&self, draft: NewMember) -> Result<Member, StoreError> {
        let id = MemberId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        let member = Member::new(id, draft);
        write_guard(&self.members)?.insert(id.get(), member.clone());
        Ok(member)
    }

    fn save(&self, member: &Member) -> Result<(), StoreError> {
        write_guard(&self.members)?.insert(member.id().get(), member.clone());
        Ok(())
    }

    fn find_by_id(&self, id: MemberId) -> Result<Option<Member>, StoreError> {
        Ok(read_guard(&self.members)?.get(&id.get()).cloned())
    }

    fn find_all(&self) -> Result<Vec<Member>, StoreError> {
        Ok(read_guard(&self.members)?.values().cloned().collect())
    }

    fn delete(&self, id: MemberId) -> Result<(), StoreError> {
        write_guard(&self.members)?.remove(&id.get());
        Ok(())
    }
}
