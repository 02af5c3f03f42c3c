//! core
//!
//! Core domain types and entities for Circulate.
//!
//! # Modules
//!
//! - [`types`] - Strong types: BookId, MemberId, BorrowLimit, etc.
//! - [`book`] - The Book entity: copy accounting and reservations
//! - [`member`] - The Member entity: active loans and history
//! - [`loan`] - Loan records and history events
//! - [`clock`] - Clock seam for date-dependent logic
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Entities expose small invariant-preserving methods; only the lending
//!   service composes them into operations
//! - Date-dependent predicates are evaluated on demand, never cached

pub mod book;
pub mod clock;
pub mod config;
pub mod loan;
pub mod member;
pub mod types;
