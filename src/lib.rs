//! Circulate - a library circulation service and CLI
//!
//! Circulate tracks a library's inventory and its members' borrowing
//! activity: registering books and members, lending and returning copies,
//! queuing reservations when a title runs out, and ranking candidate books
//! for a member with a simple recommendation score.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, runs the session)
//! - [`service`] - The lending service; the only place entity state changes
//! - [`core`] - Domain types, entities, clock, and configuration
//! - [`store`] - Storage capability traits and the in-memory stores
//! - [`ui`] - Output formatting utilities
//!
//! # Correctness Invariants
//!
//! Circulate maintains the following invariants:
//!
//! 1. For every book, `0 <= available_copies <= total_copies`; copies on
//!    loan and copies on the shelf always sum to the total
//! 2. No member ever holds more active loans than their borrow limit, or
//!    two simultaneous loans of the same title
//! 3. Reservation queues are FIFO and duplicate-free; a freed copy goes to
//!    the oldest resolvable reservation first
//! 4. All mutations flow through the lending service, serialized behind a
//!    single write lock

pub mod cli;
pub mod core;
pub mod service;
pub mod store;
pub mod ui;
