//! Store Module
//!
//! The concurrency guard around the in-memory system.
//!
//! ## Responsibilities
//! - Own the single `System` aggregate for the process lifetime
//! - Allow any number of concurrent readers
//! - Give writers exclusive access (no readers, no other writers)
//! - Release the lock on every exit path, including errors and panics
//!
//! ## Data Structure Choice
//! One `parking_lot::RwLock` over the whole `System`:
//! - Single lock, never re-entered, so it cannot deadlock
//! - Access goes through closures; the guard is dropped when the closure
//!   returns, so no caller can hold it across a response write
//! - The station index sits outside the lock because it never changes

mod guard;

pub use guard::SystemStore;
