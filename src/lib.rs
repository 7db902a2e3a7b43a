//! # transitboard
//!
//! A small HTTP service publishing transit-system metadata (stops, lines,
//! arrival times) and accepting external updates to arrival times:
//! - In-memory system loaded once from a JSON document
//! - Multi-reader/single-writer concurrency over one RwLock
//! - All-or-nothing update batches
//! - HTTP surface: `/info`, `/stop`, `/update`
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      HTTP Server                             │
//! │              (axum, one task per connection)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Engine                                 │
//! │            (query snapshots / apply updates)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!               ┌───────────────┐      ┌───────────────┐
//!               │  SystemStore  │─────▶│ StationIndex  │
//!               │   (RwLock)    │      │  (immutable)  │
//!               └───────┬───────┘      └───────────────┘
//!                       │
//!                       ▼
//!               ┌───────────────┐
//!               │    System     │
//!               │ Stations/Lines│
//!               └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod model;
pub mod store;
pub mod engine;
pub mod protocol;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ErrorKind, Result, TransitError};
pub use config::Config;
pub use engine::Engine;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of transitboard
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
