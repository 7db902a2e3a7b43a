//! Network Module
//!
//! HTTP server and request routing.
//!
//! ## Architecture
//! - Multi-threaded tokio runtime, one task per connection
//! - axum router mapping `/info`, `/stop`, `/update` onto engine commands
//! - Engine shared across tasks behind an `Arc`

mod pages;
mod routes;
mod server;

pub use pages::{BAD_UPDATE_PAGE, UPDATE_PAGE};
pub use routes::create_router;
pub use server::Server;
