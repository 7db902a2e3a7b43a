//! Protocol Module
//!
//! Maps HTTP requests to engine commands and engine results to HTTP
//! responses.
//!
//! ## Routes
//! - `GET /info`         → `Command::GetSystem`
//! - `GET /stop?id=<id>` → `Command::GetStop`
//! - `POST /update`      → `Command::Update`
//!
//! ## Response Bodies
//! - Success: JSON snapshot followed by a newline (`/update`: empty)
//! - Client errors: `400 Bad Request: <message>` as plain text
//! - Serialization failure: `Internal Server Error` with status 500

mod command;
mod response;

pub use command::{Command, CommandType, Reply};
pub use response::{ContentType, Response};
