//! Command definitions
//!
//! Represents requests routed to the engine.

use crate::error::{Result, TransitError};
use crate::model::{Station, System, Update};

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    GetSystem,
    GetStop,
    Update,
}

/// A parsed command
#[derive(Debug, Clone)]
pub enum Command {
    /// Snapshot of the whole system
    GetSystem,

    /// Snapshot of one station
    GetStop { id: String },

    /// Apply a batch of schedule replacements
    Update(Update),
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::GetSystem => CommandType::GetSystem,
            Command::GetStop { .. } => CommandType::GetStop,
            Command::Update(_) => CommandType::Update,
        }
    }

    /// Build a stop lookup from every `id` value in the query string
    ///
    /// Exactly one id is required; none or several is a bad request.
    pub fn get_stop(mut ids: Vec<String>) -> Result<Self> {
        match ids.len() {
            1 => Ok(Command::GetStop { id: ids.remove(0) }),
            _ => Err(TransitError::MissingStopId),
        }
    }

    /// Parse an update command from a raw request body
    pub fn update(body: &[u8]) -> Result<Self> {
        Update::from_slice(body).map(Command::Update)
    }
}

/// Successful engine result
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    System(System),
    Station(Station),

    /// Number of lines whose times were replaced
    Updated { lines: usize },
}
