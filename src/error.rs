//! Error types for transitboard
//!
//! Provides a unified error type for all operations, plus the coarse
//! [`ErrorKind`] taxonomy the HTTP boundary maps onto status codes.

use thiserror::Error;

/// Result type alias using TransitError
pub type Result<T> = std::result::Result<T, TransitError>;

/// Unified error type for transitboard operations
#[derive(Debug, Error)]
pub enum TransitError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Startup Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Duplicate station id in configuration ({0})")]
    DuplicateStation(String),

    // -------------------------------------------------------------------------
    // Client Input Errors
    // -------------------------------------------------------------------------
    #[error("Missing stop ID")]
    MissingStopId,

    #[error("Malformed update: {0}")]
    MalformedUpdate(String),

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("Invalid stop id ({0})")]
    InvalidStop(String),

    #[error("Invalid station ID")]
    InvalidStation,

    #[error("Invalid line ID")]
    InvalidLine,

    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    #[error("Line index out of bounds")]
    IndexOutOfBounds,

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Failure categories surfaced to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or missing client input
    BadRequest,

    /// Referenced station or line does not exist
    NotFound,

    /// Direction index outside {0, 1}
    ValidationFailure,

    /// Response could not be produced
    InternalError,

    /// Configuration missing or malformed; the process must not start
    FatalStartup,
}

impl TransitError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TransitError::Io(_) | TransitError::Config(_) | TransitError::DuplicateStation(_) => {
                ErrorKind::FatalStartup
            }
            TransitError::MissingStopId
            | TransitError::MalformedUpdate(_)
            | TransitError::MethodNotAllowed(_) => ErrorKind::BadRequest,
            TransitError::InvalidStop(_) | TransitError::InvalidStation | TransitError::InvalidLine => {
                ErrorKind::NotFound
            }
            TransitError::IndexOutOfBounds => ErrorKind::ValidationFailure,
            TransitError::Serialization(_) => ErrorKind::InternalError,
        }
    }
}

impl From<serde_json::Error> for TransitError {
    fn from(e: serde_json::Error) -> Self {
        TransitError::Serialization(e.to_string())
    }
}
