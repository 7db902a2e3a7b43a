//! Response definitions
//!
//! Represents responses to clients, independent of the HTTP server.

use axum::http::StatusCode;
use bytes::Bytes;
use serde::Serialize;

use crate::error::{ErrorKind, TransitError};

use super::Reply;

/// Body media type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Text,
    Json,
    Html,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Text => "text/plain; charset=utf-8",
            ContentType::Json => "application/json",
            ContentType::Html => "text/html; charset=utf-8",
        }
    }
}

/// A response to send to client
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: ContentType,
    pub body: Bytes,
}

impl Response {
    /// 200 with a JSON body, or 500 if the value cannot be serialized
    pub fn json<T: Serialize>(value: &T) -> Self {
        match serde_json::to_vec(value) {
            Ok(mut body) => {
                body.push(b'\n');
                Self {
                    status: StatusCode::OK,
                    content_type: ContentType::Json,
                    body: Bytes::from(body),
                }
            }
            Err(e) => Self::from_error(&TransitError::from(e)),
        }
    }

    /// 200 with no body
    pub fn empty() -> Self {
        Self {
            status: StatusCode::OK,
            content_type: ContentType::Text,
            body: Bytes::new(),
        }
    }

    /// Plain-text body, newline terminated
    pub fn text(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            content_type: ContentType::Text,
            body: Bytes::from(format!("{}\n", message)),
        }
    }

    /// HTML page body
    pub fn html(status: StatusCode, page: impl Into<Bytes>) -> Self {
        Self {
            status,
            content_type: ContentType::Html,
            body: page.into(),
        }
    }

    /// `400 Bad Request: <message>`
    pub fn bad_request(message: &str) -> Self {
        Self::text(
            StatusCode::BAD_REQUEST,
            &format!("400 Bad Request: {}", message),
        )
    }

    /// 500 with the standard body
    pub fn internal_error() -> Self {
        Self::text(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
    }

    /// Map a successful engine result
    pub fn from_reply(reply: &Reply) -> Self {
        match reply {
            Reply::System(system) => Self::json(system),
            Reply::Station(station) => Self::json(station),
            Reply::Updated { .. } => Self::empty(),
        }
    }

    /// Map an engine error
    ///
    /// Not-found and validation failures are client errors: the request
    /// named something that does not exist or an invalid direction.
    pub fn from_error(error: &TransitError) -> Self {
        match error.kind() {
            ErrorKind::BadRequest | ErrorKind::NotFound | ErrorKind::ValidationFailure => {
                Self::bad_request(&error.to_string())
            }
            ErrorKind::InternalError | ErrorKind::FatalStartup => Self::internal_error(),
        }
    }

    /// Body as UTF-8 text (lossy)
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
