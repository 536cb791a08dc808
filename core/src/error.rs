//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because the edit and toggle flows read
//! a single item before writing it back. All other non-2xx responses land in
//! `Http` with the raw status code. A transport failure means no response was
//! produced at all.

use thiserror::Error;

/// Errors produced while talking to the todo API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}")]
    Http { status: u16 },

    /// A successful response carried no usable JSON payload.
    #[error("response carried no JSON payload")]
    EmptyPayload,

    /// The payload was JSON but not the expected shape.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(String),
}

impl ApiError {
    /// Classify a non-success status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => ApiError::NotFound,
            0 => ApiError::Transport("no response".to_string()),
            status => ApiError::Http { status },
        }
    }
}
