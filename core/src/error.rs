//! Error type for the clinic API client.
//!
//! # Design
//! A single error kind flows through every layer. The gateway classifies a
//! round-trip into `Transport` (the request never completed) or `Http` (the
//! server answered outside 2xx, with the raw status, reason phrase, and body
//! kept for debugging). Services re-raise errors unchanged — no wrapping, no
//! retries, no recovery.

use std::fmt;

/// Errors returned by the gateway and passed through by every service.
#[derive(Debug)]
pub enum ApiError {
    /// The request could not be completed (connect failure, I/O error).
    Transport(String),

    /// The server responded with a non-2xx status.
    Http {
        status: u16,
        status_text: String,
        body: String,
    },

    /// The request payload could not be serialized to JSON.
    Serialization(String),

    /// The response payload could not be deserialized into the expected type.
    Deserialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport failure: {msg}"),
            ApiError::Http {
                status,
                status_text,
                body,
            } => {
                write!(f, "HTTP {status} {status_text}: {body}")
            }
            ApiError::Serialization(msg) => write!(f, "serialization failed: {msg}"),
            ApiError::Deserialization(msg) => write!(f, "deserialization failed: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
