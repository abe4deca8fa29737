//! Error types for the snippet API client.
//!
//! # Design
//! Local precondition failures (`MissingRequiredField`) are kept apart from
//! remote failures so callers can tell "you never sent anything" from "the
//! server said no." Unexpected statuses land in `Transport` with the raw
//! status code and body for debugging; `RemoteRejected` is reserved for the
//! delete acknowledgment envelope, which reports failure inside a 200.

use std::fmt;

/// Errors returned by `SnippetClient` build and parse methods.
#[derive(Debug)]
pub enum ApiError {
    /// A required input field was empty (or zero, for the version). The
    /// request was never built; carries the wire name of the field.
    MissingRequiredField(&'static str),

    /// The server returned a status other than the expected one.
    Transport { status: u16, body: String },

    /// The request payload could not be form-encoded.
    Encode(String),

    /// The response body could not be deserialized into the expected type.
    Decode(String),

    /// The server acknowledged the request but reported failure; carries the
    /// server-supplied message.
    RemoteRejected(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MissingRequiredField(field) => {
                write!(f, "missing required field: {field}")
            }
            ApiError::Transport { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::Encode(msg) => {
                write!(f, "form encoding failed: {msg}")
            }
            ApiError::Decode(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::RemoteRejected(msg) => {
                write!(f, "server rejected request: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
