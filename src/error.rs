// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client error types.

/// Message shown to the user when the server rejects the stored token.
pub const LOGIN_EXPIRED_MESSAGE: &str = "Login expired, please log in again";

/// Error returned by every fallible client operation.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server answered 401. The dispatcher has already cleared the
    /// token and navigated to the login route by the time this is returned.
    #[error("{}", LOGIN_EXPIRED_MESSAGE)]
    Unauthorized,

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// No HTTP response at all: connect failure, timeout, reset.
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request could not be built: {0}")]
    Request(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ClientError {
    /// True when the server rejected the credentials (HTTP 401).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized)
    }

    /// HTTP status carried by this error, if the server responded.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Unauthorized => Some(401),
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the failure happened before any HTTP response arrived.
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
