//! Error types for the Roster client.

use thiserror::Error;

/// Message the server attaches to mutations that target an unknown id.
pub const USER_NOT_FOUND: &str = "User not found";

/// Errors that can occur when talking to a Roster GraphQL endpoint.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned a non-success HTTP status
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// The response carried GraphQL errors
    #[error("GraphQL error: {message}")]
    Graphql { message: String },

    /// The response had neither errors nor data
    #[error("Response contained no data")]
    EmptyResponse,

    /// Invalid endpoint URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Request exceeded the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),
}

impl ClientError {
    /// Whether the server reported the targeted record as missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Graphql { message } if message == USER_NOT_FOUND)
    }

    pub(crate) fn from_send(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else if error.is_connect() {
            Self::ServerUnreachable(error.to_string())
        } else {
            Self::Request(error)
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
