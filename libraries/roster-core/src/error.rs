/// Core error types for Roster
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Roster
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Date string is not ISO-8601
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Role outside the allowed set
    #[error("Invalid role: {0}")]
    InvalidRole(String),

    /// Status outside the allowed set
    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CoreError {
    /// Create an invalid date error
    pub fn invalid_date(value: impl Into<String>) -> Self {
        Self::InvalidDate(value.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
