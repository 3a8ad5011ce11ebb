/// Storage-specific errors
use roster_core::UserId;
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// No record carries the requested id
    #[error("User not found")]
    UserNotFound(UserId),
}

impl StorageError {
    /// Id that failed to resolve
    pub fn user_id(&self) -> &UserId {
        match self {
            Self::UserNotFound(id) => id,
        }
    }
}
