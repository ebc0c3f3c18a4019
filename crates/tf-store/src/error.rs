//! Store error types for tf-store.

use thiserror::Error;
use tf_core::errors::CoreError;

/// Errors from record persistence and roster operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backend refused the write.
    #[error("Write rejected by {backend}")]
    WriteRejected { backend: String },

    /// An employee with this email is already on the roster.
    #[error("User already exists: {email}")]
    DuplicateUser { email: String },

    /// The identity lacks the role required for the action.
    #[error("Forbidden: {action} requires the admin role")]
    Forbidden { action: String },

    /// Entity lookup or domain validation failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
