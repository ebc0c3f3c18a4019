//! Cross-cutting error types for TaskFlow.
//!
//! This module defines errors that can originate from any crate in the system.
//! Domain-specific errors (e.g., `StoreError`, `ConfigError`) are defined in
//! their respective crates and converge into `anyhow` inside `tf-cli`.

use thiserror::Error;

/// Errors that can be raised by any TaskFlow crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Shorthand for a missing task.
    #[must_use]
    pub fn task_not_found(id: &str) -> Self {
        Self::NotFound {
            entity_type: "task".to_string(),
            id: id.to_string(),
        }
    }

    /// Whether this error reports a missing entity.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
