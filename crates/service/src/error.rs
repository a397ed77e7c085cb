//! Typed error enum for the service layer.

use fieldsense_storage::StorageError;
use thiserror::Error;

/// Service-layer error: storage failures plus input validation.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, not found, constraint, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Caller provided invalid input (missing name, bad coordinates).
    #[error("invalid input: {0}")]
    Validation(String),
}

impl ServiceError {
    /// Whether this error represents a not-found condition.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Storage(StorageError::NotFound { .. }))
    }
}
