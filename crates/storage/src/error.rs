//! Typed error enum for the storage layer.
//!
//! Callers match on specific failure modes (not found, constraint
//! violations, transient DB errors) instead of downcasting opaque boxes.

use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Row not found for an expected-present entity.
    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// Foreign-key or unique constraint violation.
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// SQL / connection / timeout failure.
    #[cfg(feature = "postgres")]
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Migration failure.
    #[error("migration error: {0}")]
    Migration(String),
}

impl StorageError {
    #[must_use]
    pub fn not_found(entity: &'static str, id: &str) -> Self {
        Self::NotFound { entity, id: id.to_owned() }
    }

    /// Whether this error is a not-found condition.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether this error is likely transient (worth retrying by a caller;
    /// nothing in this workspace retries).
    #[must_use]
    pub fn is_transient(&self) -> bool {
        #[cfg(feature = "postgres")]
        {
            matches!(self, Self::Database(sqlx::Error::PoolTimedOut | sqlx::Error::Io(_)))
        }
        #[cfg(not(feature = "postgres"))]
        {
            false
        }
    }
}

/// Custom `From<sqlx::Error>` — NOT blanket `#[from]`.
///
/// - `RowNotFound` → `NotFound` (generic; callers remap with entity context)
/// - SQLSTATE 23503/23505 → `Constraint`
/// - Everything else → `Database`
#[cfg(feature = "postgres")]
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound { entity: "row", id: "unknown".into() },
            sqlx::Error::Database(db_err)
                if db_err.code().is_some_and(|c| c == "23503" || c == "23505") =>
            {
                Self::Constraint(db_err.message().to_owned())
            },
            _ => Self::Database(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_carries_entity_and_id() {
        let err = StorageError::not_found("field", "f-1");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "not found: field with id f-1");
    }

    #[test]
    fn migration_failures_are_distinguishable_from_query_failures() {
        let err = StorageError::Migration("relation already exists".to_owned());
        assert!(!err.is_not_found());
        assert!(!err.is_transient());
        assert_eq!(err.to_string(), "migration error: relation already exists");
    }

    #[cfg(feature = "postgres")]
    #[test]
    fn row_not_found_maps_to_not_found() {
        let err = StorageError::from(sqlx::Error::RowNotFound);
        assert!(err.is_not_found());
    }

    #[cfg(feature = "postgres")]
    #[test]
    fn pool_timeout_is_transient() {
        let err = StorageError::from(sqlx::Error::PoolTimedOut);
        assert!(err.is_transient());
    }
}
