use async_trait::async_trait;
use fieldsense_core::{Field, FieldPatch, NewField};

use crate::error::StorageError;

/// CRUD over field rows. No cross-field invariants are enforced here
/// (no overlap checking between fields); input validation lives in the
/// service layer.
#[async_trait]
pub trait FieldStore: Send + Sync {
    /// Persist a new field scoped to `new.user_id`.
    async fn create_field(&self, new: NewField) -> Result<Field, StorageError>;

    /// All fields for a user, ordered by name ascending for deterministic
    /// UI ordering.
    async fn fields_by_user(&self, user_id: &str) -> Result<Vec<Field>, StorageError>;

    /// One field, or `None` if the id is unknown.
    async fn get_field(&self, id: &str) -> Result<Option<Field>, StorageError>;

    /// Merge the patch into the existing row and refresh `updated_at`.
    /// Returns `StorageError::NotFound` if the id is absent.
    async fn update_field(&self, id: &str, patch: FieldPatch) -> Result<Field, StorageError>;

    /// Remove the row. Idempotent: deleting an absent id is a no-op success.
    async fn delete_field(&self, id: &str) -> Result<(), StorageError>;
}
