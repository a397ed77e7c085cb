use async_trait::async_trait;
use fieldsense_core::{UpsertUser, User};

use crate::error::StorageError;

/// User rows. Users are created on first login and updated on subsequent
/// logins (upsert by the externally assigned id).
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Get a user by id.
    async fn get_user(&self, id: &str) -> Result<Option<User>, StorageError>;

    /// Insert or update a user by id, refreshing `updated_at` on conflict
    /// and preserving `created_at`.
    async fn upsert_user(&self, user: UpsertUser) -> Result<User, StorageError>;
}
