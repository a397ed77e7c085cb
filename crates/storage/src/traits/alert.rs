use async_trait::async_trait;
use fieldsense_core::{Alert, NewAlert};

use crate::error::StorageError;

/// Alert rows. Insert-only except for the one-way unread -> read
/// transition; there is no "mark unread" and no delete.
#[async_trait]
pub trait AlertStore: Send + Sync {
    /// Insert an alert with `is_read = false`, `is_active = true`.
    async fn create_alert(&self, new: NewAlert) -> Result<Alert, StorageError>;

    /// All alerts for the user, newest first.
    async fn alerts_by_user(&self, user_id: &str) -> Result<Vec<Alert>, StorageError>;

    /// Alerts with `is_read = false`, newest first. The length of this
    /// list drives the UI's unread badge.
    async fn unread_alerts(&self, user_id: &str) -> Result<Vec<Alert>, StorageError>;

    /// Alerts with `is_active = true`, newest first.
    async fn active_alerts(&self, user_id: &str) -> Result<Vec<Alert>, StorageError>;

    /// Set `is_read = true`. No-op success when the id is absent: the UI
    /// dismiss action is fire-and-forget and must not error. Idempotent.
    async fn mark_alert_read(&self, id: &str) -> Result<(), StorageError>;
}
