use std::sync::Arc;

use fieldsense_core::{Alert, NewAlert};
use fieldsense_storage::traits::{AlertStore, Storage};

use crate::ServiceError;

/// Alert creation, the per-user lists, and the one-way read transition.
pub struct AlertService {
    storage: Arc<dyn AlertStore>,
}

impl AlertService {
    pub fn new<S: Storage + 'static>(storage: &Arc<S>) -> Self {
        let storage: Arc<dyn AlertStore> = storage.clone();
        Self { storage }
    }

    pub async fn create(&self, new: NewAlert) -> Result<Alert, ServiceError> {
        if new.title.trim().is_empty() {
            return Err(ServiceError::Validation("alert title is required".to_owned()));
        }
        Ok(self.storage.create_alert(new).await?)
    }

    pub async fn list_for(&self, user_id: &str) -> Result<Vec<Alert>, ServiceError> {
        Ok(self.storage.alerts_by_user(user_id).await?)
    }

    pub async fn unread_for(&self, user_id: &str) -> Result<Vec<Alert>, ServiceError> {
        Ok(self.storage.unread_alerts(user_id).await?)
    }

    pub async fn active_for(&self, user_id: &str) -> Result<Vec<Alert>, ServiceError> {
        Ok(self.storage.active_alerts(user_id).await?)
    }

    /// Unread -> read. No-op success on an unknown id; the UI dismiss
    /// action is fire-and-forget.
    pub async fn mark_read(&self, id: &str) -> Result<(), ServiceError> {
        Ok(self.storage.mark_alert_read(id).await?)
    }
}
