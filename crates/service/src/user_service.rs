use std::sync::Arc;

use fieldsense_core::{UpsertUser, User};
use fieldsense_storage::traits::{Storage, UserStore};

use crate::ServiceError;

/// User lookup and upsert-on-login.
pub struct UserService {
    storage: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new<S: Storage + 'static>(storage: &Arc<S>) -> Self {
        let storage: Arc<dyn UserStore> = storage.clone();
        Self { storage }
    }

    pub async fn get(&self, id: &str) -> Result<Option<User>, ServiceError> {
        Ok(self.storage.get_user(id).await?)
    }

    /// Called on every login. The identity (id) comes from upstream auth;
    /// profile fields are refreshed in place.
    pub async fn upsert(&self, user: UpsertUser) -> Result<User, ServiceError> {
        if user.id.trim().is_empty() {
            return Err(ServiceError::Validation("user id is required".to_owned()));
        }
        Ok(self.storage.upsert_user(user).await?)
    }
}
