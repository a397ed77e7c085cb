use std::sync::Arc;

use fieldsense_core::{Field, FieldPatch, NewField};
use fieldsense_storage::traits::{FieldStore, Storage};

use crate::ServiceError;

/// Field CRUD with input validation in front of the store.
pub struct FieldService {
    storage: Arc<dyn FieldStore>,
}

impl FieldService {
    pub fn new<S: Storage + 'static>(storage: &Arc<S>) -> Self {
        let storage: Arc<dyn FieldStore> = storage.clone();
        Self { storage }
    }

    pub async fn create(&self, new: NewField) -> Result<Field, ServiceError> {
        if new.name.trim().is_empty() {
            return Err(ServiceError::Validation("field name is required".to_owned()));
        }
        if !new.latitude.is_finite() || !new.longitude.is_finite() {
            return Err(ServiceError::Validation(
                "field coordinates must be finite numbers".to_owned(),
            ));
        }
        Ok(self.storage.create_field(new).await?)
    }

    pub async fn list_for(&self, user_id: &str) -> Result<Vec<Field>, ServiceError> {
        Ok(self.storage.fields_by_user(user_id).await?)
    }

    pub async fn get(&self, id: &str) -> Result<Option<Field>, ServiceError> {
        Ok(self.storage.get_field(id).await?)
    }

    pub async fn update(&self, id: &str, patch: FieldPatch) -> Result<Field, ServiceError> {
        if patch.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(ServiceError::Validation("field name cannot be blank".to_owned()));
        }
        Ok(self.storage.update_field(id, patch).await?)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        Ok(self.storage.delete_field(id).await?)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "test code")]

    use super::*;
    use fieldsense_core::{CropType, UpsertUser, UserRole};
    use fieldsense_storage::traits::UserStore;
    use fieldsense_storage::MemStorage;

    async fn service() -> (Arc<MemStorage>, FieldService) {
        let storage = Arc::new(MemStorage::new());
        storage
            .upsert_user(UpsertUser {
                id: "u1".to_owned(),
                email: None,
                first_name: None,
                last_name: None,
                profile_image_url: None,
                role: UserRole::Farmer,
            })
            .await
            .unwrap();
        let service = FieldService::new(&storage);
        (storage, service)
    }

    fn valid_field() -> NewField {
        NewField {
            name: "North paddock".to_owned(),
            user_id: "u1".to_owned(),
            latitude: -1.29,
            longitude: 36.82,
            size: None,
            crop_type: CropType::Maize,
            planting_date: None,
            expected_harvest_date: None,
            location: None,
        }
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let (_storage, service) = service().await;
        let new = NewField { name: "   ".to_owned(), ..valid_field() };
        let err = service.create(new).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn non_finite_coordinates_are_rejected() {
        let (_storage, service) = service().await;
        let new = NewField { latitude: f64::NAN, ..valid_field() };
        let err = service.create(new).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn valid_field_is_created_with_defaults() {
        let (_storage, service) = service().await;
        let field = service.create(valid_field()).await.unwrap();
        assert_eq!(field.crop_type, CropType::Maize);
        assert!(service.get(&field.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn patch_blanking_the_name_is_rejected() {
        let (_storage, service) = service().await;
        let field = service.create(valid_field()).await.unwrap();
        let err = service
            .update(&field.id, FieldPatch { name: Some(String::new()), ..FieldPatch::default() })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn update_missing_field_surfaces_not_found() {
        let (_storage, service) = service().await;
        let err = service.update("missing", FieldPatch::default()).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
