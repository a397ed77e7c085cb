use super::*;
use fieldsense_core::{CropType, FieldPatch};
use crate::StorageError;

#[tokio::test]
async fn create_then_get_round_trips() {
    let storage = MemStorage::new();
    seeded_user(&storage, "u1").await;

    let created = storage.create_field(new_field("u1", "North paddock")).await.unwrap();
    let fetched = storage.get_field(&created.id).await.unwrap().unwrap();

    assert_eq!(fetched.name, "North paddock");
    assert_eq!(fetched.user_id, "u1");
    assert_eq!(fetched.latitude, -1.2921);
    assert_eq!(fetched.size, Some(10.0));
    assert_eq!(fetched.crop_type, CropType::Maize);
    assert_eq!(fetched.location.as_deref(), Some("Nairobi County"));
}

#[tokio::test]
async fn fields_by_user_is_ordered_by_name() {
    let storage = MemStorage::new();
    seeded_user(&storage, "u1").await;
    seeded_user(&storage, "u2").await;

    storage.create_field(new_field("u1", "Zebra strip")).await.unwrap();
    storage.create_field(new_field("u1", "Acacia plot")).await.unwrap();
    storage.create_field(new_field("u2", "Other farm")).await.unwrap();

    let fields = storage.fields_by_user("u1").await.unwrap();
    let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["Acacia plot", "Zebra strip"]);
}

#[tokio::test]
async fn update_merges_and_refreshes_updated_at() {
    let storage = MemStorage::new();
    seeded_user(&storage, "u1").await;
    let created = storage.create_field(new_field("u1", "North paddock")).await.unwrap();

    let patch = FieldPatch {
        name: Some("Renamed".to_owned()),
        size: Some(22.5),
        ..FieldPatch::default()
    };
    let updated = storage.update_field(&created.id, patch).await.unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.size, Some(22.5));
    assert_eq!(updated.latitude, created.latitude);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn update_unknown_field_is_not_found() {
    let storage = MemStorage::new();
    let err = storage.update_field("missing", FieldPatch::default()).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { entity: "field", .. }));
}

#[tokio::test]
async fn delete_then_get_is_none_and_double_delete_is_ok() {
    let storage = MemStorage::new();
    seeded_user(&storage, "u1").await;
    let created = storage.create_field(new_field("u1", "North paddock")).await.unwrap();

    storage.delete_field(&created.id).await.unwrap();
    assert!(storage.get_field(&created.id).await.unwrap().is_none());

    // Double delete is a no-op success.
    storage.delete_field(&created.id).await.unwrap();
}

#[tokio::test]
async fn create_without_owner_is_rejected() {
    let storage = MemStorage::new();
    let err = storage.create_field(new_field("ghost", "Orphan")).await.unwrap_err();
    assert!(matches!(err, StorageError::Constraint(_)));
}
