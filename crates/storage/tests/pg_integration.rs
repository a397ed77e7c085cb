//! Integration tests for PgStorage.
//! Run with: DATABASE_URL=... cargo test -p fieldsense-storage -- --ignored pg_

#![cfg(feature = "postgres")]
#![allow(clippy::unwrap_used, reason = "integration test code")]

use chrono::{Duration, Utc};
use fieldsense_core::{
    AlertKind, AlertPriority, CropType, FieldPatch, NewAlert, NewField, NewSatelliteReading,
    SatelliteReading, UpsertUser, UserRole,
};
use fieldsense_storage::traits::{AlertStore, FieldStore, SeriesStore, UserStore};
use fieldsense_storage::PgStorage;
use uuid::Uuid;

async fn create_pg_storage() -> PgStorage {
    let url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for PgStorage integration tests");
    PgStorage::new(&url).await.expect("Failed to connect to PostgreSQL")
}

fn unique_id() -> String {
    format!("test-{}", Uuid::new_v4())
}

async fn seed_user(storage: &PgStorage) -> String {
    let id = unique_id();
    storage
        .upsert_user(UpsertUser {
            id: id.clone(),
            email: Some(format!("{id}@example.com")),
            first_name: Some("Test".to_owned()),
            last_name: None,
            profile_image_url: None,
            role: UserRole::Farmer,
        })
        .await
        .unwrap();
    id
}

fn make_field(user_id: &str, name: &str) -> NewField {
    NewField {
        name: name.to_owned(),
        user_id: user_id.to_owned(),
        latitude: -1.2921,
        longitude: 36.8219,
        size: Some(10.0),
        crop_type: CropType::Maize,
        planting_date: None,
        expected_harvest_date: None,
        location: None,
    }
}

#[tokio::test]
#[ignore]
async fn pg_field_crud_round_trip() {
    let storage = create_pg_storage().await;
    let user_id = seed_user(&storage).await;

    let created = storage.create_field(make_field(&user_id, "North paddock")).await.unwrap();
    let fetched = storage.get_field(&created.id).await.unwrap().unwrap();
    assert_eq!(fetched.name, "North paddock");
    assert_eq!(fetched.user_id, user_id);
    assert_eq!(fetched.size, Some(10.0));

    let updated = storage
        .update_field(
            &created.id,
            FieldPatch { name: Some("Renamed".to_owned()), ..FieldPatch::default() },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Renamed");
    assert!(updated.updated_at >= created.updated_at);

    storage.delete_field(&created.id).await.unwrap();
    assert!(storage.get_field(&created.id).await.unwrap().is_none());
    storage.delete_field(&created.id).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn pg_latest_satellite_reading_is_max_date() {
    let storage = create_pg_storage().await;
    let user_id = seed_user(&storage).await;
    let field = storage.create_field(make_field(&user_id, "Series field")).await.unwrap();

    for (days, ndvi) in [(1_i64, 0.81), (5, 0.42)] {
        SeriesStore::<SatelliteReading>::append(
            &storage,
            NewSatelliteReading {
                field_id: field.id.clone(),
                date: Utc::now() - Duration::days(days),
                ndvi: Some(ndvi),
                evi: None,
                sarvi: None,
            },
        )
        .await
        .unwrap();
    }

    let latest: SatelliteReading = storage.latest_for(&field.id).await.unwrap().unwrap();
    assert_eq!(latest.ndvi, Some(0.81));

    let all: Vec<SatelliteReading> = storage.all_for(&field.id).await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all[0].date >= all[1].date);
}

#[tokio::test]
#[ignore]
async fn pg_alert_read_transition() {
    let storage = create_pg_storage().await;
    let user_id = seed_user(&storage).await;

    let alert = storage
        .create_alert(NewAlert {
            user_id: user_id.clone(),
            field_id: None,
            kind: AlertKind::Weather,
            priority: AlertPriority::High,
            title: "Storm warning".to_owned(),
            description: Some("Heavy rain expected".to_owned()),
        })
        .await
        .unwrap();
    assert!(!alert.is_read);
    assert!(alert.is_active);

    storage.mark_alert_read(&alert.id).await.unwrap();
    storage.mark_alert_read(&alert.id).await.unwrap();
    storage.mark_alert_read("does-not-exist").await.unwrap();

    let unread = storage.unread_alerts(&user_id).await.unwrap();
    assert!(unread.iter().all(|a| a.id != alert.id));
}
