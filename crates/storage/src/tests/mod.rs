//! Behavior tests for the storage traits, run against `MemStorage`.
//!
//! The Postgres backend is covered by `tests/pg_integration.rs` (ignored
//! unless `DATABASE_URL` is set); the contracts asserted here are the same.

#![allow(clippy::unwrap_used, reason = "test code")]

mod alert_tests;
mod field_tests;

use chrono::{Duration, Utc};
use fieldsense_core::{NewAlert, NewField, UpsertUser};

use crate::mem::MemStorage;
use crate::traits::{FieldStore, UserStore};

pub(crate) async fn seeded_user(storage: &MemStorage, id: &str) {
    storage
        .upsert_user(UpsertUser {
            id: id.to_owned(),
            email: Some(format!("{id}@example.com")),
            first_name: None,
            last_name: None,
            profile_image_url: None,
            role: fieldsense_core::UserRole::Farmer,
        })
        .await
        .unwrap();
}

pub(crate) fn new_field(user_id: &str, name: &str) -> NewField {
    NewField {
        name: name.to_owned(),
        user_id: user_id.to_owned(),
        latitude: -1.2921,
        longitude: 36.8219,
        size: Some(10.0),
        crop_type: fieldsense_core::CropType::Maize,
        planting_date: None,
        expected_harvest_date: None,
        location: Some("Nairobi County".to_owned()),
    }
}

pub(crate) fn new_alert(user_id: &str, title: &str) -> NewAlert {
    NewAlert {
        user_id: user_id.to_owned(),
        field_id: None,
        kind: fieldsense_core::AlertKind::Health,
        priority: fieldsense_core::AlertPriority::Medium,
        title: title.to_owned(),
        description: None,
    }
}

pub(crate) async fn seeded_field(storage: &MemStorage, user_id: &str, name: &str) -> String {
    seeded_user(storage, user_id).await;
    storage.create_field(new_field(user_id, name)).await.unwrap().id
}

pub(crate) fn days_ago(days: i64) -> chrono::DateTime<Utc> {
    Utc::now() - Duration::days(days)
}
