//! Request/response body types for the HTTP API.
//!
//! Create requests deliberately omit `user_id`: ownership always comes
//! from the authenticated identity, never from the body.

use chrono::{DateTime, Utc};
use fieldsense_core::{AlertKind, AlertPriority, CropType, NewAlert, NewField};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateFieldRequest {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub size: Option<f64>,
    #[serde(default)]
    pub crop_type: CropType,
    #[serde(default)]
    pub planting_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expected_harvest_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: Option<String>,
}

impl CreateFieldRequest {
    #[must_use]
    pub fn into_new_field(self, user_id: String) -> NewField {
        NewField {
            name: self.name,
            user_id,
            latitude: self.latitude,
            longitude: self.longitude,
            size: self.size,
            crop_type: self.crop_type,
            planting_date: self.planting_date,
            expected_harvest_date: self.expected_harvest_date,
            location: self.location,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateAlertRequest {
    #[serde(default)]
    pub field_id: Option<String>,
    pub kind: AlertKind,
    pub priority: AlertPriority,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateAlertRequest {
    #[must_use]
    pub fn into_new_alert(self, user_id: String) -> NewAlert {
        NewAlert {
            user_id,
            field_id: self.field_id,
            kind: self.kind,
            priority: self.priority,
            title: self.title,
            description: self.description,
        }
    }
}

/// Profile payload for the upsert-on-login endpoint. The id comes from
/// the auth extractor, not the body.
#[derive(Debug, Deserialize)]
pub struct UpsertProfileRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub role: fieldsense_core::UserRole,
}

/// Body for the mock ingestion endpoints: which field to generate for.
#[derive(Debug, Deserialize)]
pub struct MockRequest {
    pub field_id: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
