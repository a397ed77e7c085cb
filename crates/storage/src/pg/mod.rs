//! PostgreSQL storage backend using sqlx.
//!
//! Split into modular files by domain concern.

mod alerts;
mod fields;
mod series;
mod users;

use chrono::{DateTime, Utc};
use fieldsense_core::{
    Alert, AlertKind, AlertPriority, CropType, Field, SatelliteReading, User, UserRole,
    WeatherReading, YieldPrediction, PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS,
    PG_POOL_MAX_CONNECTIONS,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use crate::error::StorageError;
use crate::pg_migrations::run_pg_migrations;

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Connect, run migrations, and hand back a ready backend.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(std::time::Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(std::time::Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_pg_migrations(&pool).await?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }

    /// Wrap an existing pool (migrations already run).
    #[must_use]
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Parse `CropType` from a text column, defaulting on corrupt data.
pub(crate) fn parse_pg_crop_type(s: &str) -> CropType {
    s.parse().unwrap_or_else(|_| {
        tracing::warn!(invalid_crop = %s, "corrupt crop_type in DB, defaulting to maize");
        CropType::default()
    })
}

pub(crate) fn parse_pg_user_role(s: &str) -> UserRole {
    s.parse().unwrap_or_else(|_| {
        tracing::warn!(invalid_role = %s, "corrupt role in DB, defaulting to farmer");
        UserRole::default()
    })
}

pub(crate) fn parse_pg_alert_kind(s: &str) -> AlertKind {
    s.parse().unwrap_or_else(|_| {
        tracing::warn!(invalid_kind = %s, "corrupt alert kind in DB, defaulting to health");
        AlertKind::Health
    })
}

pub(crate) fn parse_pg_alert_priority(s: &str) -> AlertPriority {
    s.parse().unwrap_or_else(|_| {
        tracing::warn!(invalid_priority = %s, "corrupt alert priority in DB, defaulting to medium");
        AlertPriority::Medium
    })
}

pub(crate) fn row_to_user(row: &sqlx::postgres::PgRow) -> Result<User, StorageError> {
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    let updated_at: DateTime<Utc> = row.try_get("updated_at")?;
    Ok(User {
        id: row.try_get("id")?,
        email: row.try_get("email")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        profile_image_url: row.try_get("profile_image_url")?,
        role: parse_pg_user_role(&row.try_get::<String, _>("role")?),
        created_at,
        updated_at,
    })
}

pub(crate) fn row_to_field(row: &sqlx::postgres::PgRow) -> Result<Field, StorageError> {
    Ok(Field {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        user_id: row.try_get("user_id")?,
        latitude: row.try_get("latitude")?,
        longitude: row.try_get("longitude")?,
        size: row.try_get("size")?,
        crop_type: parse_pg_crop_type(&row.try_get::<String, _>("crop_type")?),
        planting_date: row.try_get("planting_date")?,
        expected_harvest_date: row.try_get("expected_harvest_date")?,
        location: row.try_get("location")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

pub(crate) fn row_to_satellite(
    row: &sqlx::postgres::PgRow,
) -> Result<SatelliteReading, StorageError> {
    Ok(SatelliteReading {
        id: row.try_get("id")?,
        field_id: row.try_get("field_id")?,
        date: row.try_get("date")?,
        ndvi: row.try_get("ndvi")?,
        evi: row.try_get("evi")?,
        sarvi: row.try_get("sarvi")?,
        created_at: row.try_get("created_at")?,
    })
}

pub(crate) fn row_to_weather(row: &sqlx::postgres::PgRow) -> Result<WeatherReading, StorageError> {
    Ok(WeatherReading {
        id: row.try_get("id")?,
        field_id: row.try_get("field_id")?,
        date: row.try_get("date")?,
        temperature: row.try_get("temperature")?,
        humidity: row.try_get("humidity")?,
        rainfall: row.try_get("rainfall")?,
        wind_speed: row.try_get("wind_speed")?,
        condition: row.try_get("condition")?,
        created_at: row.try_get("created_at")?,
    })
}

pub(crate) fn row_to_prediction(
    row: &sqlx::postgres::PgRow,
) -> Result<YieldPrediction, StorageError> {
    Ok(YieldPrediction {
        id: row.try_get("id")?,
        field_id: row.try_get("field_id")?,
        prediction_date: row.try_get("prediction_date")?,
        predicted_yield: row.try_get("predicted_yield")?,
        confidence: row.try_get("confidence")?,
        model_version: row.try_get("model_version")?,
        created_at: row.try_get("created_at")?,
    })
}

pub(crate) fn row_to_alert(row: &sqlx::postgres::PgRow) -> Result<Alert, StorageError> {
    Ok(Alert {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        field_id: row.try_get("field_id")?,
        kind: parse_pg_alert_kind(&row.try_get::<String, _>("kind")?),
        priority: parse_pg_alert_priority(&row.try_get::<String, _>("priority")?),
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        is_read: row.try_get("is_read")?,
        is_active: row.try_get("is_active")?,
        created_at: row.try_get("created_at")?,
    })
}

pub(crate) const USER_COLUMNS: &str =
    "id, email, first_name, last_name, profile_image_url, role, created_at, updated_at";

pub(crate) const FIELD_COLUMNS: &str =
    "id, name, user_id, latitude, longitude, size, crop_type,
     planting_date, expected_harvest_date, location, created_at, updated_at";

pub(crate) const SATELLITE_COLUMNS: &str = "id, field_id, date, ndvi, evi, sarvi, created_at";

pub(crate) const WEATHER_COLUMNS: &str =
    "id, field_id, date, temperature, humidity, rainfall, wind_speed, condition, created_at";

pub(crate) const PREDICTION_COLUMNS: &str =
    "id, field_id, prediction_date, predicted_yield, confidence, model_version, created_at";

pub(crate) const ALERT_COLUMNS: &str =
    "id, user_id, field_id, kind, priority, title, description, is_read, is_active, created_at";
