//! SeriesStore implementations for PgStorage, one per time-series table.
//!
//! All three follow the same shape: uuid id on insert, "latest" = max of
//! the date column with `created_at DESC, id` as the tie-break, full
//! history ordered by date descending.

use super::*;

use crate::traits::SeriesStore;
use async_trait::async_trait;
use fieldsense_core::{NewSatelliteReading, NewWeatherReading, NewYieldPrediction};

#[async_trait]
impl SeriesStore<SatelliteReading> for PgStorage {
    async fn append(&self, new: NewSatelliteReading) -> Result<SatelliteReading, StorageError> {
        let id = uuid::Uuid::new_v4().to_string();
        let row = sqlx::query(&format!(
            r#"INSERT INTO satellite_readings (id, field_id, date, ndvi, evi, sarvi)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING {SATELLITE_COLUMNS}"#
        ))
        .bind(&id)
        .bind(&new.field_id)
        .bind(new.date)
        .bind(new.ndvi)
        .bind(new.evi)
        .bind(new.sarvi)
        .fetch_one(&self.pool)
        .await?;
        row_to_satellite(&row)
    }

    async fn latest_for(&self, field_id: &str) -> Result<Option<SatelliteReading>, StorageError> {
        let row = sqlx::query(&format!(
            "SELECT {SATELLITE_COLUMNS} FROM satellite_readings WHERE field_id = $1
             ORDER BY date DESC, created_at DESC, id LIMIT 1"
        ))
        .bind(field_id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| row_to_satellite(&r)).transpose()
    }

    async fn all_for(&self, field_id: &str) -> Result<Vec<SatelliteReading>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {SATELLITE_COLUMNS} FROM satellite_readings WHERE field_id = $1
             ORDER BY date DESC, created_at DESC, id"
        ))
        .bind(field_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_satellite).collect()
    }
}

#[async_trait]
impl SeriesStore<WeatherReading> for PgStorage {
    async fn append(&self, new: NewWeatherReading) -> Result<WeatherReading, StorageError> {
        let id = uuid::Uuid::new_v4().to_string();
        let row = sqlx::query(&format!(
            r#"INSERT INTO weather_readings
               (id, field_id, date, temperature, humidity, rainfall, wind_speed, condition)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
               RETURNING {WEATHER_COLUMNS}"#
        ))
        .bind(&id)
        .bind(&new.field_id)
        .bind(new.date)
        .bind(new.temperature)
        .bind(new.humidity)
        .bind(new.rainfall)
        .bind(new.wind_speed)
        .bind(&new.condition)
        .fetch_one(&self.pool)
        .await?;
        row_to_weather(&row)
    }

    async fn latest_for(&self, field_id: &str) -> Result<Option<WeatherReading>, StorageError> {
        let row = sqlx::query(&format!(
            "SELECT {WEATHER_COLUMNS} FROM weather_readings WHERE field_id = $1
             ORDER BY date DESC, created_at DESC, id LIMIT 1"
        ))
        .bind(field_id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| row_to_weather(&r)).transpose()
    }

    async fn all_for(&self, field_id: &str) -> Result<Vec<WeatherReading>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {WEATHER_COLUMNS} FROM weather_readings WHERE field_id = $1
             ORDER BY date DESC, created_at DESC, id"
        ))
        .bind(field_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_weather).collect()
    }
}

#[async_trait]
impl SeriesStore<YieldPrediction> for PgStorage {
    async fn append(&self, new: NewYieldPrediction) -> Result<YieldPrediction, StorageError> {
        let id = uuid::Uuid::new_v4().to_string();
        let row = sqlx::query(&format!(
            r#"INSERT INTO yield_predictions
               (id, field_id, prediction_date, predicted_yield, confidence, model_version)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING {PREDICTION_COLUMNS}"#
        ))
        .bind(&id)
        .bind(&new.field_id)
        .bind(new.prediction_date)
        .bind(new.predicted_yield)
        .bind(new.confidence)
        .bind(&new.model_version)
        .fetch_one(&self.pool)
        .await?;
        row_to_prediction(&row)
    }

    async fn latest_for(&self, field_id: &str) -> Result<Option<YieldPrediction>, StorageError> {
        let row = sqlx::query(&format!(
            "SELECT {PREDICTION_COLUMNS} FROM yield_predictions WHERE field_id = $1
             ORDER BY prediction_date DESC, created_at DESC, id LIMIT 1"
        ))
        .bind(field_id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| row_to_prediction(&r)).transpose()
    }

    async fn all_for(&self, field_id: &str) -> Result<Vec<YieldPrediction>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {PREDICTION_COLUMNS} FROM yield_predictions WHERE field_id = $1
             ORDER BY prediction_date DESC, created_at DESC, id"
        ))
        .bind(field_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_prediction).collect()
    }
}
