//! Mock ingestion endpoints for demos and manual testing.
//!
//! These generate synthetic rows in plausible ranges and persist them
//! through the same services real ingestion would use. Randomness lives
//! only here; the services and stores stay deterministic.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use fieldsense_core::{
    NewSatelliteReading, NewWeatherReading, NewYieldPrediction, SatelliteReading, WeatherReading,
    YieldPrediction,
};
use rand::Rng;

use crate::api_error::ApiError;
use crate::api_types::MockRequest;
use crate::{AppState, AuthUser};

const CONDITIONS: [&str; 5] = ["Sunny", "Partly Cloudy", "Cloudy", "Light Rain", "Heavy Rain"];

pub async fn mock_satellite_data(
    State(state): State<Arc<AppState>>,
    AuthUser(_user_id): AuthUser,
    Json(body): Json<MockRequest>,
) -> Result<Json<SatelliteReading>, ApiError> {
    let new = {
        let mut rng = rand::thread_rng();
        NewSatelliteReading {
            field_id: body.field_id,
            date: Utc::now(),
            ndvi: Some(rng.gen_range(0.5..0.9)),
            evi: Some(rng.gen_range(0.4..0.7)),
            sarvi: Some(rng.gen_range(0.5..0.8)),
        }
    };
    Ok(Json(state.satellite.ingest(new).await?))
}

pub async fn mock_weather_data(
    State(state): State<Arc<AppState>>,
    AuthUser(_user_id): AuthUser,
    Json(body): Json<MockRequest>,
) -> Result<Json<WeatherReading>, ApiError> {
    let new = {
        let mut rng = rand::thread_rng();
        NewWeatherReading {
            field_id: body.field_id,
            date: Utc::now(),
            temperature: Some(rng.gen_range(15.0..30.0)),
            humidity: Some(rng.gen_range(40.0..80.0)),
            rainfall: Some(rng.gen_range(0.0..50.0)),
            wind_speed: Some(rng.gen_range(5.0..25.0)),
            condition: Some(CONDITIONS[rng.gen_range(0..CONDITIONS.len())].to_owned()),
        }
    };
    Ok(Json(state.weather.ingest(new).await?))
}

pub async fn mock_yield_prediction(
    State(state): State<Arc<AppState>>,
    AuthUser(_user_id): AuthUser,
    Json(body): Json<MockRequest>,
) -> Result<Json<YieldPrediction>, ApiError> {
    let new = {
        let mut rng = rand::thread_rng();
        NewYieldPrediction {
            field_id: body.field_id,
            prediction_date: Utc::now(),
            predicted_yield: Some(rng.gen_range(1.0..4.0)),
            confidence: Some(rng.gen_range(70.0..90.0)),
            model_version: Some("v1.0".to_owned()),
        }
    };
    Ok(Json(state.predictions.ingest(new).await?))
}
