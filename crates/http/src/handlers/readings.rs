use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use fieldsense_core::{SatelliteReading, WeatherReading, YieldPrediction};

use crate::api_error::ApiError;
use crate::{AppState, AuthUser};

pub async fn latest_satellite(
    State(state): State<Arc<AppState>>,
    AuthUser(_user_id): AuthUser,
    Path(field_id): Path<String>,
) -> Result<Json<Option<SatelliteReading>>, ApiError> {
    Ok(Json(state.satellite.latest(&field_id).await?))
}

pub async fn satellite_history(
    State(state): State<Arc<AppState>>,
    AuthUser(_user_id): AuthUser,
    Path(field_id): Path<String>,
) -> Result<Json<Vec<SatelliteReading>>, ApiError> {
    Ok(Json(state.satellite.history(&field_id).await?))
}

pub async fn latest_weather(
    State(state): State<Arc<AppState>>,
    AuthUser(_user_id): AuthUser,
    Path(field_id): Path<String>,
) -> Result<Json<Option<WeatherReading>>, ApiError> {
    Ok(Json(state.weather.latest(&field_id).await?))
}

pub async fn weather_history(
    State(state): State<Arc<AppState>>,
    AuthUser(_user_id): AuthUser,
    Path(field_id): Path<String>,
) -> Result<Json<Vec<WeatherReading>>, ApiError> {
    Ok(Json(state.weather.history(&field_id).await?))
}

pub async fn latest_prediction(
    State(state): State<Arc<AppState>>,
    AuthUser(_user_id): AuthUser,
    Path(field_id): Path<String>,
) -> Result<Json<Option<YieldPrediction>>, ApiError> {
    Ok(Json(state.predictions.latest(&field_id).await?))
}

pub async fn prediction_history(
    State(state): State<Arc<AppState>>,
    AuthUser(_user_id): AuthUser,
    Path(field_id): Path<String>,
) -> Result<Json<Vec<YieldPrediction>>, ApiError> {
    Ok(Json(state.predictions.history(&field_id).await?))
}
