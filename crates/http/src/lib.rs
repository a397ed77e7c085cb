//! HTTP API server for fieldsense.

#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from the router")]

pub mod api_error;
mod api_types;
mod auth;
mod handlers;

use std::sync::Arc;

use axum::routing::{delete, get, patch, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;

use fieldsense_core::{SatelliteReading, WeatherReading, YieldPrediction};
use fieldsense_service::{
    AlertService, DashboardService, FieldService, ReadingService, UserService,
};
use fieldsense_storage::traits::Storage;

pub use auth::{AuthUser, USER_ID_HEADER};

/// Shared application state for all HTTP handlers.
///
/// One service per resource, all backed by the same storage. Wrapped in
/// `Arc` for sharing across handlers.
pub struct AppState {
    pub users: UserService,
    pub fields: FieldService,
    pub satellite: ReadingService<SatelliteReading>,
    pub weather: ReadingService<WeatherReading>,
    pub predictions: ReadingService<YieldPrediction>,
    pub alerts: AlertService,
    pub dashboard: DashboardService,
}

impl AppState {
    pub fn new<S: Storage + 'static>(storage: Arc<S>) -> Self {
        Self {
            users: UserService::new(&storage),
            fields: FieldService::new(&storage),
            satellite: ReadingService::new(&storage),
            weather: ReadingService::new(&storage),
            predictions: ReadingService::new(&storage),
            alerts: AlertService::new(&storage),
            dashboard: DashboardService::new(&storage),
        }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/auth/user", get(handlers::users::get_current_user))
        .route("/api/auth/user", post(handlers::users::upsert_current_user))
        .route("/api/fields", get(handlers::fields::list_fields))
        .route("/api/fields", post(handlers::fields::create_field))
        .route("/api/fields/{id}", get(handlers::fields::get_field))
        .route("/api/fields/{id}", put(handlers::fields::update_field))
        .route("/api/fields/{id}", delete(handlers::fields::delete_field))
        .route("/api/satellite-data/{field_id}/latest", get(handlers::readings::latest_satellite))
        .route("/api/satellite-data/{field_id}", get(handlers::readings::satellite_history))
        .route("/api/weather/{field_id}/latest", get(handlers::readings::latest_weather))
        .route("/api/weather/{field_id}", get(handlers::readings::weather_history))
        .route("/api/predictions/{field_id}/latest", get(handlers::readings::latest_prediction))
        .route("/api/predictions/{field_id}", get(handlers::readings::prediction_history))
        .route("/api/alerts", get(handlers::alerts::list_alerts))
        .route("/api/alerts", post(handlers::alerts::create_alert))
        .route("/api/alerts/unread", get(handlers::alerts::unread_alerts))
        .route("/api/alerts/active", get(handlers::alerts::active_alerts))
        .route("/api/alerts/{id}/read", patch(handlers::alerts::mark_alert_read))
        .route("/api/dashboard/stats", get(handlers::dashboard::get_stats))
        .route("/api/mock/satellite-data", post(handlers::mock::mock_satellite_data))
        .route("/api/mock/weather-data", post(handlers::mock::mock_weather_data))
        .route("/api/mock/yield-prediction", post(handlers::mock::mock_yield_prediction))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
