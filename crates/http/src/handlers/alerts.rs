use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use fieldsense_core::Alert;

use crate::api_error::ApiError;
use crate::api_types::{CreateAlertRequest, MessageResponse};
use crate::{AppState, AuthUser};

pub async fn list_alerts(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<Alert>>, ApiError> {
    Ok(Json(state.alerts.list_for(&user_id).await?))
}

pub async fn unread_alerts(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<Alert>>, ApiError> {
    Ok(Json(state.alerts.unread_for(&user_id).await?))
}

pub async fn active_alerts(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<Alert>>, ApiError> {
    Ok(Json(state.alerts.active_for(&user_id).await?))
}

pub async fn create_alert(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<CreateAlertRequest>,
) -> Result<Json<Alert>, ApiError> {
    Ok(Json(state.alerts.create(body.into_new_alert(user_id)).await?))
}

pub async fn mark_alert_read(
    State(state): State<Arc<AppState>>,
    AuthUser(_user_id): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.alerts.mark_read(&id).await?;
    Ok(Json(MessageResponse { message: "Alert marked as read" }))
}
