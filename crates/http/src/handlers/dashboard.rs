use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use fieldsense_core::DashboardStats;

use crate::api_error::ApiError;
use crate::{AppState, AuthUser};

pub async fn get_stats(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<DashboardStats>, ApiError> {
    Ok(Json(state.dashboard.stats_for(&user_id).await?))
}
