use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use fieldsense_core::{UpsertUser, User};

use crate::api_error::ApiError;
use crate::api_types::UpsertProfileRequest;
use crate::{AppState, AuthUser};

pub async fn get_current_user(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<User>, ApiError> {
    state
        .users
        .get(&user_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("User not found".to_owned()))
}

/// Upsert-on-login: the auth layer calls this after authenticating to
/// create or refresh the user row.
pub async fn upsert_current_user(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<UpsertProfileRequest>,
) -> Result<Json<User>, ApiError> {
    let user = state
        .users
        .upsert(UpsertUser {
            id: user_id,
            email: body.email,
            first_name: body.first_name,
            last_name: body.last_name,
            profile_image_url: body.profile_image_url,
            role: body.role,
        })
        .await?;
    Ok(Json(user))
}
