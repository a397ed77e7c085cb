use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use fieldsense_core::{Field, FieldPatch};

use crate::api_error::ApiError;
use crate::api_types::{CreateFieldRequest, MessageResponse};
use crate::{AppState, AuthUser};

pub async fn list_fields(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<Field>>, ApiError> {
    Ok(Json(state.fields.list_for(&user_id).await?))
}

pub async fn create_field(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<CreateFieldRequest>,
) -> Result<Json<Field>, ApiError> {
    let field = state.fields.create(body.into_new_field(user_id)).await?;
    Ok(Json(field))
}

pub async fn get_field(
    State(state): State<Arc<AppState>>,
    AuthUser(_user_id): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Field>, ApiError> {
    state
        .fields
        .get(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Field not found".to_owned()))
}

pub async fn update_field(
    State(state): State<Arc<AppState>>,
    AuthUser(_user_id): AuthUser,
    Path(id): Path<String>,
    Json(patch): Json<FieldPatch>,
) -> Result<Json<Field>, ApiError> {
    Ok(Json(state.fields.update(&id, patch).await?))
}

pub async fn delete_field(
    State(state): State<Arc<AppState>>,
    AuthUser(_user_id): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.fields.delete(&id).await?;
    Ok(Json(MessageResponse { message: "Field deleted successfully" }))
}
