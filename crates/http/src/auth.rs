//! Request identity extractor.
//!
//! Credential validation happens upstream (session-backed auth proxy);
//! this layer only trusts the identity it injects. Requests without an
//! identity are rejected before any handler or store call runs.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::api_error::ApiError;

/// Header carrying the authenticated user id, set by the auth layer.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated user's opaque id. Rejects with 401 when the header
/// is missing or empty.
#[derive(Debug, Clone)]
pub struct AuthUser(pub String);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| Self(id.to_owned()))
            .ok_or(ApiError::Unauthorized)
    }
}
