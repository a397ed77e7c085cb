//! End-to-end tests for the router over the in-memory backend: auth
//! rejection, error mapping, and the JSON bodies handlers produce.

#![allow(clippy::unwrap_used, reason = "test code")]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use fieldsense_http::{create_router, AppState, USER_ID_HEADER};
use fieldsense_storage::MemStorage;

fn app() -> Router {
    let storage = Arc::new(MemStorage::new());
    create_router(Arc::new(AppState::new(storage)))
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    user: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user) = user {
        builder = builder.header(USER_ID_HEADER, user);
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

/// Login-as: upsert the user row the way the auth layer would.
async fn login(app: &Router, user: &str) {
    let (status, _) = send(app, Method::POST, "/api/auth/user", Some(user), Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn health_needs_no_identity() {
    let app = app();
    let (status, _) = send(&app, Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn api_routes_without_identity_are_unauthorized() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/fields", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Unauthorized");
}

#[tokio::test]
async fn field_crud_round_trips_through_the_router() {
    let app = app();
    login(&app, "u1").await;

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/fields",
        Some("u1"),
        Some(json!({
            "name": "North paddock",
            "latitude": -1.2921,
            "longitude": 36.8219,
            "size": 10.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_str().unwrap().to_owned();

    let (status, listed) = send(&app, Method::GET, "/api/fields", Some("u1"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, fetched) =
        send(&app, Method::GET, &format!("/api/fields/{id}"), Some("u1"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "North paddock");

    let (status, deleted) =
        send(&app, Method::DELETE, &format!("/api/fields/{id}"), Some("u1"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["message"], "Field deleted successfully");

    let (status, _) = send(&app, Method::GET, &format!("/api/fields/{id}"), Some("u1"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_field_is_a_404_with_message() {
    let app = app();
    login(&app, "u1").await;
    let (status, body) = send(&app, Method::GET, "/api/fields/nope", Some("u1"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Field not found");
}

#[tokio::test]
async fn blank_field_name_is_a_400() {
    let app = app();
    login(&app, "u1").await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/fields",
        Some("u1"),
        Some(json!({ "name": "   ", "latitude": 0.0, "longitude": 0.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn dashboard_stats_reflect_created_fields() {
    let app = app();
    login(&app, "u1").await;

    for (name, size) in [("A", json!(10.0)), ("B", json!(5.0))] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/fields",
            Some("u1"),
            Some(json!({ "name": name, "latitude": 0.0, "longitude": 0.0, "size": size })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, stats) = send(&app, Method::GET, "/api/dashboard/stats", Some("u1"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total_fields"], 2);
    assert_eq!(stats["total_acres"], 15.0);
    assert_eq!(stats["healthy_fields"], 0);
}

#[tokio::test]
async fn alert_read_transition_over_the_router() {
    let app = app();
    login(&app, "u1").await;

    let (status, alert) = send(
        &app,
        Method::POST,
        "/api/alerts",
        Some("u1"),
        Some(json!({ "kind": "health", "priority": "medium", "title": "Low NDVI" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = alert["id"].as_str().unwrap().to_owned();

    let (status, body) =
        send(&app, Method::PATCH, &format!("/api/alerts/{id}/read"), Some("u1"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Alert marked as read");

    let (status, unread) = send(&app, Method::GET, "/api/alerts/unread", Some("u1"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(unread.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn current_user_round_trips_through_auth_routes() {
    let app = app();
    let (status, _) = send(&app, Method::GET, "/api/auth/user", Some("u1"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, user) = send(
        &app,
        Method::POST,
        "/api/auth/user",
        Some("u1"),
        Some(json!({ "email": "amina@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["id"], "u1");

    let (status, fetched) = send(&app, Method::GET, "/api/auth/user", Some("u1"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["email"], "amina@example.com");
}
