// Shared test helpers for building the router and driving it in-process.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::path::Path;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use location_api::models::ServerInfo;
use location_api::{
    build_router, init_db_pool_with_path, run_migrations, AppState, DbPool, FixedSystemInfo,
};

/// Server snapshot used by every test app.
pub fn test_server_info() -> ServerInfo {
    ServerInfo {
        hostname: Some("test-host".to_string()),
        platform: Some("linux".to_string()),
        arch: Some("x86_64".to_string()),
        runtime_version: Some("location_api/test".to_string()),
        uptime: Some(42.0),
    }
}

/// Creates an in-memory database pool with migrations applied.
/// Single connection, since every `:memory:` connection is its own database.
#[allow(dead_code)] // Used by other test files
pub async fn create_test_pool() -> DbPool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool");
    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    Arc::new(pool)
}

/// Opens (or creates) an on-disk database the same way the server does.
#[allow(dead_code)] // Used by other test files
pub async fn create_file_pool(db_path: &Path) -> DbPool {
    let pool = init_db_pool_with_path(db_path)
        .await
        .expect("Failed to create file database pool");
    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

/// Builds the full router over `pool` with permissive CORS.
pub fn test_app(pool: DbPool) -> Router {
    let state = AppState::new(pool, Arc::new(FixedSystemInfo(test_server_info())));
    build_router(state, &[])
}

/// Builds a router over a fresh in-memory database.
#[allow(dead_code)] // Used by other test files
pub async fn create_test_app() -> Router {
    test_app(create_test_pool().await)
}

/// Sends one request and returns the status and the decoded JSON body.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router should not fail");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Body should be JSON")
    };
    (status, body)
}

/// `GET`/`DELETE`-style request without a body.
#[allow(dead_code)] // Used by other test files
pub async fn request(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("Valid request");
    send(app, request).await
}

/// `POST` with a JSON body.
#[allow(dead_code)] // Used by other test files
pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("Valid request");
    send(app, request).await
}
