//! HTTP server.
//!
//! Routes:
//! - `GET /` - service description and endpoint map
//! - `POST /api/location` - store a report from a JSON body
//! - `GET /admin/send-location` - store a report from query parameters
//! - `GET /api/locations` - every stored report
//! - `GET /api/stats` - aggregate counts
//! - `GET /api/search` - filtered reports
//! - `DELETE /api/reset` - remove every report
//!
//! Anything else, including a known path with the wrong method, gets a 404
//! with the endpoint map.

mod endpoints;
mod error;
mod handlers;
mod shutdown;
mod state;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::http::HeaderValue;
use axum::routing::{delete, get, post};
use axum::Router;
use log::{info, warn};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::Config;
use crate::error_handling::InitializationError;
use crate::extract::HostSystemInfo;
use crate::storage::{init_db_pool_with_path, run_migrations};

pub use error::ApiError;
pub use state::AppState;

use handlers::{
    create_location, list_all_locations, not_found, reset_all_locations, search,
    send_location_via_query, service_info, stats,
};

/// Builds the router with every endpoint, the 404 fallback and CORS.
///
/// An empty `cors_origins` allows any origin.
pub fn build_router(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(service_info).fallback(not_found))
        .route("/api/location", post(create_location).fallback(not_found))
        .route(
            "/admin/send-location",
            get(send_location_via_query).fallback(not_found),
        )
        .route("/api/locations", get(list_all_locations).fallback(not_found))
        .route("/api/stats", get(stats).fallback(not_found))
        .route("/api/search", get(search).fallback(not_found))
        .route("/api/reset", delete(reset_all_locations).fallback(not_found))
        .fallback(not_found)
        .with_state(state)
        .layer(cors_layer(cors_origins))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.trim().parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin {origin:?}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Opens the database, applies migrations and serves HTTP until Ctrl-C/SIGTERM.
pub async fn run_server(config: Config) -> anyhow::Result<()> {
    let system_info = Arc::new(HostSystemInfo::new());

    let pool = init_db_pool_with_path(&config.db_path)
        .await
        .context("Failed to initialize database pool")?;
    run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;
    info!("Locations database ready at {}", config.db_path.display());

    let state = AppState::new(Arc::clone(&pool), system_info);
    let app = build_router(state, &config.cors_origins);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| InitializationError::BindError {
            addr: addr.clone(),
            source,
        })?;

    info!("Location API listening on http://{addr}/");
    for (endpoint, description) in endpoints::ENDPOINTS.0 {
        info!("  {endpoint:<26} {description}");
    }

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown::shutdown_signal())
    .await
    .context("HTTP server error")?;

    pool.close().await;
    info!("Server stopped");
    Ok(())
}
