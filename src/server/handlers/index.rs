//! Service description and 404 handler.

use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Json;
use log::debug;

use crate::config::SERVICE_NAME;
use crate::server::endpoints::ENDPOINTS;
use crate::server::types::{ErrorResponse, ServiceResponse};

/// `GET /`
pub async fn service_info() -> Json<ServiceResponse> {
    Json(ServiceResponse {
        message: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        endpoints: ENDPOINTS,
    })
}

/// Any route or method the router does not know.
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    debug!("No endpoint for {uri}");
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Endpoint not found".to_string(),
            message: None,
            usage: None,
            available_endpoints: Some(ENDPOINTS),
        }),
    )
}
