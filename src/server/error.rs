//! Mapping of failures to JSON HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use thiserror::Error;

use crate::config::STORAGE_ERROR_MESSAGE;
use crate::error_handling::{DatabaseError, ValidationError};
use crate::server::types::ErrorResponse;

/// A request that could not be served.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Bad input; nothing was read from or written to storage.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Bad input on an endpoint that also shows an example request.
    #[error("{source}")]
    ValidationWithUsage {
        source: ValidationError,
        usage: &'static str,
    },

    /// The database failed. Not retried.
    #[error(transparent)]
    Storage(#[from] DatabaseError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(e) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: e.to_string(),
                    message: None,
                    usage: None,
                    available_endpoints: None,
                },
            ),
            ApiError::ValidationWithUsage { source, usage } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: source.to_string(),
                    message: None,
                    usage: Some(usage),
                    available_endpoints: None,
                },
            ),
            ApiError::Storage(e) => {
                error!("Storage error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal server error".to_string(),
                        message: Some(STORAGE_ERROR_MESSAGE.to_string()),
                        usage: None,
                        available_endpoints: None,
                    },
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
