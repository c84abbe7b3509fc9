//! `GET /admin/send-location`: store a report from query parameters.

use std::collections::BTreeMap;
use std::net::SocketAddr;

use axum::extract::rejection::QueryRejection;
use axum::extract::{ConnectInfo, Query, State};
use axum::http::{HeaderMap, Method, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::info;

use crate::config::ADMIN_USAGE_EXAMPLE;
use crate::error_handling::ValidationError;
use crate::extract::{normalize, LocationSource, QueryForm, RequestContext};
use crate::server::error::ApiError;
use crate::server::state::AppState;
use crate::server::types::StoredResponse;
use crate::storage::insert_location;

/// Stores a report given as `latitude`, `longitude` and optional
/// `additionalData` query parameters. Responds 200 and echoes the query.
pub async fn send_location_via_query(
    State(state): State<AppState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    query: Result<Query<BTreeMap<String, String>>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) =
        query.map_err(|e| ValidationError::MalformedRequest(e.body_text()))?;

    let context = RequestContext::from_http(&method, &uri, &headers, connect_info.map(|c| c.0));
    let source = LocationSource::QueryForm(QueryForm::from_params(&params));
    let draft = normalize(source, &context, state.system_info.as_ref()).map_err(|e| match e {
        ValidationError::MissingCoordinates => ApiError::ValidationWithUsage {
            source: e,
            usage: ADMIN_USAGE_EXAMPLE,
        },
        other => ApiError::Validation(other),
    })?;

    let id = insert_location(&state.pool, &draft).await?;
    info!(
        "Stored location {id} ({}, {}) via admin endpoint",
        draft.latitude, draft.longitude
    );

    Ok(Json(StoredResponse {
        message: "Location stored successfully via admin endpoint",
        id,
        data: &draft,
        query: Some(&params),
    })
    .into_response())
}
