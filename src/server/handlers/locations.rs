//! `POST /api/location` and `GET /api/locations`.

use std::net::SocketAddr;

use axum::body::Bytes;
use axum::extract::{ConnectInfo, State};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::info;

use crate::extract::{normalize, JsonBody, LocationSource, RequestContext};
use crate::server::error::ApiError;
use crate::server::state::AppState;
use crate::server::types::{LocationsResponse, StoredResponse};
use crate::storage::{insert_location, list_locations};

/// Stores a report sent as a JSON body. Responds 201 with the new id.
pub async fn create_location(
    State(state): State<AppState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let context = RequestContext::from_http(&method, &uri, &headers, connect_info.map(|c| c.0));
    let source = LocationSource::JsonBody(JsonBody::from_slice(&body)?);
    let draft = normalize(source, &context, state.system_info.as_ref())?;

    let id = insert_location(&state.pool, &draft).await?;
    info!(
        "Stored location {id} ({}, {}) from {}",
        draft.latitude,
        draft.longitude,
        draft.ip_address.as_deref().unwrap_or("unknown")
    );

    Ok((
        StatusCode::CREATED,
        Json(StoredResponse {
            message: "Location stored successfully",
            id,
            data: &draft,
            query: None,
        }),
    )
        .into_response())
}

/// Lists every stored report, newest first.
pub async fn list_all_locations(
    State(state): State<AppState>,
) -> Result<Json<LocationsResponse>, ApiError> {
    let locations = list_locations(&state.pool).await?;
    Ok(Json(LocationsResponse {
        count: locations.len(),
        locations,
    }))
}
