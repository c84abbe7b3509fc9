//! `GET /api/search`

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use log::debug;

use crate::error_handling::ValidationError;
use crate::extract::SearchParams;
use crate::server::error::ApiError;
use crate::server::state::AppState;
use crate::server::types::SearchResponse;
use crate::storage::search_locations;

/// Filtered listing; every parameter is optional and they combine with AND.
pub async fn search(
    State(state): State<AppState>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Query(params) = query.map_err(|e| ValidationError::MalformedRequest(e.body_text()))?;
    let filters = params.into_filters()?;
    debug!("Searching locations with {filters:?}");

    let locations = search_locations(&state.pool, &filters).await?;
    Ok(Json(SearchResponse {
        count: locations.len(),
        filters,
        locations,
    }))
}
