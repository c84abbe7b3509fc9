//! `GET /api/stats`

use axum::extract::State;
use axum::Json;

use crate::server::error::ApiError;
use crate::server::state::AppState;
use crate::server::types::StatsResponse;
use crate::storage::location_stats;

/// Aggregate counts over the stored reports.
pub async fn stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, ApiError> {
    let stats = location_stats(&state.pool).await?;
    Ok(Json(StatsResponse { stats }))
}
