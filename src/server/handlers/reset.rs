//! `DELETE /api/reset`

use axum::extract::State;
use axum::Json;

use crate::server::error::ApiError;
use crate::server::state::AppState;
use crate::server::types::ResetResponse;
use crate::storage::reset_locations;

/// Removes every stored report. Irreversible.
pub async fn reset_all_locations(
    State(state): State<AppState>,
) -> Result<Json<ResetResponse>, ApiError> {
    let removed_count = reset_locations(&state.pool).await?;
    Ok(Json(ResetResponse {
        message: "All location data has been reset",
        removed_count,
    }))
}
