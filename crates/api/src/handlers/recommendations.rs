//! Handlers for the `/recommendations` resource.

use axum::extract::State;
use axum::Json;
use speedai_db::models::recommendation::Recommendation;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /recommendations
///
/// Suggested actions, highest priority first (bare array).
pub async fn list_recommendations(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Recommendation>>> {
    let recommendations = state.store.list_recommendations().await?;
    Ok(Json(recommendations))
}
