//! Handlers for the `/guarantee` resource.

use axum::extract::{Query, State};
use axum::Json;
use speedai_db::models::guarantee::{GuaranteeSession, GuaranteeStats, NoShowCharge};

use crate::error::AppResult;
use crate::query::{non_empty, StatusParams};
use crate::state::AppState;

/// GET /guarantee/sessions
///
/// Protected reservations, optionally filtered by `?status=` (bare array).
pub async fn list_sessions(
    State(state): State<AppState>,
    Query(params): Query<StatusParams>,
) -> AppResult<Json<Vec<GuaranteeSession>>> {
    let status = non_empty(params.status);
    let sessions = state.store.list_guarantee_sessions(status.as_deref()).await?;
    Ok(Json(sessions))
}

/// GET /guarantee/charges
///
/// No-show charge outcomes, newest first (bare array).
pub async fn list_charges(State(state): State<AppState>) -> AppResult<Json<Vec<NoShowCharge>>> {
    let charges = state.store.list_no_show_charges().await?;
    Ok(Json(charges))
}

/// GET /guarantee/stats
pub async fn guarantee_stats(State(state): State<AppState>) -> AppResult<Json<GuaranteeStats>> {
    let stats = state.store.guarantee_stats().await?;
    Ok(Json(stats))
}
