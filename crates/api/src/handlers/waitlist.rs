//! Handlers for the `/waitlist` resource.

use axum::extract::State;
use axum::Json;
use speedai_db::models::waitlist::WaitlistEntry;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /waitlist
///
/// Waitlist entries in arrival order (bare array).
pub async fn list_waitlist(State(state): State<AppState>) -> AppResult<Json<Vec<WaitlistEntry>>> {
    let entries = state.store.list_waitlist().await?;
    Ok(Json(entries))
}
