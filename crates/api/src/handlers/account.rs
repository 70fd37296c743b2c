//! Handlers for the `/auth`, `/user` and `/settings` resources.

use axum::extract::State;
use axum::Json;
use speedai_db::models::account::{BusinessSettings, UpdateSettings, UserAccount};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /auth/session
///
/// The signed-in session: `{ "user": {...}, "authenticated": true }`.
pub async fn session(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let user = state.store.current_user().await?;
    Ok(Json(serde_json::json!({
        "user": user,
        "authenticated": true,
    })))
}

/// GET /user
///
/// The owner account (bare object).
pub async fn current_user(State(state): State<AppState>) -> AppResult<Json<UserAccount>> {
    let user = state.store.current_user().await?;
    Ok(Json(user))
}

/// GET /settings
pub async fn get_settings(State(state): State<AppState>) -> AppResult<Json<BusinessSettings>> {
    let settings = state.store.get_settings().await?;
    Ok(Json(settings))
}

/// PUT /settings
///
/// Partial update; absent fields keep their current value.
pub async fn update_settings(
    State(state): State<AppState>,
    Json(patch): Json<UpdateSettings>,
) -> AppResult<Json<BusinessSettings>> {
    let settings = state.store.update_settings(&patch).await?;
    Ok(Json(settings))
}
