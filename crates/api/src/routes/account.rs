//! Route definitions for the `/auth`, `/user` and `/settings` resources.

use axum::routing::get;
use axum::Router;

use crate::handlers::account;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// GET    /session   -> session
/// ```
pub fn auth_router() -> Router<AppState> {
    Router::new().route("/session", get(account::session))
}

/// Routes mounted at `/user`.
///
/// ```text
/// GET    /   -> current_user
/// ```
pub fn user_router() -> Router<AppState> {
    Router::new().route("/", get(account::current_user))
}

/// Routes mounted at `/settings`.
///
/// ```text
/// GET    /   -> get_settings
/// PUT    /   -> update_settings
/// ```
pub fn settings_router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(account::get_settings).put(account::update_settings),
    )
}
