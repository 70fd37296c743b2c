//! Route definitions for the `/calls` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::calls;
use crate::state::AppState;

/// Routes mounted at `/calls`.
///
/// ```text
/// GET    /          -> list_calls
/// GET    /stats     -> call_stats
/// GET    /{id}      -> get_call
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(calls::list_calls))
        .route("/stats", get(calls::call_stats))
        .route("/{id}", get(calls::get_call))
}
