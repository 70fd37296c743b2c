//! Route definitions for the `/guarantee` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::guarantee;
use crate::state::AppState;

/// Routes mounted at `/guarantee`.
///
/// ```text
/// GET    /sessions   -> list_sessions (?status=...)
/// GET    /charges    -> list_charges
/// GET    /stats      -> guarantee_stats
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sessions", get(guarantee::list_sessions))
        .route("/charges", get(guarantee::list_charges))
        .route("/stats", get(guarantee::guarantee_stats))
}
