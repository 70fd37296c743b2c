//! Route definitions for the `/integrations` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::integrations;
use crate::state::AppState;

/// Routes mounted at `/integrations`.
///
/// ```text
/// GET    /orders   -> list_orders (?source=..., ?status=...)
/// GET    /stats    -> integration_stats
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders", get(integrations::list_orders))
        .route("/stats", get(integrations::integration_stats))
}
