//! Route definitions for the `/marketing` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::marketing;
use crate::state::AppState;

/// Routes mounted at `/marketing`.
///
/// ```text
/// GET    /stats       -> marketing_stats (?period=week|month|year|all)
/// GET    /campaigns   -> list_campaigns
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(marketing::marketing_stats))
        .route("/campaigns", get(marketing::list_campaigns))
}
