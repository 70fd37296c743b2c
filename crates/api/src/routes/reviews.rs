//! Route definitions for the `/reviews` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::reviews;
use crate::state::AppState;

/// Routes mounted at `/reviews`.
///
/// ```text
/// GET    /          -> list_reviews
/// GET    /stats     -> review_stats
/// GET    /{id}      -> get_review
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(reviews::list_reviews))
        .route("/stats", get(reviews::review_stats))
        .route("/{id}", get(reviews::get_review))
}
