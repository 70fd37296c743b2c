//! Route definitions for the `/waitlist` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::waitlist;
use crate::state::AppState;

/// Routes mounted at `/waitlist`.
///
/// ```text
/// GET    /   -> list_waitlist
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(waitlist::list_waitlist))
}
