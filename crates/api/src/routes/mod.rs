pub mod account;
pub mod calls;
pub mod demo;
pub mod guarantee;
pub mod health;
pub mod integrations;
pub mod marketing;
pub mod notifications;
pub mod recommendations;
pub mod reports;
pub mod reviews;
pub mod waitlist;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// The same tree serves the live table and, nested again under `/demo`
/// with a fixture-backed state, the demo table (reads only, see
/// [`demo::router`]).
///
/// Route hierarchy:
///
/// ```text
/// /calls                         list (?status, search, page, limit)
/// /calls/stats                   aggregate stats (?timeFilter)
/// /calls/{id}                    single call
///
/// /reviews                       list (?platform, ratingMin, search, page, limit)
/// /reviews/stats                 aggregate stats
/// /reviews/{id}                  single review
///
/// /marketing/stats               snapshot (?period)
/// /marketing/campaigns           campaign list
///
/// /guarantee/sessions            list (?status)
/// /guarantee/charges             no-show charge list
/// /guarantee/stats               aggregate stats
///
/// /integrations/orders           list (?source, status)
/// /integrations/stats            per-platform stats
///
/// /reports                       monthly report list
/// /waitlist                      waitlist entries
/// /recommendations               suggested actions
///
/// /notifications                 list (?unreadOnly)
/// /notifications/read-all        mark all read (POST)
/// /notifications/{id}/read       mark read (POST)
///
/// /auth/session                  current session
/// /user                          owner account
/// /settings                      get, update (GET, PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/calls", calls::router())
        .nest("/reviews", reviews::router())
        .nest("/marketing", marketing::router())
        .nest("/guarantee", guarantee::router())
        .nest("/integrations", integrations::router())
        .nest("/reports", reports::router())
        .nest("/waitlist", waitlist::router())
        .nest("/recommendations", recommendations::router())
        .nest("/notifications", notifications::router())
        .nest("/auth", account::auth_router())
        .nest("/user", account::user_router())
        .nest("/settings", account::settings_router())
}
