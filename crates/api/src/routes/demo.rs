//! The demo route table, mounted at `/api/demo`.
//!
//! Every read endpoint of the live table has a twin here, served by the
//! same handlers against the fixture-backed state. Write verbs are not
//! registered: a POST or PUT to an existing demo path gets a 405 from
//! the router rather than reaching a handler.

use axum::routing::get;
use axum::Router;

use crate::handlers::{
    account, calls, guarantee, integrations, marketing, notifications, recommendations, reports,
    reviews, waitlist,
};
use crate::state::AppState;

/// Routes mounted at `/api/demo`. GET only.
///
/// ```text
/// GET    /calls                  -> list_calls
/// GET    /calls/stats            -> call_stats
/// GET    /calls/{id}             -> get_call
/// GET    /reviews                -> list_reviews
/// GET    /reviews/stats          -> review_stats
/// GET    /reviews/{id}           -> get_review
/// GET    /marketing/stats        -> marketing_stats
/// GET    /marketing/campaigns    -> list_campaigns
/// GET    /guarantee/sessions     -> list_sessions
/// GET    /guarantee/charges      -> list_charges
/// GET    /guarantee/stats        -> guarantee_stats
/// GET    /integrations/orders    -> list_orders
/// GET    /integrations/stats     -> integration_stats
/// GET    /reports                -> list_reports
/// GET    /waitlist               -> list_waitlist
/// GET    /recommendations        -> list_recommendations
/// GET    /notifications          -> list_notifications
/// GET    /auth/session           -> session
/// GET    /user                   -> current_user
/// GET    /settings               -> get_settings
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/calls", get(calls::list_calls))
        .route("/calls/stats", get(calls::call_stats))
        .route("/calls/{id}", get(calls::get_call))
        .route("/reviews", get(reviews::list_reviews))
        .route("/reviews/stats", get(reviews::review_stats))
        .route("/reviews/{id}", get(reviews::get_review))
        .route("/marketing/stats", get(marketing::marketing_stats))
        .route("/marketing/campaigns", get(marketing::list_campaigns))
        .route("/guarantee/sessions", get(guarantee::list_sessions))
        .route("/guarantee/charges", get(guarantee::list_charges))
        .route("/guarantee/stats", get(guarantee::guarantee_stats))
        .route("/integrations/orders", get(integrations::list_orders))
        .route("/integrations/stats", get(integrations::integration_stats))
        .route("/reports", get(reports::list_reports))
        .route("/waitlist", get(waitlist::list_waitlist))
        .route("/recommendations", get(recommendations::list_recommendations))
        .route("/notifications", get(notifications::list_notifications))
        .route("/auth/session", get(account::session))
        .route("/user", get(account::current_user))
        .route("/settings", get(account::get_settings))
}
