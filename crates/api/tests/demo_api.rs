//! Integration tests for the demo route table at `/api/demo`.
//!
//! These exercise the full middleware stack against the fixture-backed
//! store, covering pagination, filters, time windows, the French 404
//! body, and the GET-only registration of the demo table.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_json, send};

// ---------------------------------------------------------------------------
// Calls
// ---------------------------------------------------------------------------

#[tokio::test]
async fn demo_calls_page_two_returns_next_ten() {
    let json = get_json(common::demo_app(), "/api/demo/calls?page=2&limit=10").await;

    assert_eq!(json["total"], 28);
    assert_eq!(json["totalPages"], 3);

    let calls = json["calls"].as_array().unwrap();
    assert_eq!(calls.len(), 10);

    // Fixture calls are ordered newest first with ids descending within
    // the page window.
    let ids: Vec<i64> = calls.iter().map(|c| c["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, (11..=20).collect::<Vec<_>>());
}

#[tokio::test]
async fn demo_call_stats_scale_with_time_filter() {
    let week = get_json(common::demo_app(), "/api/demo/calls/stats").await;
    assert_eq!(week["totalCalls"], 247);

    let today = get_json(common::demo_app(), "/api/demo/calls/stats?timeFilter=today").await;
    assert_eq!(today["totalCalls"], 74);

    // Rates and averages do not scale with the window.
    assert_eq!(today["conversionRate"], week["conversionRate"]);
    assert_eq!(today["avgDurationSeconds"], week["avgDurationSeconds"]);
}

#[tokio::test]
async fn demo_call_stats_ignore_unknown_time_filter() {
    let json = get_json(common::demo_app(), "/api/demo/calls/stats?timeFilter=fortnight").await;
    // Unknown values fall back to the week window.
    assert_eq!(json["totalCalls"], 247);
}

#[tokio::test]
async fn demo_unknown_call_returns_french_404() {
    let response = get(common::demo_app(), "/api/demo/calls/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Appel non trouvé");
}

// ---------------------------------------------------------------------------
// Reviews
// ---------------------------------------------------------------------------

#[tokio::test]
async fn demo_reviews_combine_platform_and_rating_filters() {
    let json = get_json(
        common::demo_app(),
        "/api/demo/reviews?platform=google&ratingMin=4",
    )
    .await;

    let reviews = json["reviews"].as_array().unwrap();
    assert!(!reviews.is_empty());
    for review in reviews {
        assert_eq!(review["platform"], "google");
        assert!(review["rating"].as_i64().unwrap() >= 4);
    }
    assert_eq!(json["total"].as_i64().unwrap() as usize, reviews.len());
}

#[tokio::test]
async fn demo_review_stats_count_platforms() {
    let json = get_json(common::demo_app(), "/api/demo/reviews/stats").await;

    assert_eq!(json["totalReviews"], 16);
    let by_platform = json["googleCount"].as_i64().unwrap()
        + json["tripadvisorCount"].as_i64().unwrap()
        + json["facebookCount"].as_i64().unwrap();
    assert_eq!(by_platform, 16);
}

// ---------------------------------------------------------------------------
// Guarantee and notifications
// ---------------------------------------------------------------------------

#[tokio::test]
async fn demo_guarantee_stats_match_fixture_story() {
    let json = get_json(common::demo_app(), "/api/demo/guarantee/stats").await;

    assert_eq!(json["protectedReservations"], 8);
    assert_eq!(json["noShows"], 2);
    assert_eq!(json["recoveredCents"], 12000);
    assert_eq!(json["disputeCount"], 1);
}

#[tokio::test]
async fn demo_notifications_envelope_carries_unread_count() {
    let json = get_json(common::demo_app(), "/api/demo/notifications").await;

    let notifications = json["notifications"].as_array().unwrap();
    assert_eq!(notifications.len(), 18);
    assert_eq!(json["unreadCount"], 5);

    let unread_only = get_json(common::demo_app(), "/api/demo/notifications?unreadOnly=true").await;
    assert_eq!(unread_only["notifications"].as_array().unwrap().len(), 5);
}

// ---------------------------------------------------------------------------
// Bare-array and bare-object endpoints
// ---------------------------------------------------------------------------

#[tokio::test]
async fn demo_campaigns_and_session_shapes() {
    let campaigns = get_json(common::demo_app(), "/api/demo/marketing/campaigns").await;
    assert!(campaigns.is_array());

    let session = get_json(common::demo_app(), "/api/demo/auth/session").await;
    assert_eq!(session["authenticated"], true);
    assert!(session["user"]["businessName"].is_string());
}

#[tokio::test]
async fn demo_marketing_stats_honour_period() {
    let month = get_json(common::demo_app(), "/api/demo/marketing/stats").await;
    let all = get_json(common::demo_app(), "/api/demo/marketing/stats?period=all").await;

    let month_sent = month["emailsSent"].as_i64().unwrap();
    let all_sent = all["emailsSent"].as_i64().unwrap();
    assert!(all_sent > month_sent);
}

// ---------------------------------------------------------------------------
// Demo table is GET only
// ---------------------------------------------------------------------------

#[tokio::test]
async fn demo_write_verbs_are_not_registered() {
    // The path exists for GET, so other verbs get 405 from the router.
    let response = send(common::demo_app(), "PUT", "/api/demo/settings").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let response = send(common::demo_app(), "POST", "/api/demo/calls").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    // Write-only paths are absent from the demo table entirely.
    let response = send(common::demo_app(), "POST", "/api/demo/notifications/read-all").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
