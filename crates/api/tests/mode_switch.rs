//! Integration tests for the demo mount decision.
//!
//! The demo table only exists when `demo_mode` is on; the live `/api`
//! table is unaffected either way.

mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json, get, send, test_config};

fn live_only_app() -> axum::Router {
    let mut config = test_config();
    config.demo_mode = false;
    common::build_test_app(config)
}

// ---------------------------------------------------------------------------
// Test: demo paths do not exist when demo mode is off
// ---------------------------------------------------------------------------

#[tokio::test]
async fn demo_routes_absent_when_disabled() {
    let response = get(live_only_app(), "/api/demo/calls").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    // The router's own 404, not the application's JSON `{message}` body.
    assert!(body_bytes(response).await.is_empty());

    let response = get(live_only_app(), "/api/demo/calls/stats").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());
}

// ---------------------------------------------------------------------------
// Test: the live table serves regardless of demo mode
// ---------------------------------------------------------------------------

#[tokio::test]
async fn live_routes_serve_in_both_modes() {
    let json = common::get_json(live_only_app(), "/api/calls?limit=5").await;
    assert_eq!(json["calls"].as_array().unwrap().len(), 5);

    let json = common::get_json(common::demo_app(), "/api/calls?limit=5").await;
    assert_eq!(json["calls"].as_array().unwrap().len(), 5);
}

// ---------------------------------------------------------------------------
// Test: live write routes are registered (the demo table's are not)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn live_write_routes_are_registered() {
    // The fixture store backing the test app refuses mutations, which
    // surfaces as a 400 rather than a routing-level 404 or 405. The
    // route itself exists.
    let response = send(live_only_app(), "POST", "/api/notifications/read-all").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "Les données de démonstration sont en lecture seule"
    );
}
