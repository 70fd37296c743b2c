use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use speedai_api::config::ServerConfig;
use speedai_api::router::build_app_router;
use speedai_api::state::AppState;
use speedai_fixtures::FixtureStore;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout. Demo mode is on so the `/api/demo`
/// table is mounted.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        business_id: 1,
        demo_mode: true,
    }
}

/// Build the full application router with all middleware layers.
///
/// Both tables are fixture-backed here: the live `/api` table gets a
/// `FixtureStore` injected directly, which lets the whole HTTP surface
/// run without Postgres while exercising the exact production middleware
/// stack and demo mount logic.
pub fn build_test_app(config: ServerConfig) -> Router {
    let state = AppState {
        store: Arc::new(FixtureStore::new()),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// `build_test_app` with the default test config (demo mode on).
pub fn demo_app() -> Router {
    build_test_app(test_config())
}

/// Send a GET request to the app and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request build failed"),
    )
    .await
    .expect("request failed")
}

/// Send a bodyless request with an arbitrary method.
pub async fn send(app: Router, method: &str, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("request build failed"),
    )
    .await
    .expect("request failed")
}

/// Collect the raw response body bytes.
pub async fn body_bytes(response: Response<Body>) -> axum::body::Bytes {
    response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes()
}

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("body is not valid JSON")
}

/// Assert a 200 and return the parsed JSON body.
pub async fn get_json(app: Router, uri: &str) -> serde_json::Value {
    let response = get(app, uri).await;
    assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
    body_json(response).await
}
