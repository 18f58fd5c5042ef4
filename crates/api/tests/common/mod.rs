use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use pokecompanion_api::config::ServerConfig;
use pokecompanion_api::router::build_app_router;
use pokecompanion_api::state::AppState;
use pokecompanion_pokeapi::PokeApiClient;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout. The PokéAPI base URL points at an
/// unroutable port so a test that accidentally reaches upstream fails
/// fast instead of talking to the real service.
pub fn test_config(pokeapi_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        pokeapi_url: pokeapi_url.to_string(),
        pokeapi_timeout_secs: 5,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This goes through the same [`build_app_router`] that `main.rs` uses, so
/// integration tests exercise the production middleware stack (CORS,
/// request ID, timeout, tracing, panic recovery).
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_pokeapi(pool, "http://127.0.0.1:1")
}

/// Same as [`build_test_app`] but pointing the PokéAPI client at the given
/// base URL, normally a stub server bound to a local listener.
pub fn build_test_app_with_pokeapi(pool: PgPool, pokeapi_url: &str) -> Router {
    let config = test_config(pokeapi_url);
    let pokeapi = PokeApiClient::new(
        config.pokeapi_url.clone(),
        Duration::from_secs(config.pokeapi_timeout_secs),
    )
    .expect("Failed to build PokeAPI client");

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        pokeapi: Arc::new(pokeapi),
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response<axum::body::Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a POST request with a JSON body.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
) -> Response<axum::body::Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a PUT request with a JSON body.
pub async fn put_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
) -> Response<axum::body::Body> {
    app.oneshot(
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a DELETE request against the app.
pub async fn delete(app: Router, uri: &str) -> Response<axum::body::Body> {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Decode a response body as JSON.
pub async fn body_json(response: Response<axum::body::Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("Response body was not valid JSON")
}

/// Assert status and decode in one step, with the body in the failure
/// message when the status does not match.
pub async fn expect_status(
    response: Response<axum::body::Body>,
    expected: StatusCode,
) -> serde_json::Value {
    let status = response.status();
    let json = body_json(response).await;
    assert_eq!(status, expected, "unexpected status, body: {json}");
    json
}
