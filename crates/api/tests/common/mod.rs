#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::MySqlPool;
use tower::ServiceExt;

use worldcity_api::config::ServerConfig;
use worldcity_api::router::build_app_router;
use worldcity_api::state::AppState;
use worldcity_db::DbConfig;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        database: DbConfig::from_lookup(|_| None),
    }
}

/// Build the full application router, with all middleware layers, over the
/// given pool.
pub fn build_test_app(pool: MySqlPool) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
    };
    build_app_router(state)
}

/// A lazy pool pointed at a port nothing listens on. Every query fails once
/// the one-second acquire timeout elapses.
pub fn unreachable_pool() -> MySqlPool {
    let config = DbConfig {
        host: "127.0.0.1".to_string(),
        port: 1,
        acquire_timeout_secs: 1,
        ..DbConfig::from_lookup(|_| None)
    };
    worldcity_db::create_pool(&config)
}

/// Send a POST with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST with a URL-encoded form body, e.g. `"cityName=Paris"`.
pub async fn post_form(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a request with an arbitrary method, content type and raw body.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(CONTENT_TYPE, content_type);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
