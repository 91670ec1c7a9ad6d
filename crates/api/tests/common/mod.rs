#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use chrono::{DateTime, Utc};
use chronicle_api::auth::session::SessionConfig;
use chronicle_api::config::ServerConfig;
use chronicle_api::router::build_app_router;
use chronicle_api::state::AppState;
use chronicle_core::post::sample_posts;
use chronicle_store::StorePool;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        seed_sample_posts: false,
        session: SessionConfig {
            secret: "integration-test-secret-long-enough".to_string(),
            expiry_hours: 24,
        },
    }
}

/// A store holding the three sample posts, created relative to `now`.
pub fn seeded_store(now: DateTime<Utc>) -> StorePool {
    chronicle_store::create_seeded_store(sample_posts(now))
}

/// Build the full application router over `store`.
pub fn build_test_app(store: StorePool) -> Router {
    build_app_router(AppState {
        store,
        config: Arc::new(test_config()),
    })
}

fn request(
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    app.oneshot(request(method, uri, cookie, body)).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(cookie), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_with_cookie(
    app: Router,
    uri: &str,
    cookie: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(cookie), Some(body)).await
}

pub async fn put_json_with_cookie(
    app: Router,
    uri: &str,
    cookie: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(cookie), Some(body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The `name=value` pair from a response's `Set-Cookie` header, ready to be
/// sent back in a `Cookie` header.
pub fn session_cookie_pair(response: &Response<Body>) -> String {
    let header = response
        .headers()
        .get(SET_COOKIE)
        .expect("response must set a cookie")
        .to_str()
        .unwrap();
    header.split(';').next().unwrap().to_string()
}

/// Register `username` through the API and return the session cookie pair
/// and the new user's id.
pub async fn sign_up(app: Router, username: &str, password: &str) -> (String, String) {
    let body = serde_json::json!({ "username": username, "password": password });
    let response = post_json(app, "/users", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let cookie = session_cookie_pair(&response);
    let json = body_json(response).await;
    (cookie, json["id"].as_str().unwrap().to_string())
}
