//! Shared helpers for HTTP-level tests

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use employee_server::{Config, DbService, ServerState, build_app};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// App backed by a private in-memory database
pub async fn test_app() -> Router {
    let db = DbService::in_memory().await.unwrap();
    let config = Config::with_overrides(std::env::temp_dir().to_string_lossy(), 0);
    build_app(ServerState::with_db(config, db))
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn send_raw(app: &Router, method: Method, uri: &str, raw: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(raw.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn json_body(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Send and return (status, parsed body)
pub async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let response = send(app, method, uri, body).await;
    let status = response.status();
    (status, json_body(response).await)
}
