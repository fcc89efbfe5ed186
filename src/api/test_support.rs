//! Helpers for driving the full router in tests

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use super::{create_router, AppState};
use crate::config::{CorsConfig, InferenceConfig};
use crate::domain::InferenceState;
use crate::infrastructure::auth::StaticTokenVerifier;
use crate::infrastructure::inference::initialize_inference;

pub const TEST_TOKEN: &str = "test-admin-token";

pub fn state_with(inference: InferenceState) -> AppState {
    AppState::new(
        Arc::new(StaticTokenVerifier::new(TEST_TOKEN)),
        inference,
        "Portfolio Website with Blog",
    )
}

pub fn ready_state() -> AppState {
    state_with(initialize_inference(&InferenceConfig::default()))
}

pub fn app(state: AppState) -> Router {
    create_router(state, &CorsConfig::default())
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub async fn send(router: Router, request: Request<Body>) -> TestResponse {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn get_with_token(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("X-Admin-Token", token)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
