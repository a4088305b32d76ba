use std::sync::Arc;

use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use bytes::Bytes;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use crate::{drafts::store::DraftStore, gemini::gateway::ModelGateway, AppState};

use super::env::Envy;

/// State backed by the given gateway and a throwaway drafts directory.
pub fn test_state(gateway: Arc<dyn ModelGateway>) -> (TempDir, AppState) {
    let dir = tempfile::tempdir().unwrap();

    let envy = Envy {
        app_env: "test".to_string(),
        port: None,
        gemini_api_key: "test-key".to_string(),
        gemini_api_url: None,
        text_model: None,
        image_model: None,
        request_timeout_secs: None,
        drafts_dir: Some(dir.path().to_string_lossy().to_string()),
        rate_limit_per_sec: None,
        request_queue_size: None,
    };

    let state = AppState {
        gateway,
        drafts: DraftStore::new(dir.path()),
        envy: Arc::new(envy),
    };

    (dir, state)
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    json_request("POST", uri, body)
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send_raw(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Bytes) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();

    (status, headers, bytes)
}

/// Sends the request and reads the body as JSON, `Value::Null` when it is empty.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, _, bytes) = send_raw(app, request).await;

    if bytes.is_empty() {
        return (status, Value::Null);
    }

    (status, serde_json::from_slice(&bytes).unwrap())
}
