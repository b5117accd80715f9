#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::{self, Body},
    http::{Request, StatusCode, header},
    response::Response,
};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use widget_service::{app::build_app, state::AppState, test_helpers::test_state};

/// An application backed by a fresh SQLite file; the file is removed when
/// the value is dropped.
pub struct TestApp {
    pub state: Arc<AppState>,
    _dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("widgets.db").display());
        let state = test_state(&url).await.expect("build test state");
        Self { state, _dir: dir }
    }

    pub fn router(&self) -> Router {
        build_app(self.state.clone())
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router().oneshot(request).await.expect("request should complete")
    }

    pub async fn json(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.send(request).await;
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let json = serde_json::from_slice(&bytes).expect("body should be json");
        (status, json)
    }

    pub async fn create_widget(&self, name: &str, number_of_parts: i64) -> Value {
        let (status, body) = self
            .json(json_request(
                "POST",
                "/widgets",
                &serde_json::json!({ "name": name, "number_of_parts": number_of_parts }),
            ))
            .await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {body}");
        body
    }
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request")
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("build request")
}
