//! Shared test utilities for integration tests.
//!
//! Provides a `TestClient` that makes HTTP requests against the
//! application with a temporary on-disk data file and debts directory.
//! Methods are intentionally broad to support various test scenarios
//! across different test files.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use paychart::config::{Config, DebtRates};
use paychart::handlers;
use paychart::server::build_app;
use paychart::state::AppState;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tower::ServiceExt;

/// Snapshot used by most tests: two teams, one interval each.
pub const SAMPLE_DATA: &str = r#"{
    "teams": {
        "A": [{"startDate": "2025-08-01", "endDate": "2025-08-05"}],
        "B": [{"startDate": "2025-08-03", "endDate": "2025-08-03"}]
    }
}"#;

/// A test client that runs requests against a fresh temp directory
/// holding the data file and the debt reports.
pub struct TestClient {
    state: AppState,
    tmp: TempDir,
}

impl TestClient {
    /// Create a client with the default two-team snapshot.
    pub fn new() -> Self {
        Self::with_data(SAMPLE_DATA)
    }

    /// Create a client with a specific JSON snapshot on disk.
    pub fn with_data(data_json: &str) -> Self {
        Self::build(Some(data_json), |_| {})
    }

    /// Create a client with a snapshot and a customized config.
    pub fn with_config(data_json: &str, customize: impl FnOnce(&mut Config)) -> Self {
        Self::build(Some(data_json), customize)
    }

    /// Create a client whose data file does not exist.
    pub fn without_data_file() -> Self {
        Self::build(None, |_| {})
    }

    fn build(data_json: Option<&str>, customize: impl FnOnce(&mut Config)) -> Self {
        let tmp = tempfile::tempdir().expect("Failed to create temp dir");
        let data_path = tmp.path().join("data.json");
        if let Some(json) = data_json {
            fs::write(&data_path, json).expect("Failed to write data file");
        }
        let debts_path = tmp.path().join("debts");
        fs::create_dir_all(&debts_path).expect("Failed to create debts dir");

        let mut config = Config {
            host: "127.0.0.1".into(),
            port: 3000,
            data_path,
            debts_path,
            static_path: tmp.path().join("static"),
            message_base_url: "https://wa.me/04162069479".into(),
            download_teams: None,
            debt_rates: DebtRates::default(),
        };
        customize(&mut config);

        Self {
            state: AppState::new(config),
            tmp,
        }
    }

    pub fn config(&self) -> &Config {
        &self.state.config
    }

    pub fn debts_dir(&self) -> &Path {
        &self.state.config.debts_path
    }

    /// Drop a raw debt report file into the debts directory.
    pub fn write_debt_report(&self, file_name: &str, content: &str) {
        fs::write(self.debts_dir().join(file_name), content).expect("Failed to write debt report");
    }

    /// Router with routes only (no error page middleware), for testing
    /// raw handler responses.
    pub fn router(&self) -> Router {
        handlers::routes().with_state(self.state.clone())
    }

    /// Full production router: fallback, static files, middleware stack.
    pub fn full_router(&self) -> Router {
        build_app((*self.state.config).clone()).1
    }

    /// Make a GET request and return status and body.
    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        Self::send(self.router(), "GET", uri).await
    }

    /// Make a GET request through the full middleware stack.
    pub async fn get_full(&self, uri: &str) -> (StatusCode, String) {
        Self::send(self.full_router(), "GET", uri).await
    }

    /// Make a POST request with an empty body.
    pub async fn post(&self, uri: &str) -> (StatusCode, String) {
        Self::send(self.router(), "POST", uri).await
    }

    /// Make a GET request and parse the body as JSON.
    pub async fn get_json(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let (status, body) = self.get(uri).await;
        let parsed = serde_json::from_str(&body)
            .unwrap_or_else(|e| panic!("Response to {} is not JSON ({}): {}", uri, e, body));
        (status, parsed)
    }

    /// Make a POST request and parse the body as JSON.
    pub async fn post_json(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let (status, body) = self.post(uri).await;
        let parsed = serde_json::from_str(&body)
            .unwrap_or_else(|e| panic!("Response to {} is not JSON ({}): {}", uri, e, body));
        (status, parsed)
    }

    /// Make a GET request and return status plus response headers.
    pub async fn get_with_headers(&self, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
        let response = self
            .router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, headers, String::from_utf8_lossy(&body).to_string())
    }

    async fn send(router: Router, method: &str, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8_lossy(&body).to_string())
    }
}
