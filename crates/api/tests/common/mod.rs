#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use atlas_core::rows::AtlasRows;
use atlas_core::source::{AtlasSource, DataSourceError};
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use atlas_api::config::{LogFormat, ServerConfig};
use atlas_api::router::build_app_router;
use atlas_api::service::AtlasService;
use atlas_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout. No database is configured; tests inject
/// row sources directly.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        log_format: LogFormat::Pretty,
        database: None,
    }
}

/// Build the full application router around the given row source, with the
/// same middleware stack production uses.
pub fn build_test_app(source: Option<Arc<dyn AtlasSource>>) -> Router {
    build_test_app_with(AtlasService::new(source))
}

/// Build the application router around a preconfigured service.
pub fn build_test_app_with(atlas: AtlasService) -> Router {
    build_app_router(AppState { atlas }, &test_config())
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Read the provenance header of a response.
pub fn provenance(response: &Response<Body>) -> &str {
    response
        .headers()
        .get("x-atlas-data-source")
        .expect("Missing x-atlas-data-source header")
        .to_str()
        .unwrap()
}

// ---------------------------------------------------------------------------
// Row source doubles
// ---------------------------------------------------------------------------

/// Serves a fixed row set and counts fetches.
pub struct FixedSource {
    rows: AtlasRows,
    fetches: AtomicUsize,
}

impl FixedSource {
    pub fn new(rows: AtlasRows) -> Arc<Self> {
        Arc::new(Self {
            rows,
            fetches: AtomicUsize::new(0),
        })
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AtlasSource for FixedSource {
    async fn fetch_rows(&self) -> Result<AtlasRows, DataSourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows.clone())
    }

    async fn ping(&self) -> Result<(), DataSourceError> {
        Ok(())
    }
}

/// Never answers, like a store stuck behind a lock.
pub struct StalledSource;

#[async_trait]
impl AtlasSource for StalledSource {
    async fn fetch_rows(&self) -> Result<AtlasRows, DataSourceError> {
        std::future::pending().await
    }

    async fn ping(&self) -> Result<(), DataSourceError> {
        std::future::pending().await
    }
}

/// Fails every call, like a store whose connection is down.
pub struct FailingSource;

#[async_trait]
impl AtlasSource for FailingSource {
    async fn fetch_rows(&self) -> Result<AtlasRows, DataSourceError> {
        Err(DataSourceError::Query("connection refused".into()))
    }

    async fn ping(&self) -> Result<(), DataSourceError> {
        Err(DataSourceError::Query("connection refused".into()))
    }
}
