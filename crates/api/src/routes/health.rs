use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::service::StoreHealth;
use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` with a reachable store, `degraded` when the store is down and
    /// content is served from the snapshot, `static` when no store is
    /// configured.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether a row store is configured.
    pub db_configured: bool,
    /// Whether the row store is reachable.
    pub db_healthy: bool,
}

/// GET /health -- returns service and row store health. Always 200.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let health = state.atlas.store_health().await;

    let status = match health {
        StoreHealth::Reachable => "ok",
        StoreHealth::Unreachable => "degraded",
        StoreHealth::NotConfigured => "static",
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_configured: health != StoreHealth::NotConfigured,
        db_healthy: health == StoreHealth::Reachable,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
