use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use oro_core::data_mode::DataMode;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Active data mode.
    pub data_mode: DataMode,
    /// Whether the database is reachable. `None` when none is configured.
    pub db_healthy: Option<bool>,
}

/// GET /health -- returns service health, the active data mode, and
/// database reachability.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match &state.database {
        Some(database) => Some(oro_db::health_check(database.pool()).await.is_ok()),
        None => None,
    };

    let status = if db_healthy == Some(false) {
        "degraded"
    } else {
        "ok"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        data_mode: state.data_mode.current(),
        db_healthy,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
