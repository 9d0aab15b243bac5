//! Handlers for the `/data-mode` resource.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use oro_core::data_mode::DataMode;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Current mode plus the startup-derived availability flag.
#[derive(Debug, Serialize)]
pub struct DataModeInfo {
    pub mode: DataMode,
    pub database_available: bool,
}

/// Request body for switching the active mode.
#[derive(Debug, Deserialize)]
pub struct SetDataMode {
    pub mode: DataMode,
}

fn info(state: &AppState) -> DataModeInfo {
    DataModeInfo {
        mode: state.data_mode.current(),
        database_available: state.data_mode.database_available(),
    }
}

/// GET /api/v1/data-mode
pub async fn get(State(state): State<AppState>) -> Json<DataResponse<DataModeInfo>> {
    Json(DataResponse::new(info(&state)))
}

/// PUT /api/v1/data-mode
///
/// Switching to `database` without a configured database is rejected with
/// 409 and leaves the mode unchanged.
pub async fn set(
    State(state): State<AppState>,
    Json(input): Json<SetDataMode>,
) -> AppResult<Json<DataResponse<DataModeInfo>>> {
    state.data_mode.set(input.mode)?;
    tracing::info!(mode = %input.mode, "Data mode switched");
    Ok(Json(DataResponse::new(info(&state))))
}
