//! Handlers for the `/design-systems` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use oro_core::types::EntityId;
use oro_db::models::{CreateDesignSystem, DesignSystem, UpdateDesignSystem};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for listing design systems.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Scope the listing to one project.
    pub project_id: Option<EntityId>,
}

/// POST /api/v1/design-systems
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateDesignSystem>,
) -> AppResult<(StatusCode, Json<DataResponse<DesignSystem>>)> {
    input.validate()?;
    let design_system = state.store().create_design_system(&input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(design_system))))
}

/// GET /api/v1/design-systems?project_id=...
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<DataResponse<Vec<DesignSystem>>>> {
    let design_systems = state.store().list_design_systems(params.project_id).await?;
    Ok(Json(DataResponse::new(design_systems)))
}

/// GET /api/v1/design-systems/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<DataResponse<DesignSystem>>> {
    let design_system = state.store().get_design_system(id).await?;
    Ok(Json(DataResponse::new(design_system)))
}

/// PUT /api/v1/design-systems/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<UpdateDesignSystem>,
) -> AppResult<Json<DataResponse<DesignSystem>>> {
    input.validate()?;
    let design_system = state.store().update_design_system(id, &input).await?;
    Ok(Json(DataResponse::new(design_system)))
}

/// DELETE /api/v1/design-systems/{id}
///
/// Also drops any builder session for this design system; the persistence
/// layer cascades tokens and components.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    state.store().delete_design_system(id).await?;
    state.builder_sessions.write().await.remove(&id);
    Ok(StatusCode::NO_CONTENT)
}
