//! Handlers for tokens, nested under `/design-systems/{design_system_id}/tokens`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use oro_core::canvas::validate_token_type;
use oro_core::error::CoreError;
use oro_core::types::EntityId;
use oro_db::models::{CreateToken, Token, UpdateToken};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Fetch a token and check it belongs to the design system in the path.
/// A token alive under a different parent is reported as absent.
async fn get_owned(
    state: &AppState,
    design_system_id: EntityId,
    id: EntityId,
) -> AppResult<Token> {
    let token = state.store().get_token(id).await?;
    if token.design_system_id != design_system_id {
        return Err(AppError::Core(CoreError::NotFound { entity: "Token", id }));
    }
    Ok(token)
}

/// POST /api/v1/design-systems/{design_system_id}/tokens
pub async fn create(
    State(state): State<AppState>,
    Path(design_system_id): Path<EntityId>,
    Json(input): Json<CreateToken>,
) -> AppResult<(StatusCode, Json<DataResponse<Token>>)> {
    input.validate()?;
    validate_token_type(&input.token_type)?;
    let token = state.store().create_token(design_system_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(token))))
}

/// GET /api/v1/design-systems/{design_system_id}/tokens
pub async fn list_by_design_system(
    State(state): State<AppState>,
    Path(design_system_id): Path<EntityId>,
) -> AppResult<Json<DataResponse<Vec<Token>>>> {
    let tokens = state.store().list_tokens(design_system_id).await?;
    Ok(Json(DataResponse::new(tokens)))
}

/// GET /api/v1/design-systems/{design_system_id}/tokens/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((design_system_id, id)): Path<(EntityId, EntityId)>,
) -> AppResult<Json<DataResponse<Token>>> {
    let token = get_owned(&state, design_system_id, id).await?;
    Ok(Json(DataResponse::new(token)))
}

/// PUT /api/v1/design-systems/{design_system_id}/tokens/{id}
pub async fn update(
    State(state): State<AppState>,
    Path((design_system_id, id)): Path<(EntityId, EntityId)>,
    Json(input): Json<UpdateToken>,
) -> AppResult<Json<DataResponse<Token>>> {
    input.validate()?;
    if let Some(token_type) = &input.token_type {
        validate_token_type(token_type)?;
    }
    get_owned(&state, design_system_id, id).await?;
    let token = state.store().update_token(id, &input).await?;
    Ok(Json(DataResponse::new(token)))
}

/// DELETE /api/v1/design-systems/{design_system_id}/tokens/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((design_system_id, id)): Path<(EntityId, EntityId)>,
) -> AppResult<StatusCode> {
    get_owned(&state, design_system_id, id).await?;
    state.store().delete_token(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
