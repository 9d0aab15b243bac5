//! Handlers for components, nested under
//! `/design-systems/{design_system_id}/components`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use oro_core::canvas::{is_valid_element_type, validate_props};
use oro_core::error::CoreError;
use oro_core::types::EntityId;
use oro_db::models::{Component, CreateComponent, UpdateComponent};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

fn validate_component_type(component_type: &str) -> Result<(), CoreError> {
    if is_valid_element_type(component_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid component type '{component_type}'"
        )))
    }
}

/// Fetch a component and check it belongs to the design system in the
/// path. A component alive under a different parent is reported as absent.
async fn get_owned(
    state: &AppState,
    design_system_id: EntityId,
    id: EntityId,
) -> AppResult<Component> {
    let component = state.store().get_component(id).await?;
    if component.design_system_id != design_system_id {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Component",
            id,
        }));
    }
    Ok(component)
}

/// POST /api/v1/design-systems/{design_system_id}/components
pub async fn create(
    State(state): State<AppState>,
    Path(design_system_id): Path<EntityId>,
    Json(input): Json<CreateComponent>,
) -> AppResult<(StatusCode, Json<DataResponse<Component>>)> {
    input.validate()?;
    validate_component_type(&input.component_type)?;
    if let Some(props) = &input.props {
        validate_props(props)?;
    }
    let component = state
        .store()
        .create_component(design_system_id, &input)
        .await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(component))))
}

/// GET /api/v1/design-systems/{design_system_id}/components
pub async fn list_by_design_system(
    State(state): State<AppState>,
    Path(design_system_id): Path<EntityId>,
) -> AppResult<Json<DataResponse<Vec<Component>>>> {
    let components = state.store().list_components(design_system_id).await?;
    Ok(Json(DataResponse::new(components)))
}

/// GET /api/v1/design-systems/{design_system_id}/components/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((design_system_id, id)): Path<(EntityId, EntityId)>,
) -> AppResult<Json<DataResponse<Component>>> {
    let component = get_owned(&state, design_system_id, id).await?;
    Ok(Json(DataResponse::new(component)))
}

/// PUT /api/v1/design-systems/{design_system_id}/components/{id}
pub async fn update(
    State(state): State<AppState>,
    Path((design_system_id, id)): Path<(EntityId, EntityId)>,
    Json(input): Json<UpdateComponent>,
) -> AppResult<Json<DataResponse<Component>>> {
    input.validate()?;
    if let Some(component_type) = &input.component_type {
        validate_component_type(component_type)?;
    }
    if let Some(props) = &input.props {
        validate_props(props)?;
    }
    get_owned(&state, design_system_id, id).await?;
    let component = state.store().update_component(id, &input).await?;
    Ok(Json(DataResponse::new(component)))
}

/// DELETE /api/v1/design-systems/{design_system_id}/components/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((design_system_id, id)): Path<(EntityId, EntityId)>,
) -> AppResult<StatusCode> {
    get_owned(&state, design_system_id, id).await?;
    state.store().delete_component(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
