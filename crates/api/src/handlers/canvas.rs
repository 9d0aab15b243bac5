//! Canvas editing session handlers, nested under
//! `/design-systems/{id}/canvas`.
//!
//! Each design system has at most one in-memory [`HistoryLog`]. The first
//! request seeds it with a snapshot built from the persisted components;
//! every edit records a new snapshot; undo/redo walk the log. Sessions die
//! with the process (or on DELETE).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use oro_core::canvas::{
    validate_snapshot, CanvasElement, CanvasSnapshot, Position, Size, DEFAULT_ELEMENT_HEIGHT,
    DEFAULT_ELEMENT_WIDTH, ELEMENT_SPACING,
};
use oro_core::history::HistoryLog;
use oro_core::types::EntityId;
use oro_db::models::Component;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Canvas state returned by every session endpoint.
#[derive(Debug, Serialize)]
pub struct CanvasState {
    pub elements: Vec<CanvasElement>,
    pub can_undo: bool,
    pub can_redo: bool,
    /// Number of snapshots in the session history.
    pub depth: usize,
}

impl CanvasState {
    fn from_log(log: &HistoryLog) -> Self {
        Self {
            elements: log.current().elements,
            can_undo: log.can_undo(),
            can_redo: log.can_redo(),
            depth: log.len(),
        }
    }
}

/// Request body for recording a new snapshot.
#[derive(Debug, Deserialize)]
pub struct RecordSnapshot {
    pub elements: Vec<CanvasElement>,
}

/// Build the initial snapshot from persisted components, laid out top to
/// bottom with default sizes.
fn initial_snapshot(components: &[Component]) -> CanvasSnapshot {
    let elements = components
        .iter()
        .enumerate()
        .map(|(i, component)| CanvasElement {
            id: component.id.to_string(),
            element_type: component.component_type.clone(),
            props: component.props.clone(),
            position: Position {
                x: 0.0,
                y: i as f64 * (DEFAULT_ELEMENT_HEIGHT + ELEMENT_SPACING),
            },
            size: Size {
                width: DEFAULT_ELEMENT_WIDTH,
                height: DEFAULT_ELEMENT_HEIGHT,
            },
        })
        .collect();
    CanvasSnapshot::new(elements)
}

/// Fetch the session for a design system, seeding it from the persisted
/// components on first access. Fails `NotFound` for an absent design
/// system.
async fn load_session(state: &AppState, design_system_id: EntityId) -> AppResult<HistoryLog> {
    // Existence check regardless of session state, so a deleted design
    // system cannot be edited through a stale session.
    state.store().get_design_system(design_system_id).await?;

    if let Some(log) = state.builder_sessions.read().await.get(&design_system_id) {
        return Ok(log.clone());
    }

    let components = state.store().list_components(design_system_id).await?;
    let log = HistoryLog::with_initial(initial_snapshot(&components));
    state
        .builder_sessions
        .write()
        .await
        .insert(design_system_id, log.clone());
    Ok(log)
}

/// Store the new log for a session and report the resulting canvas state.
async fn commit(state: &AppState, design_system_id: EntityId, log: HistoryLog) -> CanvasState {
    let canvas = CanvasState::from_log(&log);
    state
        .builder_sessions
        .write()
        .await
        .insert(design_system_id, log);
    canvas
}

/// GET /api/v1/design-systems/{id}/canvas
pub async fn get_canvas(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<DataResponse<CanvasState>>> {
    let log = load_session(&state, id).await?;
    Ok(Json(DataResponse::new(CanvasState::from_log(&log))))
}

/// PUT /api/v1/design-systems/{id}/canvas
///
/// Record a new snapshot. Any redoable entries beyond the cursor are
/// permanently discarded.
pub async fn record(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<RecordSnapshot>,
) -> AppResult<Json<DataResponse<CanvasState>>> {
    let snapshot = CanvasSnapshot::new(input.elements);
    validate_snapshot(&snapshot)?;

    let log = load_session(&state, id).await?.record(snapshot);
    let canvas = commit(&state, id, log).await;
    Ok(Json(DataResponse::new(canvas)))
}

/// POST /api/v1/design-systems/{id}/canvas/undo
///
/// Silent no-op when there is nothing to undo.
pub async fn undo(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<DataResponse<CanvasState>>> {
    let log = load_session(&state, id).await?.undo();
    let canvas = commit(&state, id, log).await;
    Ok(Json(DataResponse::new(canvas)))
}

/// POST /api/v1/design-systems/{id}/canvas/redo
///
/// Silent no-op when there is nothing to redo.
pub async fn redo(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<DataResponse<CanvasState>>> {
    let log = load_session(&state, id).await?.redo();
    let canvas = commit(&state, id, log).await;
    Ok(Json(DataResponse::new(canvas)))
}

/// DELETE /api/v1/design-systems/{id}/canvas
///
/// Drop the editing session; the next GET re-seeds from persisted
/// components.
pub async fn reset(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    state.store().get_design_system(id).await?;
    state.builder_sessions.write().await.remove(&id);
    Ok(StatusCode::NO_CONTENT)
}
