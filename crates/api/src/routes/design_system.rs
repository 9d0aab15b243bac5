//! Route definitions for the `/design-systems` resource.
//!
//! Also nests token, component, and canvas session routes under
//! `/design-systems/{design_system_id}/...`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{canvas, component, design_system, token};
use crate::state::AppState;

/// Routes mounted at `/design-systems`.
///
/// ```text
/// GET    /                                 -> list (?project_id=)
/// POST   /                                 -> create
/// GET    /{design_system_id}               -> get_by_id
/// PUT    /{design_system_id}               -> update
/// DELETE /{design_system_id}               -> delete (cascades)
///
/// GET    /{design_system_id}/tokens        -> list_by_design_system
/// POST   /{design_system_id}/tokens        -> create
/// GET    /{design_system_id}/tokens/{id}   -> get_by_id
/// PUT    /{design_system_id}/tokens/{id}   -> update
/// DELETE /{design_system_id}/tokens/{id}   -> delete
///
/// (components: same shape as tokens)
///
/// GET    /{design_system_id}/canvas        -> get_canvas
/// PUT    /{design_system_id}/canvas        -> record
/// DELETE /{design_system_id}/canvas        -> reset
/// POST   /{design_system_id}/canvas/undo   -> undo
/// POST   /{design_system_id}/canvas/redo   -> redo
/// ```
pub fn router() -> Router<AppState> {
    let token_routes = Router::new()
        .route("/", get(token::list_by_design_system).post(token::create))
        .route(
            "/{id}",
            get(token::get_by_id).put(token::update).delete(token::delete),
        );

    let component_routes = Router::new()
        .route(
            "/",
            get(component::list_by_design_system).post(component::create),
        )
        .route(
            "/{id}",
            get(component::get_by_id)
                .put(component::update)
                .delete(component::delete),
        );

    Router::new()
        .route("/", get(design_system::list).post(design_system::create))
        .route(
            "/{design_system_id}",
            get(design_system::get_by_id)
                .put(design_system::update)
                .delete(design_system::delete),
        )
        .nest("/{design_system_id}/tokens", token_routes)
        .nest("/{design_system_id}/components", component_routes)
        .route(
            "/{design_system_id}/canvas",
            get(canvas::get_canvas)
                .put(canvas::record)
                .delete(canvas::reset),
        )
        .route("/{design_system_id}/canvas/undo", post(canvas::undo))
        .route("/{design_system_id}/canvas/redo", post(canvas::redo))
}
