pub mod data_mode;
pub mod design_system;
pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /projects                                        list, create
/// /projects/{id}                                   get, update, delete
///
/// /design-systems                                  list (?project_id=), create
/// /design-systems/{id}                             get, update, delete
/// /design-systems/{design_system_id}/tokens        list, create
/// /design-systems/{design_system_id}/tokens/{id}   get, update, delete
/// /design-systems/{design_system_id}/components    list, create
/// /design-systems/{design_system_id}/components/{id}  get, update, delete
/// /design-systems/{design_system_id}/canvas        get, record, reset
/// /design-systems/{design_system_id}/canvas/undo   undo (POST)
/// /design-systems/{design_system_id}/canvas/redo   redo (POST)
///
/// /data-mode                                       get, set
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/design-systems", design_system::router())
        .nest("/data-mode", data_mode::router())
}
