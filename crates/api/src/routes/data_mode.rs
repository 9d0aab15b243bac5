//! Route definitions for the `/data-mode` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::data_mode;
use crate::state::AppState;

/// Routes mounted at `/data-mode`.
///
/// ```text
/// GET /  -> get
/// PUT /  -> set
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(data_mode::get).put(data_mode::set))
}
