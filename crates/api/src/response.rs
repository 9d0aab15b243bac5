//! Shared response envelope types for API handlers.
//!
//! All API responses use the `{ "success": bool, "data": ... }` envelope.
//! Use [`DataResponse`] instead of ad-hoc `serde_json::json!` to get
//! compile-time type safety and consistent serialization; error responses
//! are produced by `AppError::into_response` with `success: false`.

use serde::Serialize;

/// Standard `{ "success": true, "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
