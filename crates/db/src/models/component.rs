//! Component entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use oro_core::types::{EntityId, Timestamp};

/// A component row from the `components` table.
///
/// `props` is an opaque JSON object; `component_type` is one of
/// `oro_core::canvas::element_types::ALL` and is exposed on the wire as
/// `type`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Component {
    pub id: EntityId,
    pub design_system_id: EntityId,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub component_type: String,
    pub props: serde_json::Value,
    pub code: String,
    pub preview_image: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new component. The owning design system comes from
/// the route path, not the body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateComponent {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub component_type: String,
    /// Defaults to an empty object if omitted.
    pub props: Option<serde_json::Value>,
    /// Defaults to an empty string if omitted.
    pub code: Option<String>,
    pub preview_image: Option<String>,
}

/// DTO for updating an existing component. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateComponent {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub component_type: Option<String>,
    pub props: Option<serde_json::Value>,
    pub code: Option<String>,
    pub preview_image: Option<String>,
}
