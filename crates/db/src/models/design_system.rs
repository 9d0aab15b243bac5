//! Design system entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use oro_core::types::{EntityId, Timestamp};

/// A design system row from the `design_systems` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct DesignSystem {
    pub id: EntityId,
    pub project_id: EntityId,
    pub name: String,
    pub description: Option<String>,
    pub version: String,
    pub is_public: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new design system.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDesignSystem {
    pub project_id: EntityId,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    /// Defaults to `1.0.0` if omitted.
    pub version: Option<String>,
    /// Defaults to `false` if omitted.
    pub is_public: Option<bool>,
}

/// DTO for updating an existing design system. All fields are optional;
/// a design system cannot be moved to another project.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateDesignSystem {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    pub version: Option<String>,
    pub is_public: Option<bool>,
}
