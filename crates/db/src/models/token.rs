//! Design token entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use oro_core::types::{EntityId, Timestamp};

/// A token row from the `tokens` table.
///
/// `token_type` is one of `oro_core::canvas::token_types::ALL` and is
/// exposed on the wire as `type`, matching the client contract.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Token {
    pub id: EntityId,
    pub design_system_id: EntityId,
    pub name: String,
    pub value: String,
    #[serde(rename = "type")]
    pub token_type: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new token. The owning design system comes from the
/// route path, not the body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateToken {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1))]
    pub value: String,
    #[serde(rename = "type")]
    pub token_type: String,
    #[validate(length(max = 500))]
    pub description: Option<String>,
}

/// DTO for updating an existing token. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateToken {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub value: Option<String>,
    #[serde(rename = "type")]
    pub token_type: Option<String>,
    #[validate(length(max = 500))]
    pub description: Option<String>,
}
