//! Repository for the `tokens` table.

use sqlx::PgPool;

use oro_core::types::EntityId;

use crate::models::token::{CreateToken, Token, UpdateToken};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, design_system_id, name, value, token_type, description, created_at, updated_at";

/// Provides CRUD operations for design tokens.
pub struct TokenRepo;

impl TokenRepo {
    /// Insert a new token under the given design system, returning the
    /// created row.
    pub async fn create(
        pool: &PgPool,
        design_system_id: EntityId,
        input: &CreateToken,
    ) -> Result<Token, sqlx::Error> {
        let query = format!(
            "INSERT INTO tokens (design_system_id, name, value, token_type, description)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Token>(&query)
            .bind(design_system_id)
            .bind(&input.name)
            .bind(&input.value)
            .bind(&input.token_type)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a token by its ID.
    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<Token>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tokens WHERE id = $1");
        sqlx::query_as::<_, Token>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tokens of one design system, most recently created first.
    pub async fn list_by_design_system(
        pool: &PgPool,
        design_system_id: EntityId,
    ) -> Result<Vec<Token>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tokens
             WHERE design_system_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Token>(&query)
            .bind(design_system_id)
            .fetch_all(pool)
            .await
    }

    /// Update a token. Only non-`None` fields in `input` are applied;
    /// `updated_at` is refreshed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: EntityId,
        input: &UpdateToken,
    ) -> Result<Option<Token>, sqlx::Error> {
        let query = format!(
            "UPDATE tokens SET
                name = COALESCE($2, name),
                value = COALESCE($3, value),
                token_type = COALESCE($4, token_type),
                description = COALESCE($5, description),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Token>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.value)
            .bind(&input.token_type)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a token by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: EntityId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tokens WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
