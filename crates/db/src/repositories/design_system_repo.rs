//! Repository for the `design_systems` table.

use sqlx::PgPool;

use oro_core::types::EntityId;

use crate::models::design_system::{CreateDesignSystem, DesignSystem, UpdateDesignSystem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, project_id, name, description, version, is_public, created_at, updated_at";

/// Provides CRUD operations for design systems.
pub struct DesignSystemRepo;

impl DesignSystemRepo {
    /// Insert a new design system, returning the created row.
    ///
    /// `version` defaults to `1.0.0` and `is_public` to `false` when the
    /// input leaves them unset.
    pub async fn create(
        pool: &PgPool,
        input: &CreateDesignSystem,
    ) -> Result<DesignSystem, sqlx::Error> {
        let query = format!(
            "INSERT INTO design_systems (project_id, name, description, version, is_public)
             VALUES ($1, $2, $3, COALESCE($4, '1.0.0'), COALESCE($5, FALSE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DesignSystem>(&query)
            .bind(input.project_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.version)
            .bind(input.is_public)
            .fetch_one(pool)
            .await
    }

    /// Find a design system by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: EntityId,
    ) -> Result<Option<DesignSystem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM design_systems WHERE id = $1");
        sqlx::query_as::<_, DesignSystem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List design systems ordered by most recently created first,
    /// optionally scoped to one project.
    pub async fn list(
        pool: &PgPool,
        project_id: Option<EntityId>,
    ) -> Result<Vec<DesignSystem>, sqlx::Error> {
        match project_id {
            Some(project_id) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM design_systems
                     WHERE project_id = $1 ORDER BY created_at DESC"
                );
                sqlx::query_as::<_, DesignSystem>(&query)
                    .bind(project_id)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query =
                    format!("SELECT {COLUMNS} FROM design_systems ORDER BY created_at DESC");
                sqlx::query_as::<_, DesignSystem>(&query).fetch_all(pool).await
            }
        }
    }

    /// Update a design system. Only non-`None` fields in `input` are
    /// applied; `updated_at` is refreshed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: EntityId,
        input: &UpdateDesignSystem,
    ) -> Result<Option<DesignSystem>, sqlx::Error> {
        let query = format!(
            "UPDATE design_systems SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                version = COALESCE($4, version),
                is_public = COALESCE($5, is_public),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DesignSystem>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.version)
            .bind(input.is_public)
            .fetch_optional(pool)
            .await
    }

    /// Delete a design system by ID. Owned tokens and components are
    /// removed by `ON DELETE CASCADE`. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: EntityId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM design_systems WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
