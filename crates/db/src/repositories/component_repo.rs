//! Repository for the `components` table.

use sqlx::PgPool;

use oro_core::types::EntityId;

use crate::models::component::{Component, CreateComponent, UpdateComponent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, design_system_id, name, description, component_type, props, code, \
                       preview_image, created_at, updated_at";

/// Provides CRUD operations for components.
pub struct ComponentRepo;

impl ComponentRepo {
    /// Insert a new component under the given design system, returning the
    /// created row. `props` defaults to `{}` and `code` to the empty string.
    pub async fn create(
        pool: &PgPool,
        design_system_id: EntityId,
        input: &CreateComponent,
    ) -> Result<Component, sqlx::Error> {
        let query = format!(
            "INSERT INTO components
                (design_system_id, name, description, component_type, props, code, preview_image)
             VALUES ($1, $2, $3, $4, COALESCE($5, '{{}}'::jsonb), COALESCE($6, ''), $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Component>(&query)
            .bind(design_system_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.component_type)
            .bind(&input.props)
            .bind(&input.code)
            .bind(&input.preview_image)
            .fetch_one(pool)
            .await
    }

    /// Find a component by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: EntityId,
    ) -> Result<Option<Component>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM components WHERE id = $1");
        sqlx::query_as::<_, Component>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all components of one design system, most recently created
    /// first.
    pub async fn list_by_design_system(
        pool: &PgPool,
        design_system_id: EntityId,
    ) -> Result<Vec<Component>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM components
             WHERE design_system_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Component>(&query)
            .bind(design_system_id)
            .fetch_all(pool)
            .await
    }

    /// Update a component. Only non-`None` fields in `input` are applied;
    /// `updated_at` is refreshed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: EntityId,
        input: &UpdateComponent,
    ) -> Result<Option<Component>, sqlx::Error> {
        let query = format!(
            "UPDATE components SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                component_type = COALESCE($4, component_type),
                props = COALESCE($5, props),
                code = COALESCE($6, code),
                preview_image = COALESCE($7, preview_image),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Component>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.component_type)
            .bind(&input.props)
            .bind(&input.code)
            .bind(&input.preview_image)
            .fetch_optional(pool)
            .await
    }

    /// Delete a component by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: EntityId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM components WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
