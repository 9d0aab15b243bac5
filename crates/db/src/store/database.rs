//! Postgres-backed implementation of [`DesignStore`].
//!
//! Thin adapter over the repository layer: resolves `Option` lookups to
//! [`CoreError::NotFound`] and maps driver errors to
//! [`CoreError::OperationFailed`]. Foreign-key violations on child creates
//! are reported as `NotFound` for the missing parent.

use async_trait::async_trait;

use oro_core::error::CoreError;
use oro_core::types::EntityId;

use crate::models::{
    Component, CreateComponent, CreateDesignSystem, CreateProject, CreateToken, DesignSystem,
    Project, Token, UpdateComponent, UpdateDesignSystem, UpdateProject, UpdateToken,
};
use crate::repositories::{ComponentRepo, DesignSystemRepo, ProjectRepo, TokenRepo};
use crate::store::{DesignStore, StoreResult};
use crate::DbPool;

/// PostgreSQL foreign-key violation error code.
const FK_VIOLATION: &str = "23503";

/// [`DesignStore`] backed by a live Postgres database.
pub struct DatabaseStore {
    pool: DbPool,
}

impl DatabaseStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// Map a driver error to the facade taxonomy.
fn storage_error(err: sqlx::Error) -> CoreError {
    CoreError::OperationFailed(err.to_string())
}

/// Map a driver error on a child insert: a foreign-key violation means the
/// parent does not exist.
fn child_insert_error(err: sqlx::Error, entity: &'static str, parent_id: EntityId) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(FK_VIOLATION) {
            return CoreError::NotFound {
                entity,
                id: parent_id,
            };
        }
    }
    storage_error(err)
}

#[async_trait]
impl DesignStore for DatabaseStore {
    // --- Projects ---

    async fn list_projects(&self) -> StoreResult<Vec<Project>> {
        ProjectRepo::list(&self.pool).await.map_err(storage_error)
    }

    async fn get_project(&self, id: EntityId) -> StoreResult<Project> {
        ProjectRepo::find_by_id(&self.pool, id)
            .await
            .map_err(storage_error)?
            .ok_or(CoreError::NotFound {
                entity: "Project",
                id,
            })
    }

    async fn create_project(&self, input: &CreateProject) -> StoreResult<Project> {
        ProjectRepo::create(&self.pool, input)
            .await
            .map_err(storage_error)
    }

    async fn update_project(&self, id: EntityId, input: &UpdateProject) -> StoreResult<Project> {
        ProjectRepo::update(&self.pool, id, input)
            .await
            .map_err(storage_error)?
            .ok_or(CoreError::NotFound {
                entity: "Project",
                id,
            })
    }

    async fn delete_project(&self, id: EntityId) -> StoreResult<()> {
        let deleted = ProjectRepo::delete(&self.pool, id)
            .await
            .map_err(storage_error)?;
        if deleted {
            Ok(())
        } else {
            Err(CoreError::NotFound {
                entity: "Project",
                id,
            })
        }
    }

    // --- Design systems ---

    async fn list_design_systems(
        &self,
        project_id: Option<EntityId>,
    ) -> StoreResult<Vec<DesignSystem>> {
        DesignSystemRepo::list(&self.pool, project_id)
            .await
            .map_err(storage_error)
    }

    async fn get_design_system(&self, id: EntityId) -> StoreResult<DesignSystem> {
        DesignSystemRepo::find_by_id(&self.pool, id)
            .await
            .map_err(storage_error)?
            .ok_or(CoreError::NotFound {
                entity: "DesignSystem",
                id,
            })
    }

    async fn create_design_system(
        &self,
        input: &CreateDesignSystem,
    ) -> StoreResult<DesignSystem> {
        DesignSystemRepo::create(&self.pool, input)
            .await
            .map_err(|e| child_insert_error(e, "Project", input.project_id))
    }

    async fn update_design_system(
        &self,
        id: EntityId,
        input: &UpdateDesignSystem,
    ) -> StoreResult<DesignSystem> {
        DesignSystemRepo::update(&self.pool, id, input)
            .await
            .map_err(storage_error)?
            .ok_or(CoreError::NotFound {
                entity: "DesignSystem",
                id,
            })
    }

    async fn delete_design_system(&self, id: EntityId) -> StoreResult<()> {
        let deleted = DesignSystemRepo::delete(&self.pool, id)
            .await
            .map_err(storage_error)?;
        if deleted {
            Ok(())
        } else {
            Err(CoreError::NotFound {
                entity: "DesignSystem",
                id,
            })
        }
    }

    // --- Tokens ---

    async fn list_tokens(&self, design_system_id: EntityId) -> StoreResult<Vec<Token>> {
        TokenRepo::list_by_design_system(&self.pool, design_system_id)
            .await
            .map_err(storage_error)
    }

    async fn get_token(&self, id: EntityId) -> StoreResult<Token> {
        TokenRepo::find_by_id(&self.pool, id)
            .await
            .map_err(storage_error)?
            .ok_or(CoreError::NotFound { entity: "Token", id })
    }

    async fn create_token(
        &self,
        design_system_id: EntityId,
        input: &CreateToken,
    ) -> StoreResult<Token> {
        TokenRepo::create(&self.pool, design_system_id, input)
            .await
            .map_err(|e| child_insert_error(e, "DesignSystem", design_system_id))
    }

    async fn update_token(&self, id: EntityId, input: &UpdateToken) -> StoreResult<Token> {
        TokenRepo::update(&self.pool, id, input)
            .await
            .map_err(storage_error)?
            .ok_or(CoreError::NotFound { entity: "Token", id })
    }

    async fn delete_token(&self, id: EntityId) -> StoreResult<()> {
        let deleted = TokenRepo::delete(&self.pool, id)
            .await
            .map_err(storage_error)?;
        if deleted {
            Ok(())
        } else {
            Err(CoreError::NotFound { entity: "Token", id })
        }
    }

    // --- Components ---

    async fn list_components(&self, design_system_id: EntityId) -> StoreResult<Vec<Component>> {
        ComponentRepo::list_by_design_system(&self.pool, design_system_id)
            .await
            .map_err(storage_error)
    }

    async fn get_component(&self, id: EntityId) -> StoreResult<Component> {
        ComponentRepo::find_by_id(&self.pool, id)
            .await
            .map_err(storage_error)?
            .ok_or(CoreError::NotFound {
                entity: "Component",
                id,
            })
    }

    async fn create_component(
        &self,
        design_system_id: EntityId,
        input: &CreateComponent,
    ) -> StoreResult<Component> {
        ComponentRepo::create(&self.pool, design_system_id, input)
            .await
            .map_err(|e| child_insert_error(e, "DesignSystem", design_system_id))
    }

    async fn update_component(
        &self,
        id: EntityId,
        input: &UpdateComponent,
    ) -> StoreResult<Component> {
        ComponentRepo::update(&self.pool, id, input)
            .await
            .map_err(storage_error)?
            .ok_or(CoreError::NotFound {
                entity: "Component",
                id,
            })
    }

    async fn delete_component(&self, id: EntityId) -> StoreResult<()> {
        let deleted = ComponentRepo::delete(&self.pool, id)
            .await
            .map_err(storage_error)?;
        if deleted {
            Ok(())
        } else {
            Err(CoreError::NotFound {
                entity: "Component",
                id,
            })
        }
    }
}
