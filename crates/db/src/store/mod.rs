//! The switchable data-access facade.
//!
//! [`DesignStore`] is one repository contract with two implementations:
//! [`DatabaseStore`] (Postgres, via the repository layer) and
//! [`MemoryStore`] (in-process fixture vectors for offline/demo use).
//! Callers hold an `Arc<dyn DesignStore>` and never know which backend is
//! active.
//!
//! Contract, per entity type:
//!
//! - `list` never fails on an empty result and returns entities ordered
//!   most-recently-created first.
//! - `get` / `update` / `delete` fail with [`CoreError::NotFound`] for an
//!   absent id.
//! - `create` assigns the id and both timestamps, and the new entity is
//!   first in subsequent lists.
//! - Deleting a design system also deletes all of its tokens and
//!   components; deleting a project also deletes its design systems (and
//!   transitively their children).
//! - Backend I/O failures surface as [`CoreError::OperationFailed`]
//!   carrying the driver message. The memory backend has no I/O failures.

mod database;
mod memory;

pub use database::DatabaseStore;
pub use memory::MemoryStore;

use async_trait::async_trait;

use oro_core::error::CoreError;
use oro_core::types::EntityId;

use crate::models::{
    Component, CreateComponent, CreateDesignSystem, CreateProject, CreateToken, DesignSystem,
    Project, Token, UpdateComponent, UpdateDesignSystem, UpdateProject, UpdateToken,
};

pub type StoreResult<T> = Result<T, CoreError>;

/// Repository contract shared by the database and mock backends.
#[async_trait]
pub trait DesignStore: Send + Sync {
    // --- Projects ---
    async fn list_projects(&self) -> StoreResult<Vec<Project>>;
    async fn get_project(&self, id: EntityId) -> StoreResult<Project>;
    async fn create_project(&self, input: &CreateProject) -> StoreResult<Project>;
    async fn update_project(&self, id: EntityId, input: &UpdateProject) -> StoreResult<Project>;
    async fn delete_project(&self, id: EntityId) -> StoreResult<()>;

    // --- Design systems ---
    async fn list_design_systems(
        &self,
        project_id: Option<EntityId>,
    ) -> StoreResult<Vec<DesignSystem>>;
    async fn get_design_system(&self, id: EntityId) -> StoreResult<DesignSystem>;
    async fn create_design_system(
        &self,
        input: &CreateDesignSystem,
    ) -> StoreResult<DesignSystem>;
    async fn update_design_system(
        &self,
        id: EntityId,
        input: &UpdateDesignSystem,
    ) -> StoreResult<DesignSystem>;
    async fn delete_design_system(&self, id: EntityId) -> StoreResult<()>;

    // --- Tokens ---
    async fn list_tokens(&self, design_system_id: EntityId) -> StoreResult<Vec<Token>>;
    async fn get_token(&self, id: EntityId) -> StoreResult<Token>;
    async fn create_token(
        &self,
        design_system_id: EntityId,
        input: &CreateToken,
    ) -> StoreResult<Token>;
    async fn update_token(&self, id: EntityId, input: &UpdateToken) -> StoreResult<Token>;
    async fn delete_token(&self, id: EntityId) -> StoreResult<()>;

    // --- Components ---
    async fn list_components(&self, design_system_id: EntityId) -> StoreResult<Vec<Component>>;
    async fn get_component(&self, id: EntityId) -> StoreResult<Component>;
    async fn create_component(
        &self,
        design_system_id: EntityId,
        input: &CreateComponent,
    ) -> StoreResult<Component>;
    async fn update_component(
        &self,
        id: EntityId,
        input: &UpdateComponent,
    ) -> StoreResult<Component>;
    async fn delete_component(&self, id: EntityId) -> StoreResult<()>;
}
