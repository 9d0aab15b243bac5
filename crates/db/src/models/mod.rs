//! Entity models and DTOs.
//!
//! Each entity has a row struct (`FromRow` + `Serialize`) plus `Create*`
//! and `Update*` DTOs. Create/update DTOs carry `validator` constraints
//! checked at the handler boundary.

pub mod component;
pub mod design_system;
pub mod project;
pub mod token;

pub use component::{Component, CreateComponent, UpdateComponent};
pub use design_system::{CreateDesignSystem, DesignSystem, UpdateDesignSystem};
pub use project::{CreateProject, Project, UpdateProject};
pub use token::{CreateToken, Token, UpdateToken};
