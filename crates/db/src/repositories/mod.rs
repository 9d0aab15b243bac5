//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod component_repo;
pub mod design_system_repo;
pub mod project_repo;
pub mod token_repo;

pub use component_repo::ComponentRepo;
pub use design_system_repo::DesignSystemRepo;
pub use project_repo::ProjectRepo;
pub use token_repo::TokenRepo;
