use crate::types::EntityId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: EntityId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// A backend (remote) operation failed; carries the driver message.
    #[error("Operation failed: {0}")]
    OperationFailed(String),

    /// Requested a data mode that is not available in this process.
    #[error("Data mode unavailable: {0}")]
    ModeUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
