use crate::types::DbId;

/// Domain error taxonomy.
///
/// Every failure a service operation can surface to a caller is one of
/// these variants. They are terminal and non-retriable; the API layer
/// maps each to a fixed HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
