/// Domain-level error taxonomy shared by every layer.
///
/// The API crate maps these onto HTTP statuses: `NotFound` -> 404,
/// `Validation` -> 400, `Conflict` -> 409, `Unauthorized` -> 401,
/// `Internal` -> 500.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Lookup keys are rendered as strings so both id- and name-keyed
    /// entities (e.g. users by username) fit.
    #[error("Entity not found: {entity} {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Not-found for an id-keyed entity.
    pub fn not_found(entity: &'static str, id: crate::types::DbId) -> Self {
        Self::NotFound {
            entity,
            key: id.to_string(),
        }
    }
}
