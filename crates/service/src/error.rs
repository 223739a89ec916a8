//! Typed error enum for the service layer.
//!
//! Unifies storage and LLM failures with the domain taxonomy (not found,
//! access denied, conflict, invalid input, unauthenticated), so HTTP
//! handlers can map onto status codes without downcasting.

use tandem_llm::LlmError;
use tandem_storage::StorageError;
use thiserror::Error;

/// Service-layer error.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, corruption, migration).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// The external completion API failed or returned something unusable.
    #[error("external service: {0}")]
    ExternalService(#[from] LlmError),

    /// Referenced entity absent (or inaccessible through the caller's teams).
    #[error("not found: {entity} {id}")]
    NotFound { entity: &'static str, id: String },

    /// Entity exists but is not owned by the caller.
    #[error("access denied: {entity} {id}")]
    AccessDenied { entity: &'static str, id: String },

    /// Duplicate open meeting session.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Caller provided invalid input (empty required text fields).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No valid auth session for the request.
    #[error("not authenticated")]
    Unauthenticated,
}

impl ServiceError {
    /// Whether this error represents a not-found condition.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
            || matches!(self, Self::Storage(e) if e.is_not_found())
    }

    /// Whether this error represents a duplicate/conflict.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_)) || matches!(self, Self::Storage(e) if e.is_conflict())
    }
}
