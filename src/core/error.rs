//! Failure taxonomy for policy decisions.
//!
//! The five kinds are never collapsed: the handler layer maps them 1:1
//! onto 401/403/404/400/500 responses.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// No caller identity on an operation that requires one.
    #[error("authentication required")]
    Unauthenticated,

    /// Caller identity present but not the resource owner.
    #[error("caller does not own this resource")]
    Forbidden,

    /// The id did not resolve in the store.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// A required field is missing or a value is outside its vocabulary.
    #[error("{field}: {message}")]
    Validation { field: &'static str, message: String },

    /// The persistence collaborator failed for reasons opaque to the policy.
    #[error("store operation failed")]
    Store(#[from] anyhow::Error),
}

impl CoreError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}
