//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Domain errors - the two failure outcomes of post-store operations.
///
/// Callers distinguish these; transports must not collapse them into a
/// single generic failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Post not found: {key}")]
    NotFound { key: String },

    #[error("Caller {caller} is not the author of post {id}")]
    Unauthorized { caller: Uuid, id: u64 },
}

impl DomainError {
    pub(crate) fn missing_id(id: u64) -> Self {
        Self::NotFound {
            key: format!("id {id}"),
        }
    }

    pub(crate) fn missing_content(content: &str) -> Self {
        Self::NotFound {
            key: format!("content {content:?}"),
        }
    }
}

/// Store-level errors - failures of the persistence substrate.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Persisted state is inconsistent: {0}")]
    Corrupt(String),
}
