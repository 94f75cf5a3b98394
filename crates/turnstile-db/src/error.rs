//! Database-specific error types and conversions.

use turnstile_core::error::TurnstileError;

/// Database-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Duplicate record: {entity}")]
    Duplicate { entity: String },
}

impl From<DbError> for TurnstileError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => TurnstileError::NotFound { entity, id },
            DbError::Duplicate { entity } => TurnstileError::AlreadyExists { entity },
            other => TurnstileError::Database(other.to_string()),
        }
    }
}
