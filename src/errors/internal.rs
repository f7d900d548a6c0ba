use thiserror::Error;

/// Internal error type for store operations
///
/// The mirror service recognizes a single failure kind: the write or delete
/// against the derived admins collection failed. It is never caught and
/// suppressed locally; the API layer surfaces it as a 500 so the delivering
/// platform can apply its own redelivery policy.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Database query or operation failed
    #[error("Database error: {operation} failed: {source}")]
    Database {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },
}

impl InternalError {
    /// Create a database error with context
    pub fn database(operation: impl Into<String>, source: sea_orm::DbErr) -> Self {
        Self::Database {
            operation: operation.into(),
            source,
        }
    }
}
