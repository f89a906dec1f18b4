//! Error types for ledgerbook storage.

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Database operation failed.
    #[error("database error: {0}")]
    Database(String),

    /// A write matched zero rows, or a required row is missing.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity kind ("user", "ledger", "particular", "entry").
        entity: &'static str,
        /// The id that matched nothing.
        id: i64,
    },

    /// Registration pre-check found the phone number already in use.
    #[error("user with this mobile number already exists")]
    PhoneNumberTaken,
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        Self::Database(err.to_string())
    }
}
