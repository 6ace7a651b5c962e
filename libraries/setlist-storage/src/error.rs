/// Storage-specific errors
use thiserror::Error;

/// Storage error types
///
/// Raised while setting up the database; document operations report through
/// `setlist_core::CatalogError` instead.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl From<StorageError> for setlist_core::CatalogError {
    fn from(err: StorageError) -> Self {
        setlist_core::CatalogError::internal(err.to_string())
    }
}
