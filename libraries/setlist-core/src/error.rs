/// Core error types for the Setlist catalog
use thiserror::Error;

/// Result type alias using `CatalogError`
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Core error type for the Setlist catalog
///
/// Every failure in the catalog is mapped exactly once to one of these
/// variants and then propagated unchanged to the caller.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Malformed identifier or payload
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// A playlist reference list contains identifiers that did not resolve
    #[error("Referenced track not found: {resolved} of {requested} track references resolved")]
    ReferencedTrackNotFound { requested: usize, resolved: usize },

    /// File backend failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Document store failure or undecodable document
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Stable, caller-distinguishable classification of a `CatalogError`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidRequest,
    NotFound,
    ReferencedTrackNotFound,
    Storage,
    Internal,
}

impl ErrorKind {
    /// Machine-readable code, stable across releases
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::InvalidRequest => "invalid_request",
            ErrorKind::NotFound => "not_found",
            ErrorKind::ReferencedTrackNotFound => "referenced_track_not_found",
            ErrorKind::Storage => "storage_error",
            ErrorKind::Internal => "internal_error",
        }
    }

    /// Process exit code used by the command-line surface
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorKind::InvalidRequest => 2,
            ErrorKind::NotFound => 3,
            ErrorKind::ReferencedTrackNotFound => 4,
            ErrorKind::Storage => 5,
            ErrorKind::Internal => 1,
        }
    }

    /// Whether the caller caused the failure (and retrying unchanged is pointless)
    pub fn is_caller_error(self) -> bool {
        matches!(
            self,
            ErrorKind::InvalidRequest | ErrorKind::NotFound | ErrorKind::ReferencedTrackNotFound
        )
    }
}

impl CatalogError {
    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::InvalidRequest(_) => ErrorKind::InvalidRequest,
            CatalogError::NotFound { .. } => ErrorKind::NotFound,
            CatalogError::ReferencedTrackNotFound { .. } => ErrorKind::ReferencedTrackNotFound,
            CatalogError::Storage(_) => ErrorKind::Storage,
            CatalogError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Message safe to show to a caller
    ///
    /// Internal details stay in the server-side logs.
    pub fn public_message(&self) -> String {
        match self {
            CatalogError::Internal(_) => "Internal server error".to_string(),
            CatalogError::Storage(_) => "Storage error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("document decode failed: {err}"))
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for CatalogError {
    fn from(err: sqlx::Error) -> Self {
        Self::Internal(format!("database error: {err}"))
    }
}
