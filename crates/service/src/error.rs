//! Typed error enum for the service layer.

use plant_catalog_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ServiceError {
    /// Storage operation failed (DB, not found, duplicate, invalid record).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Caller provided invalid input (empty selection, oversized batch).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown entity: {0}")]
    UnknownEntity(String),

    #[error("unknown action '{action}' for {entity}")]
    UnknownAction { entity: String, action: String },
}

impl ServiceError {
    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Storage(e) => e.is_transient(),
            _ => false,
        }
    }

    /// Whether this error represents a not-found condition.
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Storage(StorageError::NotFound { .. })
                | Self::UnknownEntity(_)
                | Self::UnknownAction { .. }
        )
    }

    /// Whether this error represents a duplicate/conflict.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_duplicate())
    }
}
