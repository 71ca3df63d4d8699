use thiserror::Error;

use super::RepositoryError;

/// Error type for short link operations
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The supplied input failed validation; never retried
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Every candidate token within the attempt bound was already taken
    #[error("Allocation exhausted: no free token after {attempts} attempts")]
    AllocationExhausted { attempts: u32 },

    /// Another request claimed the same token between check and insert
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// The record store cannot be reached
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Resource was not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unrecoverable internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Duplicate(msg) => Self::DuplicateKey(msg),
            RepositoryError::Unavailable(e) => Self::StoreUnavailable(e.to_string()),
            RepositoryError::InvalidData(msg) => Self::InvalidInput(msg),
            RepositoryError::Database(e) => {
                log::error!("Unexpected database error: {}", e);
                Self::Internal("A database error occurred".to_string())
            }
        }
    }
}
