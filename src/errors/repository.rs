use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Query errors that are not covered by a more specific variant
    #[error("Database error: {0}")]
    Database(SqlxError),

    /// The store could not be reached (pool timeout, closed pool, network)
    #[error("Store unavailable: {0}")]
    Unavailable(SqlxError),

    /// Unique constraint violation on insert
    #[error("Duplicate key: {0}")]
    Duplicate(String),

    /// Invalid input data
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate(_))
    }
}

impl From<SqlxError> for RepositoryError {
    fn from(err: SqlxError) -> Self {
        match err {
            SqlxError::PoolTimedOut
            | SqlxError::PoolClosed
            | SqlxError::Io(_)
            | SqlxError::Tls(_) => Self::Unavailable(err),
            // Map database-specific errors to more meaningful application errors
            SqlxError::Database(db_err) => {
                // PostgreSQL error codes for common constraints
                if let Some(code) = db_err.code() {
                    match code.as_ref() {
                        // Unique violation
                        "23505" => {
                            return Self::Duplicate(
                                db_err
                                    .constraint()
                                    .map(|c| format!("constraint '{}' violated", c))
                                    .unwrap_or_else(|| "Resource already exists".to_string()),
                            )
                        }
                        // Not-null and check constraint violations
                        "23502" | "23514" => {
                            return Self::InvalidData("Data violates constraints".to_string())
                        }
                        _ => {}
                    }
                }
                Self::Database(SqlxError::Database(db_err))
            }
            _ => Self::Database(err),
        }
    }
}
