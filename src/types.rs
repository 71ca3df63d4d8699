use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::db::{Database, DatabaseHealth};
use crate::errors::AppError;

/// Result type for route handlers; errors render through `ResponseError`
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Serialize, Deserialize)]
pub struct ResponsePayload {
    pub status: u16,
    pub message: String,
}

/// Body of `GET /health`
#[derive(Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_health: Option<DatabaseHealth>,
}

// Shared, read-only state handed to the index and health handlers
pub struct AppState {
    pub start_time: Instant,
    pub db: Database,
    pub version: String,
}
