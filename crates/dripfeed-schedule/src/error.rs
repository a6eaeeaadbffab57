//! Error types for the schedule data model.

use thiserror::Error;

/// Errors that can occur parsing or serializing schedule data.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
