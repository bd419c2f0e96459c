//! Error types for dayplan-core

use thiserror::Error;

/// Main error type for the dayplan-core library
#[derive(Error, Debug)]
pub enum Error {
    /// Database error
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Logging setup error
    #[error("logging error: {0}")]
    Logging(String),

    /// A calendar date that is not `YYYY-MM-DD`
    #[error("invalid date {value:?}: {reason}")]
    InvalidDate { value: String, reason: String },

    /// An imported task that cannot be stored
    #[error("invalid task: {0}")]
    InvalidTask(String),

    /// Planning history could not be loaded for a user
    #[error("failed to fetch plan records for {user_id}: {message}")]
    RecordFetch { user_id: String, message: String },
}

/// Result type alias for dayplan-core
pub type Result<T> = std::result::Result<T, Error>;
