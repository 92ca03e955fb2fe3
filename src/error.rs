//! Error types for Paxfinder
//!
//! One enum covering every failure mode of the application layer.
//! Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Result type alias for Paxfinder operations
pub type Result<T> = std::result::Result<T, PaxError>;

/// Error type for Paxfinder operations
#[derive(Error, Debug)]
pub enum PaxError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Storage backend errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Persisted state exists but cannot be decoded
    #[error("Stored state under key '{key}' is corrupt: {source}")]
    CorruptState {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Manifest text was empty or whitespace only
    #[error("Please paste the manifest data first")]
    EmptyInput,

    /// A search was attempted before any data was stored
    #[error("No data stored yet, add a manifest first")]
    NoData,

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// SQLite database errors
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl PaxError {
    /// User-facing warnings that leave state untouched
    pub fn is_warning(&self) -> bool {
        matches!(self, PaxError::EmptyInput | PaxError::NoData)
    }
}
