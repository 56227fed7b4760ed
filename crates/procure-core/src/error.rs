//! Error types for the procure-core library.

use thiserror::Error;

/// Main error type for the procure library.
///
/// Field extraction itself never fails; these cover the I/O edges around it.
#[derive(Error, Debug)]
pub enum ProcureError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A value did not name any known variant of a field.
    #[error("failed to parse {field}: {value}")]
    Parse { field: String, value: String },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for the procure library.
pub type Result<T> = std::result::Result<T, ProcureError>;
