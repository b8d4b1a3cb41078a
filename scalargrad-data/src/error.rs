use scalargrad_core::ScalarGradError;
use thiserror::Error;

/// Errors raised while loading, generating or iterating over data.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Ragged features: row {row} has {actual} values, expected {expected}")]
    RaggedFeatures {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Length mismatch: {features} feature rows for {labels} labels")]
    LengthMismatch { features: usize, labels: usize },

    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Core error: {0}")]
    Core(#[from] ScalarGradError),
}
