use thiserror::Error;

/// Custom error type for the scalargrad framework.
///
/// The autodiff engine itself never fails: non-finite values simply propagate.
/// These variants cover the consumer layers (modules, losses, optimizers, data).
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("Input size mismatch in {module}: expected {expected} inputs, got {actual}")]
    InputSizeMismatch {
        expected: usize,
        actual: usize,
        module: String,
    },

    #[error("Invalid architecture: {0}")]
    InvalidArchitecture(String),

    #[error("Length mismatch during {operation}: {predictions} predictions for {targets} targets")]
    LengthMismatch {
        predictions: usize,
        targets: usize,
        operation: String,
    },

    #[error("Operation {0} requires at least one element")]
    EmptyInput(String),

    #[error("Invalid hyperparameter {name}={value}: {reason}")]
    InvalidHyperparameter {
        name: String,
        value: f64,
        reason: String,
    },

    #[error("Input element at index {index} cannot be represented as f64")]
    NumericCast { index: usize },

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
}
