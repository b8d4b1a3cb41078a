// src/nn/losses/mod.rs

pub mod hinge;
pub mod mse;

pub use hinge::HingeLoss;
pub use mse::{MSELoss, Reduction};

use crate::error::ScalarGradError;
use crate::value::Value;

/// L2 regularization term `alpha * Σ p²` over `params`.
///
/// An empty parameter list gives a constant `0` node.
pub fn l2_penalty(params: &[Value], alpha: f64) -> Value {
    let squares: Value = params.iter().map(|p| p * p).sum();
    alpha * squares
}

/// Validates a prediction/target pair before building a loss graph.
pub(crate) fn check_lengths(
    predictions: usize,
    targets: usize,
    operation: &str,
) -> Result<(), ScalarGradError> {
    if predictions != targets {
        return Err(ScalarGradError::LengthMismatch {
            predictions,
            targets,
            operation: operation.to_string(),
        });
    }
    if predictions == 0 {
        return Err(ScalarGradError::EmptyInput(operation.to_string()));
    }
    Ok(())
}
