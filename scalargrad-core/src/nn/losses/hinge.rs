// src/nn/losses/hinge.rs

use crate::error::ScalarGradError;
use crate::nn::losses::check_lengths;
use crate::value::Value;

/// Max-margin loss for binary classification with targets in `{-1, +1}`.
///
/// `loss = mean_i relu(margin - yᵢ·sᵢ)`, with `margin = 1` by default.
#[derive(Debug, Clone, PartialEq)]
pub struct HingeLoss {
    margin: f64,
}

impl HingeLoss {
    pub fn new() -> Self {
        HingeLoss { margin: 1.0 }
    }

    pub fn with_margin(margin: f64) -> Self {
        HingeLoss { margin }
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Builds the loss node for `scores` against `targets`.
    ///
    /// # Errors
    /// `LengthMismatch` if the slices differ in length, `EmptyInput` if both
    /// are empty.
    pub fn calculate(&self, scores: &[Value], targets: &[f64]) -> Result<Value, ScalarGradError> {
        check_lengths(scores.len(), targets.len(), "HingeLoss")?;
        let losses: Value = scores
            .iter()
            .zip(targets)
            .map(|(score, &y)| (self.margin + -y * score).relu())
            .sum();
        Ok(losses * (1.0 / scores.len() as f64))
    }
}

impl Default for HingeLoss {
    fn default() -> Self {
        Self::new()
    }
}
