// src/nn/losses/mse.rs

use crate::error::ScalarGradError;
use crate::nn::losses::check_lengths;
use crate::value::Value;
use std::str::FromStr;

/// Specifies the reduction to apply to the output:
/// 'mean' | 'sum'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl FromStr for Reduction {
    type Err = ScalarGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(ScalarGradError::UnsupportedOperation(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Computes the Mean Squared Error (MSE) loss between predictions and targets.
///
/// The loss can be configured to compute the mean or sum of squared errors.
#[derive(Debug, Clone, PartialEq)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Builds `reduce_i (pᵢ - tᵢ)²`.
    pub fn calculate(&self, predictions: &[Value], targets: &[f64]) -> Result<Value, ScalarGradError> {
        check_lengths(predictions.len(), targets.len(), "MSELoss")?;
        let squared: Value = predictions
            .iter()
            .zip(targets)
            .map(|(p, &t)| (p - t).pow(2))
            .sum();
        Ok(match self.reduction {
            Reduction::Mean => squared * (1.0 / predictions.len() as f64),
            Reduction::Sum => squared,
        })
    }
}

impl Default for MSELoss {
    fn default() -> Self {
        Self::new(Reduction::Mean)
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
