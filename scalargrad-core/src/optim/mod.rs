// src/optim/mod.rs

//! Optimizers for training neural networks.
//!
//! This module provides the `Optimizer` trait, the `ParamGroup` structure,
//! stochastic gradient descent and learning-rate scheduling.

pub mod lr_scheduler;
pub mod optimizer_trait;
pub mod param_group;
pub mod sgd;

// Re-export key items for easier access
pub use lr_scheduler::{LRScheduler, LinearLR};
pub use optimizer_trait::Optimizer;
pub use param_group::ParamGroup;
pub use sgd::SgdOptimizer;

use crate::error::ScalarGradError;

/// Rejects a hyperparameter that is negative or not finite.
pub(crate) fn check_non_negative(name: &str, value: f64) -> Result<(), ScalarGradError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ScalarGradError::InvalidHyperparameter {
            name: name.to_string(),
            value,
            reason: "must be finite and non-negative".to_string(),
        });
    }
    Ok(())
}
