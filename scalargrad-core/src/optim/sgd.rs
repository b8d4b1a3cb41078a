use crate::error::ScalarGradError;
use crate::optim::check_non_negative;
use crate::optim::optimizer_trait::Optimizer;
use crate::optim::param_group::ParamGroup;
use crate::value::Value;
use std::collections::HashMap;

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// Supports momentum, weight decay, and Nesterov momentum. For each
/// parameter `p` with gradient `g`:
///
/// ```text
/// d = g + weight_decay * p
/// buf = momentum * buf + d          (if momentum != 0)
/// d = nesterov ? d + momentum * buf : buf
/// p = p - lr * d
/// ```
///
/// With `momentum = 0` and `weight_decay = 0` this is `p -= lr * grad`.
#[derive(Debug)]
pub struct SgdOptimizer {
    param_groups: Vec<ParamGroup>,
    momentum: f64,
    nesterov: bool,
    /// Velocity per parameter node, created on its first update.
    momentum_buffers: HashMap<usize, f64>,
}

impl SgdOptimizer {
    /// Creates a new `SgdOptimizer`.
    ///
    /// # Arguments
    ///
    /// * `params`: the parameters to optimize, placed into a default group.
    /// * `lr`: The learning rate.
    /// * `momentum`: Momentum factor (`0.0` disables it).
    /// * `weight_decay`: Weight decay (L2 penalty) factor for the default group.
    /// * `nesterov`: Enables Nesterov momentum; requires `momentum > 0`.
    ///
    /// To use multiple parameter groups with different learning rates,
    /// call `add_param_group` afterwards.
    pub fn new(
        params: impl IntoIterator<Item = Value>,
        lr: f64,
        momentum: f64,
        weight_decay: f64,
        nesterov: bool,
    ) -> Result<Self, ScalarGradError> {
        check_non_negative("lr", lr)?;
        check_non_negative("momentum", momentum)?;
        check_non_negative("weight_decay", weight_decay)?;
        if nesterov && momentum == 0.0 {
            return Err(ScalarGradError::InvalidHyperparameter {
                name: "momentum".to_string(),
                value: momentum,
                reason: "Nesterov momentum requires a positive momentum".to_string(),
            });
        }

        let params: Vec<Value> = params.into_iter().collect();
        if params.is_empty() {
            log::warn!("SgdOptimizer created with an empty parameter list.");
        }
        let default_group = ParamGroup::new(params, lr).with_weight_decay(weight_decay);

        Ok(SgdOptimizer {
            param_groups: vec![default_group],
            momentum,
            nesterov,
            momentum_buffers: HashMap::new(),
        })
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    pub fn nesterov(&self) -> bool {
        self.nesterov
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), ScalarGradError> {
        for group in self.param_groups.iter() {
            let lr = group.lr;
            let weight_decay = group.weight_decay;

            for param in group.params.iter() {
                let data = param.data();
                let mut d_p = param.grad();
                if !d_p.is_finite() {
                    log::warn!("SgdOptimizer: non-finite gradient {} on parameter {:?}", d_p, param.label());
                }

                if weight_decay != 0.0 {
                    d_p += weight_decay * data;
                }

                if self.momentum != 0.0 {
                    let buffer = self.momentum_buffers.entry(param.id()).or_insert(0.0);
                    *buffer = self.momentum * *buffer + d_p;
                    d_p = if self.nesterov {
                        d_p + self.momentum * *buffer
                    } else {
                        *buffer
                    };
                }

                param.set_data(data - lr * d_p);
            }
        }
        Ok(())
    }

    fn zero_grad(&mut self) {
        for group in self.param_groups.iter() {
            for param in group.params.iter() {
                param.zero_grad();
            }
        }
    }

    fn add_param_group(&mut self, param_group: ParamGroup) {
        self.param_groups.push(param_group);
    }

    fn param_groups(&self) -> &[ParamGroup] {
        &self.param_groups
    }

    fn param_groups_mut(&mut self) -> &mut [ParamGroup] {
        &mut self.param_groups
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
