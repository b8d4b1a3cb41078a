// src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::value::Value;

/// Raises `base` to the integer power `exponent`.
///
/// Backward: `base.grad += exponent * base.data^(exponent - 1) * out.grad`.
/// Negative exponents at `0` give infinite values and gradients, following
/// IEEE-754; nothing is raised. For `exponent == i32::MIN` the derivative
/// exponent `exponent - 1` is evaluated in `f64`.
pub fn pow_op(base: &Value, exponent: i32) -> Value {
    let data = base.data().powi(exponent);
    Value::from_op(
        data,
        BackwardOp::Pow {
            base: base.clone(),
            exponent,
        },
    )
}

impl Value {
    /// Raises this value to an integer power.
    pub fn pow(&self, exponent: i32) -> Value {
        pow_op(self, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
