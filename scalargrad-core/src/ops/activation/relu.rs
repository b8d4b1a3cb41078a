use crate::autograd::BackwardOp;
use crate::value::Value;

/// Applies the Rectified Linear Unit function to a value.
///
/// ReLU(x) = max(0, x). A NaN input stays NaN.
///
/// Backward: the gradient passes through when the output is strictly
/// positive, and is `0` otherwise (including exactly at `x = 0`).
pub fn relu_op(input: &Value) -> Value {
    let x = input.data();
    let data = if x < 0.0 { 0.0 } else { x };
    Value::from_op(
        data,
        BackwardOp::Relu {
            input: input.clone(),
        },
    )
}

impl Value {
    /// `max(0, self)`.
    pub fn relu(&self) -> Value {
        relu_op(self)
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
