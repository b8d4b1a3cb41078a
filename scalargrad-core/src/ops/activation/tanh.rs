use crate::autograd::BackwardOp;
use crate::value::Value;

/// Applies the hyperbolic tangent to a value.
///
/// The forward result is cached in the node's rule; backward is
/// `input.grad += (1 - tanh²) * out.grad`.
pub fn tanh_op(input: &Value) -> Value {
    let output = input.data().tanh();
    Value::from_op(
        output,
        BackwardOp::Tanh {
            input: input.clone(),
            output,
        },
    )
}

impl Value {
    /// Hyperbolic tangent of this value.
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
