// src/ops/arithmetic/mul.rs

use crate::autograd::BackwardOp;
use crate::value::Value;

/// Computes `a * b`.
///
/// Backward: `a.grad += b.data * out.grad`, `b.grad += a.data * out.grad`.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    let data = a.data() * b.data();
    Value::from_op(
        data,
        BackwardOp::Mul {
            lhs: a.clone(),
            rhs: b.clone(),
        },
    )
}

impl_binary_op!(Mul, mul, crate::ops::arithmetic::mul::mul_op);
impl_assign_op!(MulAssign, mul_assign, crate::ops::arithmetic::mul::mul_op);

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
