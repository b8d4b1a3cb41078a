// src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::value::Value;

// --- Forward Operation ---

/// Computes `a + b`.
///
/// Backward: `a.grad += out.grad`, `b.grad += out.grad`. With `a` and `b`
/// the same node, it receives both contributions.
pub fn add_op(a: &Value, b: &Value) -> Value {
    let data = a.data() + b.data();
    Value::from_op(
        data,
        BackwardOp::Add {
            lhs: a.clone(),
            rhs: b.clone(),
        },
    )
}

impl_binary_op!(Add, add, crate::ops::arithmetic::add::add_op);
impl_assign_op!(AddAssign, add_assign, crate::ops::arithmetic::add::add_op);

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
