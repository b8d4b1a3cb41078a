// src/ops/arithmetic/sub.rs

use crate::ops::arithmetic::{add_op, neg_op};
use crate::value::Value;

/// Computes `a - b` as `a + (-b)`.
///
/// Backward follows from the composition: `a.grad += out.grad`,
/// `b.grad -= out.grad`.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    add_op(a, &neg_op(b)).retag("sub")
}

impl_binary_op!(Sub, sub, crate::ops::arithmetic::sub::sub_op);
impl_assign_op!(SubAssign, sub_assign, crate::ops::arithmetic::sub::sub_op);

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
