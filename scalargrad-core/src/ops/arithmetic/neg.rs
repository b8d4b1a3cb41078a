// src/ops/arithmetic/neg.rs

use crate::ops::arithmetic::mul_op;
use crate::value::Value;

/// Computes `-a` as `a * -1`.
///
/// The `-1` constant becomes a leaf of the graph.
pub fn neg_op(a: &Value) -> Value {
    mul_op(a, &Value::new(-1.0))
}

impl std::ops::Neg for &Value {
    type Output = Value;

    fn neg(self) -> Value {
        neg_op(self)
    }
}

impl std::ops::Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        neg_op(&self)
    }
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
