// src/ops/arithmetic/div.rs

use crate::ops::arithmetic::{mul_op, pow_op};
use crate::value::Value;

/// Computes `a / b` as `a * b^-1`.
///
/// Division by a zero-valued node yields `inf`/`NaN` like `f64` division.
pub fn div_op(a: &Value, b: &Value) -> Value {
    mul_op(a, &pow_op(b, -1)).retag("div")
}

impl_binary_op!(Div, div, crate::ops::arithmetic::div::div_op);
impl_assign_op!(DivAssign, div_assign, crate::ops::arithmetic::div::div_op);

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
