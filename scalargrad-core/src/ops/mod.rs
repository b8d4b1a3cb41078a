//! # Operations Module (`ops`)
//!
//! Every operator that builds a new [`Value`](crate::Value) lives here.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** each operation has a core function (`add_op`,
//!   `relu_op`, ...) that computes the forward value and records the
//!   [`BackwardOp`](crate::autograd::BackwardOp) of the output node.
//! - **Operator traits:** `std::ops` implementations (`+`, `-`, `*`, `/`,
//!   unary `-`, compound assignment) and inherent methods (`pow`, `tanh`,
//!   `relu`) delegate to those functions.
//! - **Composite operators:** `sub`, `neg` and `div` are compositions of
//!   `add`, `mul` and `pow` and inherit their gradient rules.
//!
//! Mixed `Value`/`f64` operands wrap the scalar in a fresh leaf, which then
//! receives (and drops) a gradient like any other leaf.

/// Implements a binary `std::ops` trait for every combination of owned and
/// borrowed `Value` operands, plus `f64` on either side.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:path) => {
        impl std::ops::$trait<&$crate::value::Value> for &$crate::value::Value {
            type Output = $crate::value::Value;
            fn $method(self, rhs: &$crate::value::Value) -> $crate::value::Value {
                $op_fn(self, rhs)
            }
        }

        impl std::ops::$trait<$crate::value::Value> for $crate::value::Value {
            type Output = $crate::value::Value;
            fn $method(self, rhs: $crate::value::Value) -> $crate::value::Value {
                $op_fn(&self, &rhs)
            }
        }

        impl std::ops::$trait<&$crate::value::Value> for $crate::value::Value {
            type Output = $crate::value::Value;
            fn $method(self, rhs: &$crate::value::Value) -> $crate::value::Value {
                $op_fn(&self, rhs)
            }
        }

        impl std::ops::$trait<$crate::value::Value> for &$crate::value::Value {
            type Output = $crate::value::Value;
            fn $method(self, rhs: $crate::value::Value) -> $crate::value::Value {
                $op_fn(self, &rhs)
            }
        }

        impl std::ops::$trait<f64> for $crate::value::Value {
            type Output = $crate::value::Value;
            fn $method(self, rhs: f64) -> $crate::value::Value {
                $op_fn(&self, &$crate::value::Value::new(rhs))
            }
        }

        impl std::ops::$trait<f64> for &$crate::value::Value {
            type Output = $crate::value::Value;
            fn $method(self, rhs: f64) -> $crate::value::Value {
                $op_fn(self, &$crate::value::Value::new(rhs))
            }
        }

        impl std::ops::$trait<$crate::value::Value> for f64 {
            type Output = $crate::value::Value;
            fn $method(self, rhs: $crate::value::Value) -> $crate::value::Value {
                $op_fn(&$crate::value::Value::new(self), &rhs)
            }
        }

        impl std::ops::$trait<&$crate::value::Value> for f64 {
            type Output = $crate::value::Value;
            fn $method(self, rhs: &$crate::value::Value) -> $crate::value::Value {
                $op_fn(&$crate::value::Value::new(self), rhs)
            }
        }
    };
}

/// Implements a compound assignment trait (`+=`, ...). The handle is rebound
/// to the new output node; the previous node stays in the graph as its operand.
macro_rules! impl_assign_op {
    ($trait:ident, $method:ident, $op_fn:path) => {
        impl std::ops::$trait<&$crate::value::Value> for $crate::value::Value {
            fn $method(&mut self, rhs: &$crate::value::Value) {
                *self = $op_fn(&*self, rhs);
            }
        }

        impl std::ops::$trait<$crate::value::Value> for $crate::value::Value {
            fn $method(&mut self, rhs: $crate::value::Value) {
                *self = $op_fn(&*self, &rhs);
            }
        }

        impl std::ops::$trait<f64> for $crate::value::Value {
            fn $method(&mut self, rhs: f64) {
                *self = $op_fn(&*self, &$crate::value::Value::new(rhs));
            }
        }
    };
}

pub mod activation; // Activation functions (relu, tanh)
pub mod arithmetic;

pub use activation::{relu_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
