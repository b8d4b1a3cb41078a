//! Graph traversal and gradient propagation.
//!
//! - [`BackwardOp`]: the gradient rule recorded on every node.
//! - [`graph::topological_sort`]: dependency order over a graph.
//! - [`grad_check::check_grad`]: finite-difference verification of gradients.
//! - [`dot::to_dot`]: Graphviz export.

pub mod backward_op;
pub mod dot;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
pub use graph::topological_sort;

use crate::value::Value;

/// Resets the gradient of every value in `params` to zero.
///
/// Gradients accumulate across backward passes; call this before each new
/// pass unless accumulation (e.g. over a batch of separate graphs) is wanted.
pub fn zero_grad(params: &[Value]) {
    for param in params {
        param.zero_grad();
    }
}

#[cfg(test)]
mod tests {
    use super::zero_grad;
    use crate::value::Value;

    fn f(a: &Value, b: &Value) -> Value {
        (a * b + a.pow(2)).tanh() + b.relu()
    }

    #[test]
    fn test_zero_grad_then_fresh_expression_reproduces_grads() {
        let a = Value::new(0.4);
        let b = Value::new(-0.7);

        f(&a, &b).backward();
        let first = (a.grad(), b.grad());
        assert!(first.0 != 0.0 && first.1 != 0.0);

        zero_grad(&[a.clone(), b.clone()]);
        assert_eq!((a.grad(), b.grad()), (0.0, 0.0));

        f(&a, &b).backward();
        assert_eq!((a.grad(), b.grad()), first);
    }

    #[test]
    fn test_zero_grad_is_idempotent_and_accepts_empty() {
        let a = Value::new(1.0);
        (&a * 3.0).backward();
        zero_grad(&[a.clone()]);
        zero_grad(&[a.clone()]);
        zero_grad(&[]);
        assert_eq!(a.grad(), 0.0);
    }
}
