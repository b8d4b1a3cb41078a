use crate::autograd::graph::topological_sort;
use crate::value::Value;

impl Value {
    /// Performs the backward pass starting from this value.
    ///
    /// Seeds this value's gradient with `1.0`, sorts the reachable graph
    /// topologically and runs every node's gradient rule in reverse order, so
    /// a node only pushes gradient to its operands once all of its consumers
    /// have contributed to it.
    ///
    /// Gradients are **accumulated**, never reset: calling `backward` twice,
    /// or on two graphs sharing leaves, sums the contributions. Call
    /// [`Value::zero_grad`] (or `Module::zero_grad`) before a fresh pass.
    pub fn backward(&self) {
        let sorted = topological_sort(self);
        if sorted.len() == 1 {
            log::debug!("backward() called on a leaf value. No operation to perform.");
        } else {
            log::debug!("backward() over {} nodes", sorted.len());
        }

        self.set_grad(1.0);
        for node in sorted.iter().rev() {
            // Operands are distinct nodes (the graph is acyclic), so mutably
            // borrowing them while this node is borrowed is fine.
            let inner = node.node.borrow();
            inner.op.backward(inner.data, inner.grad);
        }
    }

    /// Resets this value's gradient to zero.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }

    /// Returns every node reachable from this value, each operand before the
    /// nodes computed from it, this value last.
    pub fn sort(&self) -> Vec<Value> {
        topological_sort(self)
    }

    /// Renders the graph ending at this value in Graphviz DOT format.
    pub fn to_dot(&self) -> String {
        crate::autograd::dot::to_dot(self)
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
