// src/value/mod.rs

use crate::autograd::BackwardOp;
use std::cell::RefCell;
use std::rc::Rc;

mod accessors;
mod autograd_methods;
mod traits;

/// Internal state of one node of the computation graph.
pub(crate) struct Node {
    /// Forward-computed result.
    pub(crate) data: f64,
    /// Accumulated `∂root/∂self`, zero until a backward pass reaches this node.
    pub(crate) grad: f64,
    /// How this node was produced; carries the operand handles.
    pub(crate) op: BackwardOp,
    /// Operator name shown by graph export (`None` for leaves).
    pub(crate) tag: Option<&'static str>,
    /// Optional user label, diagnostic only.
    pub(crate) label: Option<String>,
}

impl Drop for Node {
    /// Frees the operand chain with a worklist instead of nested drops.
    ///
    /// Each operand whose last handle is the one being released has its rule
    /// detached first, so dropping it never recurses into its own operands.
    /// A long chain (a sum over many samples) is released in constant stack.
    fn drop(&mut self) {
        let mut pending = std::mem::replace(&mut self.op, BackwardOp::Leaf).into_operands();
        while let Some(mut value) = pending.pop() {
            if let Some(cell) = Rc::get_mut(&mut value.node) {
                let op = std::mem::replace(&mut cell.get_mut().op, BackwardOp::Leaf);
                pending.extend(op.into_operands());
            }
        }
    }
}

/// A scalar node of the computation graph.
///
/// `Value` uses `Rc<RefCell<Node>>` internally to allow for:
/// 1.  **Shared Ownership:** the caller and every downstream node that uses a
///     value as an operand hold handles to the same node. Cloning a `Value` is
///     a shallow clone; it never copies the node.
/// 2.  **Interior Mutability:** the gradient is accumulated (and parameters
///     are updated) through shared handles.
///
/// Edges only point from an output to its operands, so the handles never form
/// a reference cycle and a node is freed once its last holder is dropped.
///
/// Equality and hashing are by identity: two distinct nodes holding the same
/// number are different values.
pub struct Value {
    pub(crate) node: Rc<RefCell<Node>>,
}

impl Value {
    /// Creates a leaf value (an input, a constant or a parameter) with zero gradient.
    pub fn new(data: f64) -> Self {
        Self::from_op(data, BackwardOp::Leaf)
    }

    /// Creates the output node of an operation.
    pub(crate) fn from_op(data: f64, op: BackwardOp) -> Self {
        let tag = op.name();
        Value {
            node: Rc::new(RefCell::new(Node {
                data,
                grad: 0.0,
                op,
                tag,
                label: None,
            })),
        }
    }

    /// Overrides the operator tag of a composed operation (`sub`, `div`).
    pub(crate) fn retag(self, tag: &'static str) -> Self {
        self.node.borrow_mut().tag = Some(tag);
        self
    }
}
