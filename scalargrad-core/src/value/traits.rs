// src/value/traits.rs

use crate::value::Value;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::rc::Rc;

impl Clone for Value {
    /// Shallow clone: the new handle points to the same node.
    fn clone(&self) -> Self {
        Value {
            node: Rc::clone(&self.node),
        }
    }
}

impl PartialEq for Value {
    /// Identity equality. Values are never compared by their data.
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node_id().hash(state);
    }
}

impl fmt::Debug for Value {
    /// Shows the node itself; operands are counted, not printed, so large
    /// graphs stay readable.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node.borrow();
        f.debug_struct("Value")
            .field("data", &node.data)
            .field("grad", &node.grad)
            .field("op", &node.tag)
            .field("label", &node.label)
            .field("operands", &node.op.inputs().len())
            .finish()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={:.4}, grad={:.4})", self.data(), self.grad())
    }
}

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::new(0.0)
    }
}

impl Sum for Value {
    /// Chains additions left to right. An empty sum is a fresh `0.0` leaf.
    fn sum<I: Iterator<Item = Value>>(mut iter: I) -> Self {
        match iter.next() {
            Some(first) => iter.fold(first, |acc, v| &acc + &v),
            None => Value::new(0.0),
        }
    }
}

impl<'a> Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(iter: I) -> Self {
        iter.cloned().sum()
    }
}
