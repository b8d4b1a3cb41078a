use crate::autograd::graph::NodeId;
use crate::value::Value;
use std::rc::Rc;

impl Value {
    /// Returns the forward value.
    pub fn data(&self) -> f64 {
        self.node.borrow().data
    }

    /// Overwrites the forward value.
    ///
    /// Meant for optimizer updates on leaf parameters; changing the data of an
    /// operation output does not recompute anything downstream.
    pub fn set_data(&self, data: f64) {
        self.node.borrow_mut().data = data;
    }

    /// Returns the accumulated gradient.
    pub fn grad(&self) -> f64 {
        self.node.borrow().grad
    }

    pub(crate) fn set_grad(&self, grad: f64) {
        self.node.borrow_mut().grad = grad;
    }

    /// Adds to this node's gradient (a value used several times receives one
    /// contribution per use).
    pub(crate) fn accumulate_grad(&self, grad: f64) {
        self.node.borrow_mut().grad += grad;
    }

    /// Returns the name of the operation that produced this value, `None` for leaves.
    pub fn op_tag(&self) -> Option<&'static str> {
        self.node.borrow().tag
    }

    /// Returns `true` if this value was not produced by an operation.
    pub fn is_leaf(&self) -> bool {
        self.node.borrow().op.is_leaf()
    }

    /// Returns the distinct operands this value was computed from.
    ///
    /// An operand used twice by the same operation (`a * a`) is listed once.
    pub fn operands(&self) -> Vec<Value> {
        self.node.borrow().op.inputs()
    }

    pub fn label(&self) -> Option<String> {
        self.node.borrow().label.clone()
    }

    pub fn set_label(&self, label: &str) {
        self.node.borrow_mut().label = Some(label.to_string());
    }

    /// Builder-style variant of [`Value::set_label`].
    pub fn with_label(self, label: &str) -> Self {
        self.set_label(label);
        self
    }

    /// A number identifying this node while it is alive (its address).
    pub fn id(&self) -> usize {
        self.node_id() as usize
    }

    pub(crate) fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.node)
    }

    /// Returns `true` if both handles point to the same node.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }
}
