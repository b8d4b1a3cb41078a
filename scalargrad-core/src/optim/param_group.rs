use crate::value::Value;

/// Defines a group of parameters with specific optimizer hyperparameters.
///
/// This allows applying different settings (like learning rate or weight decay)
/// to different parts of a model. The handles share nodes with the model, so
/// updates through the group are visible to the model.
#[derive(Clone, Debug)]
pub struct ParamGroup {
    /// The parameters included in this group.
    pub params: Vec<Value>,
    /// Learning rate, adjusted in place by schedulers.
    pub lr: f64,
    /// L2 penalty folded into the gradient at each step.
    pub weight_decay: f64,
}

impl ParamGroup {
    /// Creates a new parameter group without weight decay.
    pub fn new(params: Vec<Value>, lr: f64) -> Self {
        ParamGroup {
            params,
            lr,
            weight_decay: 0.0,
        }
    }

    pub fn with_weight_decay(mut self, weight_decay: f64) -> Self {
        self.weight_decay = weight_decay;
        self
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    pub fn set_lr(&mut self, lr: f64) {
        self.lr = lr;
    }
}
