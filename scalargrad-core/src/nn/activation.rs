use crate::value::Value;
use std::fmt;

/// Non-linearity applied to a neuron's pre-activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    /// Identity, used for output layers.
    #[default]
    Linear,
    Relu,
    Tanh,
}

impl Activation {
    /// Applies the activation to `x`. `Linear` returns the same node.
    pub fn apply(&self, x: Value) -> Value {
        match self {
            Activation::Linear => x,
            Activation::Relu => x.relu(),
            Activation::Tanh => x.tanh(),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Activation::Linear => "Linear",
            Activation::Relu => "ReLU",
            Activation::Tanh => "Tanh",
        };
        write!(f, "{}", name)
    }
}
