use crate::error::ScalarGradError;
use crate::nn::activation::Activation;
use crate::nn::module::Module;
use crate::value::Value;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use std::fmt;

/// A single unit: `activation(b + Σ wᵢ·xᵢ)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `nin` weights drawn from `U[-1, 1]` and a zero bias.
    pub fn new<R: Rng + ?Sized>(nin: usize, activation: Activation, rng: &mut R) -> Self {
        let dist = Uniform::new_inclusive(-1.0, 1.0);
        Self::with_initializer(nin, activation, || dist.sample(&mut *rng))
    }

    /// Creates a neuron whose weights are produced by `init`, one call per
    /// weight. The bias starts at zero.
    pub fn with_initializer<F>(nin: usize, activation: Activation, mut init: F) -> Self
    where
        F: FnMut() -> f64,
    {
        let weights = (0..nin).map(|_| Value::new(init())).collect();
        Neuron {
            weights,
            bias: Value::new(0.0),
            activation,
        }
    }

    /// Evaluates the neuron on `x`.
    ///
    /// The sum starts from the bias and adds `wᵢ·xᵢ` left to right.
    ///
    /// # Errors
    /// `InputSizeMismatch` if `x.len()` differs from the number of weights.
    pub fn activate(&self, x: &[Value]) -> Result<Value, ScalarGradError> {
        if x.len() != self.weights.len() {
            return Err(ScalarGradError::InputSizeMismatch {
                expected: self.weights.len(),
                actual: x.len(),
                module: "Neuron".to_string(),
            });
        }
        let pre_activation = self
            .weights
            .iter()
            .zip(x)
            .fold(self.bias.clone(), |acc, (w, xi)| &acc + &(w * xi));
        Ok(self.activation.apply(pre_activation))
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Number of inputs.
    pub fn nin(&self) -> usize {
        self.weights.len()
    }
}

impl Module for Neuron {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        Ok(vec![self.activate(input)?])
    }

    /// Weights in input order, then the bias.
    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut named: Vec<(String, Value)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("w.{}", i), w.clone()))
            .collect();
        named.push(("b".to_string(), self.bias.clone()));
        named
    }
}

impl fmt::Display for Neuron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Neuron({})", self.activation, self.weights.len())
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
