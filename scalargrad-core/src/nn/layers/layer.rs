use crate::error::ScalarGradError;
use crate::nn::activation::Activation;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::{prefix_names, Module};
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// `nout` independent neurons reading the same inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    nin: usize,
}

impl Layer {
    /// Creates a layer of `nout` randomly initialized neurons.
    pub fn new<R: Rng + ?Sized>(nin: usize, nout: usize, activation: Activation, rng: &mut R) -> Self {
        let neurons = (0..nout).map(|_| Neuron::new(nin, activation, &mut *rng)).collect();
        Layer { neurons, nin }
    }

    /// Creates a layer whose weights are all produced by `init`.
    pub fn with_initializer<F>(nin: usize, nout: usize, activation: Activation, mut init: F) -> Self
    where
        F: FnMut() -> f64,
    {
        let neurons = (0..nout)
            .map(|_| Neuron::with_initializer(nin, activation, &mut init))
            .collect();
        Layer { neurons, nin }
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn nin(&self) -> usize {
        self.nin
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    /// One output per neuron, in neuron order.
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        if input.len() != self.nin {
            return Err(ScalarGradError::InputSizeMismatch {
                expected: self.nin,
                actual: input.len(),
                module: "Layer".to_string(),
            });
        }
        self.neurons.iter().map(|n| n.activate(input)).collect()
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(Module::parameters).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, n)| prefix_names(&format!("neurons.{}", i), n.named_parameters()))
            .collect()
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Layer of [")?;
        for (i, neuron) in self.neurons.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", neuron)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
