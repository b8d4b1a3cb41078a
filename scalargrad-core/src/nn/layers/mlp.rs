use crate::error::ScalarGradError;
use crate::nn::activation::Activation;
use crate::nn::layers::layer::Layer;
use crate::nn::module::{prefix_names, Module};
use crate::value::Value;
use num_traits::ToPrimitive;
use rand::Rng;
use std::fmt;

/// Multilayer perceptron.
///
/// Layer `i` maps `sizes[i]` inputs to `sizes[i + 1]` outputs, with
/// `sizes = [nin] ++ nouts`. Hidden layers use ReLU, the last layer is linear.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Creates a randomly initialized network.
    ///
    /// # Errors
    /// `InvalidArchitecture` if `nouts` is empty or any size is zero.
    pub fn new<R: Rng + ?Sized>(nin: usize, nouts: &[usize], rng: &mut R) -> Result<Self, ScalarGradError> {
        Self::build(nin, nouts, |nin, nout, activation| Layer::new(nin, nout, activation, &mut *rng))
    }

    /// Creates a network whose weights are all produced by `init`.
    pub fn with_initializer<F>(nin: usize, nouts: &[usize], mut init: F) -> Result<Self, ScalarGradError>
    where
        F: FnMut() -> f64,
    {
        Self::build(nin, nouts, |nin, nout, activation| {
            Layer::with_initializer(nin, nout, activation, &mut init)
        })
    }

    fn build<F>(nin: usize, nouts: &[usize], mut make_layer: F) -> Result<Self, ScalarGradError>
    where
        F: FnMut(usize, usize, Activation) -> Layer,
    {
        if nouts.is_empty() {
            return Err(ScalarGradError::InvalidArchitecture(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        if nin == 0 || nouts.contains(&0) {
            return Err(ScalarGradError::InvalidArchitecture(format!(
                "layer sizes must be positive, got nin={} nouts={:?}",
                nin, nouts
            )));
        }

        let sizes: Vec<usize> = std::iter::once(nin).chain(nouts.iter().copied()).collect();
        let last = nouts.len() - 1;
        let layers = (0..nouts.len())
            .map(|i| {
                let activation = if i < last { Activation::Relu } else { Activation::Linear };
                make_layer(sizes[i], sizes[i + 1], activation)
            })
            .collect();
        log::debug!("Built MLP with sizes {:?}", sizes);
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Number of inputs of the first layer.
    pub fn nin(&self) -> usize {
        self.layers.first().map_or(0, Layer::nin)
    }

    /// Number of outputs of the last layer.
    pub fn nout(&self) -> usize {
        self.layers.last().map_or(0, Layer::nout)
    }

    /// Runs the network on raw numbers, wrapping each in a fresh leaf.
    ///
    /// # Errors
    /// `NumericCast` if an element has no `f64` representation, plus any
    /// error of [`Module::forward`].
    pub fn predict<T: ToPrimitive>(&self, x: &[T]) -> Result<Vec<Value>, ScalarGradError> {
        let input = x
            .iter()
            .enumerate()
            .map(|(index, xi)| {
                xi.to_f64()
                    .map(Value::new)
                    .ok_or(ScalarGradError::NumericCast { index })
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.forward(&input)
    }
}

impl Module for Mlp {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        let mut activations = input.to_vec();
        for layer in &self.layers {
            activations = layer.forward(&activations)?;
        }
        Ok(activations)
    }

    fn parameters(&self) -> Vec<Value> {
        self.layers.iter().flat_map(Module::parameters).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, l)| prefix_names(&format!("layers.{}", i), l.named_parameters()))
            .collect()
    }
}

impl fmt::Display for Mlp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MLP of [")?;
        for (i, layer) in self.layers.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", layer)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
