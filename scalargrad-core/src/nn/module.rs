use crate::error::ScalarGradError;
use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers, networks).
///
/// A module owns its parameters as leaf [`Value`]s. Handles returned by
/// [`Module::parameters`] share the underlying nodes, so an optimizer updating
/// them updates the module.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Arguments
    /// * `input`: one value per input feature.
    ///
    /// # Returns
    /// One value per output, or an error if `input` has the wrong length.
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, ScalarGradError>;

    /// Returns all learnable parameters of the module, sub-modules included,
    /// in a stable order.
    fn parameters(&self) -> Vec<Value>;

    /// Returns all learnable parameters along with their names.
    ///
    /// Names follow the nesting of the module, e.g. `layers.0.neurons.1.w.0`.
    /// The order matches [`Module::parameters`].
    fn named_parameters(&self) -> Vec<(String, Value)>;

    /// Resets the gradient of every parameter to zero.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    /// Total number of scalar parameters.
    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}

/// Prefixes every name of a child's `named_parameters` with `prefix.`.
pub(crate) fn prefix_names(prefix: &str, named: Vec<(String, Value)>) -> Vec<(String, Value)> {
    named
        .into_iter()
        .map(|(name, param)| (format!("{}.{}", prefix, name), param))
        .collect()
}
