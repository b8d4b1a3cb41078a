use super::param_group::ParamGroup;
use crate::error::ScalarGradError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating model parameters based on their gradients.
pub trait Optimizer {
    /// Performs a single optimization step.
    ///
    /// Reads the gradient accumulated on every managed parameter and writes
    /// the updated value back into the parameter's node.
    fn step(&mut self) -> Result<(), ScalarGradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// This is typically called before the backward pass in a new training iteration
    /// to prevent gradients from accumulating across iterations (unless desired behavior).
    fn zero_grad(&mut self);

    /// Adds a new parameter group to the optimizer.
    ///
    /// This allows specifying different hyperparameters (e.g., learning rate)
    /// for different sets of parameters within the same optimizer.
    fn add_param_group(&mut self, param_group: ParamGroup);

    /// Returns an immutable slice of the parameter groups managed by the optimizer.
    fn param_groups(&self) -> &[ParamGroup];

    /// Returns a mutable slice of the parameter groups managed by the optimizer.
    /// This allows modifying hyperparameters like the learning rate for each group.
    fn param_groups_mut(&mut self) -> &mut [ParamGroup];
}

impl<O: Optimizer + ?Sized> Optimizer for &mut O {
    fn step(&mut self) -> Result<(), ScalarGradError> {
        (**self).step()
    }

    fn zero_grad(&mut self) {
        (**self).zero_grad()
    }

    fn add_param_group(&mut self, param_group: ParamGroup) {
        (**self).add_param_group(param_group)
    }

    fn param_groups(&self) -> &[ParamGroup] {
        (**self).param_groups()
    }

    fn param_groups_mut(&mut self) -> &mut [ParamGroup] {
        (**self).param_groups_mut()
    }
}
