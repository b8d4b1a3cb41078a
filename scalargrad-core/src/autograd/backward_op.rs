use crate::value::Value;

/// The gradient rule of a node, recorded by the operation that created it.
///
/// Each variant carries only what its rule needs: the operand handles, the
/// integer exponent, or the cached forward output. Composite operators
/// (`sub`, `neg`, `div`) are built from these and have no variant of their own.
///
/// Given the node's own forward value and accumulated gradient (`dL/dOut`),
/// [`BackwardOp::backward`] adds `dL/dOut * dOut/dInput` to each operand's
/// gradient.
#[derive(Debug, Clone)]
pub enum BackwardOp {
    /// Inputs, constants and parameters. Nothing to propagate.
    Leaf,
    /// `lhs + rhs`
    Add { lhs: Value, rhs: Value },
    /// `lhs * rhs`
    Mul { lhs: Value, rhs: Value },
    /// `base ^ exponent`, the exponent is a constant and is not differentiated.
    Pow { base: Value, exponent: i32 },
    /// `tanh(input)`, `output` is the cached forward result.
    Tanh { input: Value, output: f64 },
    /// `max(0, input)`
    Relu { input: Value },
}

impl BackwardOp {
    /// Pushes this node's gradient to its operands.
    ///
    /// # Arguments
    /// * `output_data`: the forward value of the node owning this rule.
    /// * `output_grad`: the gradient accumulated on that node so far.
    pub fn backward(&self, output_data: f64, output_grad: f64) {
        match self {
            BackwardOp::Leaf => {}
            BackwardOp::Add { lhs, rhs } => {
                lhs.accumulate_grad(output_grad);
                rhs.accumulate_grad(output_grad);
            }
            BackwardOp::Mul { lhs, rhs } => {
                let (lhs_data, rhs_data) = (lhs.data(), rhs.data());
                lhs.accumulate_grad(rhs_data * output_grad);
                rhs.accumulate_grad(lhs_data * output_grad);
            }
            BackwardOp::Pow { base, exponent } => {
                let n = f64::from(*exponent);
                let x = base.data();
                // `i32::MIN - 1` does not fit in an i32.
                let x_pow = match exponent.checked_sub(1) {
                    Some(m) => x.powi(m),
                    None => x.powf(n - 1.0),
                };
                let local = n * x_pow;
                base.accumulate_grad(local * output_grad);
            }
            BackwardOp::Tanh { input, output } => {
                input.accumulate_grad((1.0 - output * output) * output_grad);
            }
            BackwardOp::Relu { input } => {
                // Gradient flows iff the output is strictly positive (zero at 0).
                let local = if output_data > 0.0 { output_grad } else { 0.0 };
                input.accumulate_grad(local);
            }
        }
    }

    /// Returns the distinct operand nodes, in operand order.
    ///
    /// `a * a` yields `[a]`: the traversal set is deduplicated even though
    /// [`BackwardOp::backward`] counts both uses.
    pub fn inputs(&self) -> Vec<Value> {
        match self {
            BackwardOp::Leaf => Vec::new(),
            BackwardOp::Add { lhs, rhs } | BackwardOp::Mul { lhs, rhs } => {
                if lhs.ptr_eq(rhs) {
                    vec![lhs.clone()]
                } else {
                    vec![lhs.clone(), rhs.clone()]
                }
            }
            BackwardOp::Pow { base, .. } => vec![base.clone()],
            BackwardOp::Tanh { input, .. } | BackwardOp::Relu { input } => vec![input.clone()],
        }
    }

    /// The operator name used as the default tag of the output node.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            BackwardOp::Leaf => None,
            BackwardOp::Add { .. } => Some("add"),
            BackwardOp::Mul { .. } => Some("mul"),
            BackwardOp::Pow { .. } => Some("pow"),
            BackwardOp::Tanh { .. } => Some("tanh"),
            BackwardOp::Relu { .. } => Some("relu"),
        }
    }

    /// Consumes the rule and returns every operand handle it held, one per
    /// use (`a * a` yields `a` twice).
    pub(crate) fn into_operands(self) -> Vec<Value> {
        match self {
            BackwardOp::Leaf => Vec::new(),
            BackwardOp::Add { lhs, rhs } | BackwardOp::Mul { lhs, rhs } => vec![lhs, rhs],
            BackwardOp::Pow { base, .. } => vec![base],
            BackwardOp::Tanh { input, .. } | BackwardOp::Relu { input } => vec![input],
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, BackwardOp::Leaf)
    }
}
