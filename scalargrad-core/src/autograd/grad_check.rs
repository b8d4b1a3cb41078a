use crate::value::Value;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Finite-difference step must be finite and positive, got {0:?}")]
    InvalidEpsilon(f64),
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` builds a graph from one leaf per entry of `inputs` and returns its
/// root. The analytical gradient of each leaf (after `root.backward()`) must
/// match `(f(x + ε) - f(x - ε)) / 2ε` within `tolerance`, absolute or
/// relative.
///
/// Points where `func` is not differentiable (e.g. relu at 0) cannot be
/// checked meaningfully.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Value,
{
    if !(epsilon.is_finite() && epsilon > 0.0) {
        return Err(GradCheckError::InvalidEpsilon(epsilon));
    }

    // --- 1. Analytical gradients ---
    let leaves: Vec<Value> = inputs.iter().map(|&x| Value::new(x)).collect();
    let output = func(&leaves);
    output.backward();

    let evaluate = |values: &[f64]| -> f64 {
        let perturbed: Vec<Value> = values.iter().map(|&x| Value::new(x)).collect();
        func(&perturbed).data()
    };

    // --- 2. Numerical gradient per input ---
    for (input_index, leaf) in leaves.iter().enumerate() {
        let analytical_grad = leaf.grad();
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let mut plus = inputs.to_vec();
        plus[input_index] += epsilon;
        let mut minus = inputs.to_vec();
        minus[input_index] -= epsilon;

        let loss_plus = evaluate(&plus);
        let loss_minus = evaluate(&minus);
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    log::debug!("check_grad passed for {} inputs", inputs.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_grad_accepts_correct_gradients() {
        let result = check_grad(
            |x| &(&x[0] * &x[1]) + &x[0].tanh(),
            &[0.7, -1.3],
            1e-6,
            1e-5,
        );
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_check_grad_rejects_bad_epsilon() {
        let result = check_grad(|x| x[0].clone(), &[1.0], 0.0, 1e-5);
        assert_eq!(result, Err(GradCheckError::InvalidEpsilon(0.0)));
    }

    #[test]
    fn test_check_grad_reports_mismatch() {
        // A graph whose recorded rule disagrees with its forward value:
        // the forward value depends on x through data() only.
        let result = check_grad(
            |x| Value::new(x[0].data() * x[0].data()) + &x[0] * 0.0,
            &[3.0],
            1e-6,
            1e-5,
        );
        match result {
            Err(GradCheckError::GradientMismatch { input_index, .. }) => assert_eq!(input_index, 0),
            other => panic!("Expected GradientMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_check_grad_reports_non_finite_analytical() {
        let result = check_grad(|x| x[0].pow(-1), &[0.0], 1e-6, 1e-5);
        assert!(matches!(
            result,
            Err(GradCheckError::AnalyticalGradNaNOrInfinite { input_index: 0, .. })
        ));
    }
}
