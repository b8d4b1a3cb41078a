//! In-place parameter initialization.

use crate::error::ScalarGradError;
use crate::value::Value;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// Fills every parameter with a sample of `U[low, high]`.
///
/// Gradients are left untouched.
///
/// # Errors
/// `InvalidHyperparameter` if the bounds are not finite or `low > high`.
pub fn uniform_<R: Rng + ?Sized>(
    params: &[Value],
    low: f64,
    high: f64,
    rng: &mut R,
) -> Result<(), ScalarGradError> {
    for (name, bound) in [("low", low), ("high", high)] {
        if !bound.is_finite() {
            return Err(ScalarGradError::InvalidHyperparameter {
                name: name.to_string(),
                value: bound,
                reason: "uniform bounds must be finite".to_string(),
            });
        }
    }
    if low > high {
        return Err(ScalarGradError::InvalidHyperparameter {
            name: "low".to_string(),
            value: low,
            reason: format!("must not exceed high ({})", high),
        });
    }

    let dist = Uniform::new_inclusive(low, high);
    for param in params {
        param.set_data(dist.sample(rng));
    }
    Ok(())
}

/// Fills every parameter with `value`.
pub fn constant_(params: &[Value], value: f64) {
    for param in params {
        param.set_data(value);
    }
}

/// Fills every parameter with 0.
pub fn zeros_(params: &[Value]) {
    constant_(params, 0.0)
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
