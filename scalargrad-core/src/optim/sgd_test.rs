use crate::error::ScalarGradError;
use crate::optim::{Optimizer, ParamGroup, SgdOptimizer};
use crate::value::Value;
use approx::assert_relative_eq;

// Helper to create a parameter with a given gradient already accumulated.
fn param_with_grad(data: f64, grad: f64) -> Value {
    let p = Value::new(data);
    // p * grad has d/dp = grad
    (&p * grad).backward();
    p
}

#[test]
fn test_sgd_basic_step() -> Result<(), ScalarGradError> {
    let params = vec![param_with_grad(1.0, 0.1), param_with_grad(2.0, -0.2)];
    let mut optimizer = SgdOptimizer::new(params.clone(), 0.1, 0.0, 0.0, false)?;

    optimizer.step()?;

    assert_relative_eq!(params[0].data(), 1.0 - 0.1 * 0.1);
    assert_relative_eq!(params[1].data(), 2.0 + 0.1 * 0.2);
    // Gradients are left as they are.
    assert_relative_eq!(params[0].grad(), 0.1);
    Ok(())
}

#[test]
fn test_sgd_zero_grad() -> Result<(), ScalarGradError> {
    let p = param_with_grad(1.0, 3.0);
    let mut optimizer = SgdOptimizer::new(vec![p.clone()], 0.1, 0.0, 0.0, false)?;
    optimizer.zero_grad();
    assert_eq!(p.grad(), 0.0);
    Ok(())
}

#[test]
fn test_sgd_weight_decay() -> Result<(), ScalarGradError> {
    let p = param_with_grad(2.0, 0.5);
    let mut optimizer = SgdOptimizer::new(vec![p.clone()], 0.1, 0.0, 0.1, false)?;
    optimizer.step()?;
    // d = 0.5 + 0.1 * 2.0 = 0.7
    assert_relative_eq!(p.data(), 2.0 - 0.1 * 0.7);
    Ok(())
}

#[test]
fn test_sgd_momentum_accumulates_velocity() -> Result<(), ScalarGradError> {
    let p = param_with_grad(1.0, 1.0);
    let mut optimizer = SgdOptimizer::new(vec![p.clone()], 0.1, 0.9, 0.0, false)?;

    optimizer.step()?; // buf = 1.0
    assert_relative_eq!(p.data(), 0.9);

    optimizer.step()?; // buf = 0.9 * 1.0 + 1.0 = 1.9
    assert_relative_eq!(p.data(), 0.9 - 0.19, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_sgd_nesterov() -> Result<(), ScalarGradError> {
    let p = param_with_grad(1.0, 1.0);
    let mut optimizer = SgdOptimizer::new(vec![p.clone()], 0.1, 0.5, 0.0, true)?;

    optimizer.step()?; // buf = 1.0, d = 1.0 + 0.5 * 1.0 = 1.5
    assert_relative_eq!(p.data(), 1.0 - 0.15, epsilon = 1e-12);

    optimizer.step()?; // buf = 1.5, d = 1.0 + 0.75 = 1.75
    assert_relative_eq!(p.data(), 0.85 - 0.175, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_sgd_invalid_hyperparameters() {
    assert!(matches!(
        SgdOptimizer::new(vec![Value::new(0.0)], -0.1, 0.0, 0.0, false),
        Err(ScalarGradError::InvalidHyperparameter { .. })
    ));
    assert!(matches!(
        SgdOptimizer::new(vec![Value::new(0.0)], 0.1, f64::NAN, 0.0, false),
        Err(ScalarGradError::InvalidHyperparameter { .. })
    ));
    assert!(matches!(
        SgdOptimizer::new(vec![Value::new(0.0)], 0.1, 0.0, 0.0, true),
        Err(ScalarGradError::InvalidHyperparameter { .. })
    ));
}

#[test]
fn test_sgd_param_groups() -> Result<(), ScalarGradError> {
    let a = param_with_grad(1.0, 1.0);
    let b = param_with_grad(1.0, 1.0);
    let mut optimizer = SgdOptimizer::new(vec![a.clone()], 0.1, 0.0, 0.0, false)?;
    optimizer.add_param_group(ParamGroup::new(vec![b.clone()], 0.01));
    assert_eq!(optimizer.param_groups().len(), 2);

    optimizer.param_groups_mut()[0].set_lr(0.5);
    optimizer.step()?;
    assert_relative_eq!(a.data(), 0.5);
    assert_relative_eq!(b.data(), 0.99);
    Ok(())
}

#[test]
fn test_sgd_updates_shared_model_nodes() -> Result<(), ScalarGradError> {
    // Minimize (w - 3)^2 with plain SGD.
    let w = Value::new(0.0);
    let mut optimizer = SgdOptimizer::new(vec![w.clone()], 0.1, 0.0, 0.0, false)?;
    for _ in 0..100 {
        let loss = (&w - 3.0).pow(2);
        optimizer.zero_grad();
        loss.backward();
        optimizer.step()?;
    }
    assert_relative_eq!(w.data(), 3.0, epsilon = 1e-6);
    Ok(())
}
