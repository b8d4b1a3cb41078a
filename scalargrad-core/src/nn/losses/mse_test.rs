use crate::autograd::grad_check::check_grad;
use crate::error::ScalarGradError;
use crate::nn::losses::mse::{MSELoss, Reduction};
use crate::value::Value;
use approx::assert_relative_eq;

#[test]
fn test_reduction_from_str() {
    assert_eq!("mean".parse::<Reduction>(), Ok(Reduction::Mean));
    assert_eq!("SUM".parse::<Reduction>(), Ok(Reduction::Sum));
    assert!(matches!(
        "none".parse::<Reduction>(),
        Err(ScalarGradError::UnsupportedOperation(_))
    ));
}

#[test]
fn test_mse_loss_forward_basic() -> Result<(), ScalarGradError> {
    let mse = MSELoss::new(Reduction::Mean);
    let input = [Value::new(1.0), Value::new(2.0)];
    let loss = mse.calculate(&input, &[1.5, 1.0])?;
    assert_relative_eq!(loss.data(), 0.625, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_mse_loss_sum_and_backward() -> Result<(), ScalarGradError> {
    let mse = MSELoss::new(Reduction::Sum);
    let p0 = Value::new(1.0);
    let p1 = Value::new(2.0);
    let loss = mse.calculate(&[p0.clone(), p1.clone()], &[1.5, 1.0])?;
    assert_relative_eq!(loss.data(), 1.25, epsilon = 1e-12);

    loss.backward();
    assert_relative_eq!(p0.grad(), -1.0);
    assert_relative_eq!(p1.grad(), 2.0);
    Ok(())
}

#[test]
fn test_mse_loss_mismatched_lengths() {
    let mse = MSELoss::default();
    let result = mse.calculate(&[Value::new(1.0), Value::new(2.0)], &[1.0, 2.0, 3.0]);
    assert!(matches!(result, Err(ScalarGradError::LengthMismatch { .. })));
    assert_eq!(mse.reduction(), Reduction::Mean);
}

#[test]
fn test_mse_loss_grad_check() {
    let mse = MSELoss::new(Reduction::Mean);
    let result = check_grad(
        |x| match mse.calculate(x, &[0.3, -0.2, 1.0]) {
            Ok(loss) => loss,
            Err(e) => panic!("{}", e),
        },
        &[1.0, 0.5, -0.4],
        1e-6,
        1e-5,
    );
    assert_eq!(result, Ok(()));
}
