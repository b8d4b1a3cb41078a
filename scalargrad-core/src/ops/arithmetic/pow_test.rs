use crate::autograd::grad_check::check_grad;
use crate::ops::arithmetic::pow_op;
use crate::value::Value;
use approx::assert_relative_eq;

#[test]
fn test_pow_cube_of_negative() {
    let a = Value::new(-4.0);
    let b = pow_op(&a, 3);
    assert_eq!(b.data(), -64.0);
    assert_eq!(b.op_tag(), Some("pow"));

    b.backward();
    assert_eq!(a.grad(), 48.0);
}

#[test]
fn test_pow_zero_exponent() {
    let a = Value::new(3.0);
    let b = a.pow(0);
    b.backward();
    assert_eq!(b.data(), 1.0);
    assert_eq!(a.grad(), 0.0);
}

#[test]
fn test_pow_negative_exponent() {
    let a = Value::new(2.0);
    let b = a.pow(-2);
    b.backward();
    assert_relative_eq!(b.data(), 0.25);
    assert_relative_eq!(a.grad(), -0.25);
}

#[test]
fn test_pow_reciprocal_of_zero_is_infinite() {
    let a = Value::new(0.0);
    let b = a.pow(-1);
    b.backward();
    assert!(b.data().is_infinite());
    assert!(a.grad().is_infinite());
}

#[test]
fn test_pow_grad_check() {
    for exponent in [-3, -1, 1, 2, 5] {
        let result = check_grad(|x| x[0].pow(exponent), &[1.7], 1e-6, 1e-5);
        assert_eq!(result, Ok(()), "exponent {}", exponent);
    }
}

#[test]
fn test_pow_min_exponent_uses_exact_derivative_exponent() {
    // d/dx x^n = n * x^(n-1); with n = i32::MIN the exponent n-1 is odd.
    let a = Value::new(-1.0);
    let b = a.pow(i32::MIN);
    assert_eq!(b.data(), 1.0);
    b.backward();
    assert_eq!(a.grad(), -f64::from(i32::MIN));
}
