use crate::autograd::grad_check::check_grad;
use crate::ops::arithmetic::sub_op;
use crate::value::Value;

#[test]
fn test_sub_forward_and_backward() {
    let a = Value::new(5.0);
    let b = Value::new(3.0);
    let c = sub_op(&a, &b);
    assert_eq!(c.data(), 2.0);
    assert_eq!(c.op_tag(), Some("sub"));

    c.backward();
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), -1.0);
}

#[test]
fn test_sub_self_is_zero() {
    let a = Value::new(4.0);
    let c = &a - &a;
    c.backward();
    assert_eq!(c.data(), 0.0);
    assert_eq!(a.grad(), 0.0);
}

#[test]
fn test_scalar_minus_value() {
    let a = Value::new(1.5);
    let c = 1.0 - &a;
    c.backward();
    assert_eq!(c.data(), -0.5);
    assert_eq!(a.grad(), -1.0);
}

#[test]
fn test_sub_assign() {
    let a = Value::new(2.0);
    let mut s = Value::new(10.0);
    s -= &a;
    s -= 1.0;
    assert_eq!(s.data(), 7.0);
    s.backward();
    assert_eq!(a.grad(), -1.0);
}

#[test]
fn test_sub_grad_check() {
    let result = check_grad(|x| &x[0] - &(&x[1] * &x[0]), &[0.8, 2.1], 1e-6, 1e-6);
    assert_eq!(result, Ok(()));
}
