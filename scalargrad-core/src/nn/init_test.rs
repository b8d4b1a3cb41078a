use crate::error::ScalarGradError;
use crate::nn::init::{constant_, uniform_, zeros_};
use crate::value::Value;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn params(n: usize) -> Vec<Value> {
    (0..n).map(|_| Value::new(0.5)).collect()
}

#[test]
fn test_zeros_() {
    let ps = params(4);
    ps[0].set_label("w");
    zeros_(&ps);
    assert!(ps.iter().all(|p| p.data() == 0.0));
    assert_eq!(ps[0].label().as_deref(), Some("w"));
}

#[test]
fn test_constant_() {
    let ps = params(3);
    constant_(&ps, 1.0);
    assert!(ps.iter().all(|p| p.data() == 1.0));
}

#[test]
fn test_uniform_within_bounds() -> Result<(), ScalarGradError> {
    let ps = params(200);
    let mut rng = StdRng::seed_from_u64(42);
    uniform_(&ps, -1.0, 1.0, &mut rng)?;
    assert!(ps.iter().all(|p| (-1.0..=1.0).contains(&p.data())));
    // Not all equal to the previous value.
    assert!(ps.iter().any(|p| p.data() != 0.5));
    Ok(())
}

#[test]
fn test_uniform_is_seeded() -> Result<(), ScalarGradError> {
    let a = params(10);
    let b = params(10);
    uniform_(&a, -2.0, 3.0, &mut StdRng::seed_from_u64(1))?;
    uniform_(&b, -2.0, 3.0, &mut StdRng::seed_from_u64(1))?;
    let da: Vec<f64> = a.iter().map(Value::data).collect();
    let db: Vec<f64> = b.iter().map(Value::data).collect();
    assert_eq!(da, db);
    Ok(())
}

#[test]
fn test_uniform_degenerate_range() -> Result<(), ScalarGradError> {
    let ps = params(3);
    uniform_(&ps, 0.25, 0.25, &mut StdRng::seed_from_u64(0))?;
    assert!(ps.iter().all(|p| p.data() == 0.25));
    Ok(())
}

#[test]
fn test_uniform_rejects_bad_bounds() {
    let ps = params(1);
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        uniform_(&ps, 1.0, -1.0, &mut rng),
        Err(ScalarGradError::InvalidHyperparameter { .. })
    ));
    assert!(matches!(
        uniform_(&ps, f64::NEG_INFINITY, 1.0, &mut rng),
        Err(ScalarGradError::InvalidHyperparameter { .. })
    ));
    assert_eq!(ps[0].data(), 0.5);
}
