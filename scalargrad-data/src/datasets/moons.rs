use super::labeled::LabeledDataset;
use crate::error::DataError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use std::f64::consts::PI;

/// Generates two interleaving half circles in 2-D.
///
/// The first `n_samples / 2` points lie on the upper unit half circle
/// (label `0`), the rest on a lower half circle shifted by `(1, -0.5)`
/// (label `1`). Each coordinate receives Gaussian noise with standard
/// deviation `noise`, then the rows are shuffled.
///
/// The same `seed` always yields the same dataset; `None` draws a seed from
/// the thread RNG.
///
/// # Errors
/// `InvalidParameter` if `noise` is negative or not finite.
pub fn make_moons(n_samples: usize, noise: f64, seed: Option<u64>) -> Result<LabeledDataset, DataError> {
    if !noise.is_finite() || noise < 0.0 {
        return Err(DataError::InvalidParameter {
            name: "noise".to_string(),
            reason: format!("must be finite and non-negative, got {}", noise),
        });
    }
    let normal = Normal::new(0.0, noise).map_err(|e| DataError::InvalidParameter {
        name: "noise".to_string(),
        reason: e.to_string(),
    })?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let n_outer = n_samples / 2;
    let n_inner = n_samples - n_outer;

    let mut rows: Vec<(Vec<f64>, f64)> = Vec::with_capacity(n_samples);
    for t in linspace(0.0, PI, n_outer) {
        rows.push((vec![t.cos(), t.sin()], 0.0));
    }
    for t in linspace(0.0, PI, n_inner) {
        rows.push((vec![1.0 - t.cos(), 1.0 - t.sin() - 0.5], 1.0));
    }

    for (x, _) in rows.iter_mut() {
        for v in x.iter_mut() {
            *v += normal.sample(&mut rng);
        }
    }
    rows.shuffle(&mut rng);

    log::debug!("Generated {} moon samples (noise {})", n_samples, noise);
    let (features, labels) = rows.into_iter().unzip();
    LabeledDataset::new(features, labels)
}

/// `n` evenly spaced points over `[start, end]`, endpoints included.
fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 { (end - start) / (n - 1) as f64 } else { 0.0 };
    (0..n).map(move |i| start + step * i as f64)
}

#[cfg(test)]
#[path = "moons_test.rs"]
mod tests;
