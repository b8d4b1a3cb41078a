// scalargrad-data/src/samplers/random_sampler.rs

use super::traits::Sampler;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicU64, Ordering};

/// A sampler that randomly samples indices from a dataset.
///
/// Without replacement a pass is a random permutation (optionally truncated
/// to `num_samples`); with replacement each index is drawn independently.
///
/// A seeded sampler is reproducible: pass `k` is always drawn from
/// `seed + k`, so successive passes differ but a rerun repeats them.
#[derive(Debug)]
pub struct RandomSampler {
    replacement: bool,
    num_samples: Option<usize>,
    seed: Option<u64>,
    passes: AtomicU64,
}

impl RandomSampler {
    /// Creates a new `RandomSampler`.
    ///
    /// # Arguments
    ///
    /// * `replacement`: If `true`, an index can be selected multiple times.
    /// * `num_samples`: The total number of samples to draw. If `None`, it defaults to the dataset size.
    pub fn new(replacement: bool, num_samples: Option<usize>) -> Self {
        RandomSampler {
            replacement,
            num_samples,
            seed: None,
            passes: AtomicU64::new(0),
        }
    }

    /// Makes the sampler deterministic.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn replacement(&self) -> bool {
        self.replacement
    }

    fn pass_rng(&self) -> StdRng {
        let pass = self.passes.fetch_add(1, Ordering::Relaxed);
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(pass)),
            None => StdRng::from_entropy(),
        }
    }
}

impl Sampler for RandomSampler {
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync> {
        if dataset_len == 0 {
            return Box::new(std::iter::empty());
        }

        let mut rng = self.pass_rng();
        let actual_num_samples = self.num_samples.unwrap_or(dataset_len);

        if self.replacement {
            let indices: Vec<usize> = (0..actual_num_samples)
                .map(|_| rng.gen_range(0..dataset_len))
                .collect();
            return Box::new(indices.into_iter());
        }

        if actual_num_samples > dataset_len {
            log::warn!(
                "RandomSampler: num_samples ({}) > dataset_len ({}) without replacement. Returning empty iterator.",
                actual_num_samples,
                dataset_len
            );
            return Box::new(std::iter::empty());
        }
        let mut indices: Vec<usize> = (0..dataset_len).collect();
        indices.shuffle(&mut rng);
        indices.truncate(actual_num_samples);
        Box::new(indices.into_iter())
    }

    fn len(&self, dataset_len: usize) -> usize {
        if dataset_len == 0 {
            return 0;
        }
        match self.num_samples {
            Some(n) if !self.replacement && n > dataset_len => 0,
            Some(n) => n,
            None => dataset_len,
        }
    }
}

#[cfg(test)]
#[path = "random_sampler_test.rs"]
mod tests;
