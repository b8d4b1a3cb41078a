// scalargrad-data/src/samplers/traits.rs

use std::fmt::Debug;

/// Decides which dataset indices a loader visits, and in which order.
///
/// A sampler only sees the dataset length, never the data. Each call to
/// [`Sampler::iter`] starts a new pass (an epoch).
pub trait Sampler: Debug + Send + Sync {
    /// Returns the indices of one pass over a dataset of `dataset_len` items.
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync>;

    /// Number of indices one pass yields.
    ///
    /// Can differ from `dataset_len` when a sample count is fixed, or when
    /// sampling with replacement.
    fn len(&self, dataset_len: usize) -> usize;
}
