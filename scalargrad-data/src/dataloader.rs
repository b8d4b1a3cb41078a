// dataloader.rs
//! # DataLoader
//!
//! Groups dataset items into batches, in the order chosen by a [`Sampler`].
//!
//! ```rust
//! use scalargrad_data::dataloader::DataLoader;
//! use scalargrad_data::datasets::LabeledDataset;
//! use scalargrad_data::samplers::SequentialSampler;
//!
//! let features = vec![vec![0.0], vec![1.0], vec![2.0]];
//! let dataset = LabeledDataset::new(features, vec![-1.0, 1.0, 1.0]).expect("rectangular data");
//! let loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false);
//! let sizes: Vec<usize> = loader.map(|b| b.expect("in-bounds index").len()).collect();
//! assert_eq!(sizes, vec![2, 1]);
//! ```
//!
//! The loader is an [`Iterator`] over one pass. Call [`DataLoader::reset`]
//! to start the next pass (epoch); the sampler then draws a fresh order.

use crate::datasets::Dataset;
use crate::error::DataError;
use crate::samplers::Sampler;

/// Generic batching loader.
///
/// # Type Parameters
/// - `D`: the dataset, implementing [`Dataset`].
/// - `S`: the index order, implementing [`Sampler`].
pub struct DataLoader<D: Dataset, S: Sampler> {
    /// The source dataset.
    pub dataset: D,
    /// Items per batch.
    pub batch_size: usize,
    /// The sampler producing indices.
    pub sampler: S,
    /// If true, a final batch smaller than `batch_size` is skipped.
    pub drop_last: bool,
    indices_iter: Box<dyn Iterator<Item = usize> + Send + Sync>,
}

impl<D: Dataset, S: Sampler> DataLoader<D, S> {
    /// Creates a loader positioned at the start of a first pass.
    ///
    /// A `batch_size` of zero yields no batches.
    pub fn new(dataset: D, batch_size: usize, sampler: S, drop_last: bool) -> Self {
        if batch_size == 0 {
            log::warn!("DataLoader created with batch_size 0; it will yield no batches.");
        }
        let indices_iter = sampler.iter(dataset.len());
        Self {
            dataset,
            batch_size,
            sampler,
            drop_last,
            indices_iter,
        }
    }

    /// Starts a new pass over the dataset.
    pub fn reset(&mut self) {
        self.indices_iter = self.sampler.iter(self.dataset.len());
    }

    /// Number of batches in one full pass.
    pub fn num_batches(&self) -> usize {
        if self.batch_size == 0 {
            return 0;
        }
        let n = self.sampler.len(self.dataset.len());
        if self.drop_last {
            n / self.batch_size
        } else {
            n.div_ceil(self.batch_size)
        }
    }
}

impl<D: Dataset, S: Sampler> Iterator for DataLoader<D, S> {
    type Item = Result<Vec<<D as Dataset>::Item>, DataError>;

    /// Returns the next batch.
    ///
    /// - `Some(Ok(batch))`: a batch ready to use.
    /// - `Some(Err(e))`: an item could not be fetched.
    /// - `None`: the pass is over.
    fn next(&mut self) -> Option<Self::Item> {
        let mut batch = Vec::with_capacity(self.batch_size);
        for _ in 0..self.batch_size {
            let Some(idx) = self.indices_iter.next() else {
                break;
            };
            match self.dataset.get(idx) {
                Ok(item) => batch.push(item),
                Err(e) => return Some(Err(e)),
            }
        }
        if batch.is_empty() || (self.drop_last && batch.len() < self.batch_size) {
            return None;
        }
        Some(Ok(batch))
    }
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;
