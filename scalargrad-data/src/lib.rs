//! # scalargrad-data
//!
//! Datasets, index samplers and a batching loader feeding the scalar models
//! of `scalargrad-core`.
//!
//! - [`datasets`]: the [`Dataset`] trait, labelled
//!   feature/label data read from JSON, and the two-moons generator.
//! - [`samplers`]: index orders (sequential, random, seeded).
//! - [`dataloader`]: batches of samples in sampler order.

pub mod dataloader;
pub mod datasets;
pub mod error;
pub mod samplers;

// Re-export main components
pub use dataloader::DataLoader;
pub use datasets::{make_moons, Dataset, LabeledDataset, Sample};
pub use error::DataError;
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
