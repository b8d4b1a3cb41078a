//! Index orders for a [`DataLoader`](crate::DataLoader).

pub mod random_sampler;
pub mod sequential_sampler;
pub mod traits;

pub use random_sampler::RandomSampler;
pub use sequential_sampler::SequentialSampler;
pub use traits::Sampler;
