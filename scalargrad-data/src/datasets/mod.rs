pub mod labeled;
pub mod moons;
pub mod traits;

pub use labeled::{LabeledDataset, Sample};
pub use moons::make_moons;
pub use traits::Dataset;
