use super::traits::Dataset;
use crate::error::DataError;
use scalargrad_core::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// One feature row with its label.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub features: Vec<f64>,
    pub label: f64,
}

impl Sample {
    /// Wraps each feature in a fresh leaf, ready to feed a model.
    pub fn to_values(&self) -> Vec<Value> {
        self.features.iter().map(|&x| Value::new(x)).collect()
    }
}

/// On-disk layout: `{"x": [[f64, ...], ...], "y": [f64, ...]}`.
#[derive(Debug, Serialize, Deserialize)]
struct RawLabeledData {
    x: Vec<Vec<f64>>,
    y: Vec<f64>,
}

/// Rectangular feature matrix with one label per row.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledDataset {
    features: Vec<Vec<f64>>,
    labels: Vec<f64>,
}

impl LabeledDataset {
    /// Builds a dataset, checking that there is one label per row and that
    /// every row has the same number of features.
    pub fn new(features: Vec<Vec<f64>>, labels: Vec<f64>) -> Result<Self, DataError> {
        if features.len() != labels.len() {
            return Err(DataError::LengthMismatch {
                features: features.len(),
                labels: labels.len(),
            });
        }
        if let Some(first) = features.first() {
            let expected = first.len();
            if let Some((row, bad)) = features.iter().enumerate().find(|(_, r)| r.len() != expected) {
                return Err(DataError::RaggedFeatures {
                    row,
                    expected,
                    actual: bad.len(),
                });
            }
        }
        Ok(LabeledDataset { features, labels })
    }

    pub fn from_json_str(json: &str) -> Result<Self, DataError> {
        let raw: RawLabeledData = serde_json::from_str(json)?;
        Self::new(raw.x, raw.y)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, DataError> {
        let path = path.as_ref();
        log::debug!("Loading labelled data from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String, DataError> {
        let raw = RawLabeledData {
            x: self.features.clone(),
            y: self.labels.clone(),
        };
        Ok(serde_json::to_string(&raw)?)
    }

    /// Maps `{0, 1}` labels to `{-1, +1}` (`y' = 2y - 1`), as expected by a
    /// max-margin loss. Other label values are mapped by the same formula.
    pub fn to_signed_labels(&self) -> Self {
        LabeledDataset {
            features: self.features.clone(),
            labels: self.labels.iter().map(|y| 2.0 * y - 1.0).collect(),
        }
    }

    pub fn features(&self) -> &[Vec<f64>] {
        &self.features
    }

    pub fn labels(&self) -> &[f64] {
        &self.labels
    }

    /// Features per row, `0` for an empty dataset.
    pub fn n_features(&self) -> usize {
        self.features.first().map_or(0, Vec::len)
    }

    pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ {
        self.features.iter().zip(&self.labels).map(|(x, &y)| Sample {
            features: x.clone(),
            label: y,
        })
    }
}

impl Dataset for LabeledDataset {
    type Item = Sample;

    fn get(&self, index: usize) -> Result<Sample, DataError> {
        match (self.features.get(index), self.labels.get(index)) {
            (Some(x), Some(&y)) => Ok(Sample {
                features: x.clone(),
                label: y,
            }),
            _ => Err(DataError::IndexOutOfBounds {
                index,
                len: self.labels.len(),
            }),
        }
    }

    fn len(&self) -> usize {
        self.labels.len()
    }
}

impl fmt::Display for LabeledDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LabeledDataset(x: {}x{}, y: {})",
            self.features.len(),
            self.n_features(),
            self.labels.len()
        )
    }
}

#[cfg(test)]
#[path = "labeled_test.rs"]
mod tests;
