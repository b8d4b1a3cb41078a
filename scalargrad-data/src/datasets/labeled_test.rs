use super::*;
use approx::assert_relative_eq;
use std::io::Write;

const SAMPLE_JSON: &str = r#"{"x": [[0.5, 1.0], [-1.0, 0.25], [2.0, -0.5]], "y": [1, 0, 1]}"#;

#[test]
fn test_from_json_str() {
    let data = LabeledDataset::from_json_str(SAMPLE_JSON).unwrap();
    assert_eq!(data.len(), 3);
    assert_eq!(data.n_features(), 2);
    assert_eq!(data.labels(), &[1.0, 0.0, 1.0]);
    assert_eq!(
        data.get(1).unwrap(),
        Sample {
            features: vec![-1.0, 0.25],
            label: 0.0
        }
    );
    assert_eq!(data.to_string(), "LabeledDataset(x: 3x2, y: 3)");
}

#[test]
fn test_signed_labels() {
    let data = LabeledDataset::from_json_str(SAMPLE_JSON).unwrap().to_signed_labels();
    assert_eq!(data.labels(), &[1.0, -1.0, 1.0]);
    assert_relative_eq!(data.features()[2][0], 2.0);
}

#[test]
fn test_length_mismatch() {
    let result = LabeledDataset::from_json_str(r#"{"x": [[1.0], [2.0]], "y": [1]}"#);
    assert!(matches!(
        result,
        Err(DataError::LengthMismatch { features: 2, labels: 1 })
    ));
}

#[test]
fn test_ragged_features() {
    let result = LabeledDataset::new(vec![vec![1.0, 2.0], vec![3.0]], vec![0.0, 1.0]);
    assert!(matches!(
        result,
        Err(DataError::RaggedFeatures { row: 1, expected: 2, actual: 1 })
    ));
}

#[test]
fn test_malformed_json() {
    assert!(matches!(
        LabeledDataset::from_json_str(r#"{"x": [[1.0]]}"#),
        Err(DataError::Json(_))
    ));
}

#[test]
fn test_file_round_trip() {
    let data = LabeledDataset::from_json_str(SAMPLE_JSON).unwrap();
    let path = std::env::temp_dir().join(format!("scalargrad_labeled_{}.json", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(data.to_json_string().unwrap().as_bytes()).unwrap();
    }
    let loaded = LabeledDataset::from_json_file(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(loaded, data);
}

#[test]
fn test_missing_file() {
    let result = LabeledDataset::from_json_file("/nonexistent/scalargrad/data.json");
    assert!(matches!(result, Err(DataError::Io(_))));
}

#[test]
fn test_empty_and_out_of_bounds() {
    let data = LabeledDataset::new(Vec::new(), Vec::new()).unwrap();
    assert!(data.is_empty());
    assert_eq!(data.n_features(), 0);
    assert!(matches!(
        data.get(0),
        Err(DataError::IndexOutOfBounds { index: 0, len: 0 })
    ));
    assert_eq!(data.iter().count(), 0);
}

#[test]
fn test_sample_to_values() {
    let sample = Sample {
        features: vec![0.5, -2.0],
        label: 1.0,
    };
    let values = sample.to_values();
    assert_eq!(values.len(), 2);
    assert!(values.iter().all(|v| v.is_leaf()));
    assert_eq!(values[1].data(), -2.0);
}
