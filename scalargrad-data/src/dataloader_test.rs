use crate::dataloader::DataLoader;
use crate::datasets::{Dataset, LabeledDataset, Sample};
use crate::error::DataError;
use crate::samplers::{RandomSampler, Sampler, SequentialSampler};
use std::collections::HashSet;

/// `n` one-feature rows `[i]`, labelled by parity.
fn points(n: usize) -> LabeledDataset {
    let features = (0..n).map(|i| vec![i as f64]).collect();
    let labels = (0..n).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
    LabeledDataset::new(features, labels).expect("rectangular data")
}

fn first_features<D: Dataset<Item = Sample>, S: Sampler>(loader: &mut DataLoader<D, S>) -> Vec<Vec<f64>> {
    loader
        .map(|batch| {
            batch
                .expect("Batch should not error")
                .iter()
                .map(|s| s.features[0])
                .collect()
        })
        .collect()
}

#[test]
fn test_dataloader_sequential() {
    let mut loader = DataLoader::new(points(6), 2, SequentialSampler::new(), false);
    assert_eq!(loader.num_batches(), 3);
    assert_eq!(
        first_features(&mut loader),
        vec![vec![0.0, 1.0], vec![2.0, 3.0], vec![4.0, 5.0]]
    );
}

#[test]
fn test_dataloader_drop_last() {
    let mut loader = DataLoader::new(points(5), 2, SequentialSampler::new(), true);
    assert_eq!(loader.num_batches(), 2);
    // The trailing batch of size 1 is skipped.
    assert_eq!(first_features(&mut loader), vec![vec![0.0, 1.0], vec![2.0, 3.0]]);
}

#[test]
fn test_dataloader_keeps_partial_batch() {
    let mut loader = DataLoader::new(points(5), 2, SequentialSampler::new(), false);
    assert_eq!(loader.num_batches(), 3);
    assert_eq!(first_features(&mut loader).last(), Some(&vec![4.0]));
}

#[test]
fn test_dataloader_full_batch_repeats_after_reset() {
    let mut loader = DataLoader::new(points(3), 3, SequentialSampler::new(), false);
    let batch = loader.next().expect("one batch").expect("in bounds");
    assert_eq!(batch.len(), 3);
    assert_eq!(batch[1].label, -1.0);
    assert!(loader.next().is_none());

    loader.reset();
    let again = loader.next().expect("one batch").expect("in bounds");
    assert_eq!(again, batch);
}

#[test]
fn test_dataloader_random_pass_covers_dataset() {
    let sampler = RandomSampler::new(false, None).with_seed(5);
    let mut loader = DataLoader::new(points(17), 4, sampler, false);
    let seen: Vec<i64> = first_features(&mut loader)
        .into_iter()
        .flatten()
        .map(|x| x as i64)
        .collect();
    assert_eq!(seen.len(), 17);
    assert_eq!(seen.into_iter().collect::<HashSet<_>>().len(), 17);
}

#[test]
fn test_dataloader_surfaces_dataset_errors() {
    // A sampler that asks for an index past the end.
    #[derive(Debug)]
    struct PastTheEnd;
    impl Sampler for PastTheEnd {
        fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync> {
            Box::new(std::iter::once(dataset_len))
        }
        fn len(&self, _dataset_len: usize) -> usize {
            1
        }
    }

    let mut loader = DataLoader::new(points(2), 1, PastTheEnd, false);
    assert!(matches!(
        loader.next(),
        Some(Err(DataError::IndexOutOfBounds { index: 2, len: 2 }))
    ));
}

#[test]
fn test_dataloader_zero_batch_size() {
    let mut loader = DataLoader::new(points(3), 0, SequentialSampler::new(), false);
    assert_eq!(loader.num_batches(), 0);
    assert!(loader.next().is_none());
}
