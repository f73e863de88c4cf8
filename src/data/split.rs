//! Seeded train/test partitioning

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::table::TabularDataset;
use crate::error::{Error, Result};

/// Split a dataset into (train, test) partitions
///
/// A seeded permutation of row indices is drawn once; the first
/// `ceil(len * test_fraction)` indices become the test partition and the rest
/// the train partition. The same data and seed always give the same split.
pub fn train_test_split(
    dataset: &TabularDataset,
    test_fraction: f64,
    seed: u64,
) -> Result<(TabularDataset, TabularDataset)> {
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(Error::Config(format!(
            "test fraction must be in (0, 1), got {}",
            test_fraction
        )));
    }

    let n = dataset.len();
    let n_test = (n as f64 * test_fraction).ceil() as usize;
    if n_test == 0 || n_test >= n {
        return Err(Error::InsufficientData(format!(
            "cannot split {} rows with test fraction {}",
            n, test_fraction
        )));
    }

    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let (test_idx, train_idx) = indices.split_at(n_test);
    Ok((dataset.select_rows(train_idx), dataset.select_rows(test_idx)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    fn dataset(rows: usize) -> TabularDataset {
        let features = Array2::from_shape_fn((rows, 2), |(i, j)| (i * 10 + j) as f64);
        TabularDataset::from_features(features)
    }

    #[test]
    fn test_split_sizes() {
        let (train, test) = train_test_split(&dataset(1000), 0.2, 42).unwrap();
        assert_eq!(train.len(), 800);
        assert_eq!(test.len(), 200);

        // Rounding goes to the test side
        let (train, test) = train_test_split(&dataset(11), 0.2, 42).unwrap();
        assert_eq!(train.len(), 8);
        assert_eq!(test.len(), 3);
    }

    #[test]
    fn test_split_is_deterministic() {
        let data = dataset(100);
        let (train_a, test_a) = train_test_split(&data, 0.2, 7).unwrap();
        let (train_b, test_b) = train_test_split(&data, 0.2, 7).unwrap();

        assert_eq!(train_a, train_b);
        assert_eq!(test_a, test_b);
    }

    #[test]
    fn test_split_is_a_partition() {
        let data = dataset(50);
        let (train, test) = train_test_split(&data, 0.2, 3).unwrap();

        let mut seen: Vec<f64> = train
            .features
            .column(0)
            .iter()
            .chain(test.features.column(0).iter())
            .copied()
            .collect();
        seen.sort_by(|a, b| a.partial_cmp(b).unwrap());

        let expected: Vec<f64> = (0..50).map(|i| (i * 10) as f64).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_different_seeds_differ() {
        let data = dataset(100);
        let (_, test_a) = train_test_split(&data, 0.2, 1).unwrap();
        let (_, test_b) = train_test_split(&data, 0.2, 2).unwrap();
        assert_ne!(test_a, test_b);
    }

    #[test]
    fn test_split_rejects_bad_input() {
        assert!(train_test_split(&dataset(10), 0.0, 42).is_err());
        assert!(train_test_split(&dataset(10), 1.0, 42).is_err());
        assert!(train_test_split(&dataset(1), 0.2, 42).is_err());
    }
}
