//! Data module for loading and preparing tabular data
//!
//! This module provides:
//! - CSV loading into a numeric table
//! - Seeded train/test split
//! - Min-max scaling fitted on the train partition
//! - DataLoader for shuffled mini-batches

mod loader;
mod scaler;
mod split;
mod synthetic;
mod table;

pub use loader::{DataLoader, DataLoaderIter};
pub use scaler::MinMaxScaler;
pub use split::train_test_split;
pub use synthetic::synthetic_table;
pub use table::TabularDataset;

use crate::error::Result;

/// Train/test partitions after scaling, with the frozen scaler
#[derive(Debug, Clone)]
pub struct PreparedData {
    /// Scaled train partition
    pub train: TabularDataset,
    /// Scaled test partition
    pub test: TabularDataset,
    /// Scaler fitted on the raw train partition
    pub scaler: MinMaxScaler,
}

/// Split, fit the scaler on train only, and scale both partitions
pub fn prepare(dataset: &TabularDataset, test_fraction: f64, seed: u64) -> Result<PreparedData> {
    let (train, test) = train_test_split(dataset, test_fraction, seed)?;
    let scaler = MinMaxScaler::fit(&train.features)?;

    let constant = scaler.constant_columns();
    if !constant.is_empty() {
        let names: Vec<&str> = constant.iter().map(|&c| dataset.headers[c].as_str()).collect();
        tracing::warn!("Constant columns scaled to 0: {}", names.join(", "));
    }

    let train = TabularDataset::new(train.headers, scaler.transform(&train.features)?)?;
    let test = TabularDataset::new(test.headers, scaler.transform(&test.features)?)?;

    Ok(PreparedData { train, test, scaler })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_scales_train_into_unit_range() {
        let dataset = synthetic_table(200, 3, 42);
        let prepared = prepare(&dataset, 0.2, 42).unwrap();

        assert_eq!(prepared.train.len(), 160);
        assert_eq!(prepared.test.len(), 40);
        assert!(prepared
            .train
            .features
            .iter()
            .all(|&v| (0.0..=1.0).contains(&v)));

        // Scaler statistics come from the raw train rows only
        let (raw_train, _) = train_test_split(&dataset, 0.2, 42).unwrap();
        assert_eq!(prepared.scaler, MinMaxScaler::fit(&raw_train.features).unwrap());
    }
}
