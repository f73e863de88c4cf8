//! DataLoader for batching and iterating over training rows
//!
//! Provides batching for GAN training with support for:
//! - Seeded shuffling on every epoch
//! - Drop last incomplete batch
//! - Iteration over batches

use ndarray::{Array2, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// DataLoader for iterating over batched feature rows
pub struct DataLoader {
    /// Full dataset of shape (num_rows, num_features)
    data: Array2<f64>,
    /// Batch size
    batch_size: usize,
    /// Whether to shuffle data each epoch
    shuffle: bool,
    /// Whether to drop the last incomplete batch
    drop_last: bool,
    /// Current indices for iteration
    indices: Vec<usize>,
    /// Current position in iteration
    current_idx: usize,
    /// Shuffle source, seeded so epochs replay identically
    rng: StdRng,
}

impl DataLoader {
    /// Create a new DataLoader
    ///
    /// # Arguments
    ///
    /// * `data` - 2D array of shape (num_rows, num_features)
    /// * `batch_size` - Number of rows per batch
    /// * `shuffle` - Whether to shuffle rows each epoch
    /// * `drop_last` - Whether to drop incomplete final batch
    /// * `seed` - Seed for the shuffle generator
    pub fn new(
        data: Array2<f64>,
        batch_size: usize,
        shuffle: bool,
        drop_last: bool,
        seed: u64,
    ) -> Self {
        let num_samples = data.nrows();
        let indices: Vec<usize> = (0..num_samples).collect();

        Self {
            data,
            batch_size: batch_size.max(1),
            shuffle,
            drop_last,
            indices,
            current_idx: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Get the number of batches per epoch
    pub fn num_batches(&self) -> usize {
        let num_samples = self.data.nrows();
        if self.drop_last {
            num_samples / self.batch_size
        } else {
            (num_samples + self.batch_size - 1) / self.batch_size
        }
    }

    /// Get total number of rows
    pub fn num_samples(&self) -> usize {
        self.data.nrows()
    }

    /// Get number of features
    pub fn num_features(&self) -> usize {
        self.data.ncols()
    }

    fn shuffle_indices(&mut self) {
        self.indices.shuffle(&mut self.rng);
    }

    /// Reset for new epoch, reshuffling if enabled
    pub fn reset(&mut self) {
        self.current_idx = 0;
        if self.shuffle {
            self.shuffle_indices();
        }
    }

    /// Get next batch
    ///
    /// Returns None when epoch is complete
    pub fn next_batch(&mut self) -> Option<Array2<f64>> {
        let num_samples = self.indices.len();
        let start = self.current_idx;

        if start >= num_samples {
            return None;
        }

        let end = (start + self.batch_size).min(num_samples);

        if self.drop_last && end - start < self.batch_size {
            return None;
        }

        let batch = self.data.select(Axis(0), &self.indices[start..end]);
        self.current_idx = end;
        Some(batch)
    }

    /// Start a new epoch and iterate over its batches
    pub fn iter(&mut self) -> DataLoaderIter<'_> {
        self.reset();
        DataLoaderIter { loader: self }
    }
}

/// Iterator adapter for DataLoader
pub struct DataLoaderIter<'a> {
    loader: &'a mut DataLoader,
}

impl<'a> Iterator for DataLoaderIter<'a> {
    type Item = Array2<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        self.loader.next_batch()
    }
}
