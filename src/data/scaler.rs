//! Min-max feature scaling
//!
//! The scaler is fitted once on the training partition and then frozen:
//! test rows and generator output are transformed with the same statistics.
//!
//! Formula: x_scaled = (x - min) / (max - min)
//!
//! Columns with zero width (min == max) map every value to 0.

use ndarray::{Array2, Axis};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Per-feature min/max statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinMaxScaler {
    pub min_vals: Vec<f64>,
    pub max_vals: Vec<f64>,
}

impl MinMaxScaler {
    /// Fit min and max of each column
    ///
    /// # Arguments
    ///
    /// * `data` - 2D array of shape (num_samples, num_features)
    pub fn fit(data: &Array2<f64>) -> Result<Self> {
        if data.nrows() == 0 || data.ncols() == 0 {
            return Err(Error::EmptyDataset(
                "cannot fit scaler on an empty matrix".to_string(),
            ));
        }

        let mut min_vals = vec![f64::MAX; data.ncols()];
        let mut max_vals = vec![f64::MIN; data.ncols()];

        for (col, column) in data.axis_iter(Axis(1)).enumerate() {
            for &val in column.iter() {
                if val < min_vals[col] {
                    min_vals[col] = val;
                }
                if val > max_vals[col] {
                    max_vals[col] = val;
                }
            }
        }

        Ok(Self { min_vals, max_vals })
    }

    /// Number of features the scaler was fitted on
    pub fn num_features(&self) -> usize {
        self.min_vals.len()
    }

    /// Indices of columns with zero width
    pub fn constant_columns(&self) -> Vec<usize> {
        (0..self.num_features())
            .filter(|&col| self.range(col) <= 0.0)
            .collect()
    }

    fn range(&self, col: usize) -> f64 {
        self.max_vals[col] - self.min_vals[col]
    }

    fn check_width(&self, data: &Array2<f64>) -> Result<()> {
        if data.ncols() != self.num_features() {
            return Err(Error::ShapeMismatch {
                expected: self.num_features(),
                actual: data.ncols(),
            });
        }
        Ok(())
    }

    /// Scale data with the fitted statistics
    ///
    /// Values outside the fitted extrema are not clamped.
    pub fn transform(&self, data: &Array2<f64>) -> Result<Array2<f64>> {
        self.check_width(data)?;

        let mut scaled = data.clone();
        for (col, mut column) in scaled.axis_iter_mut(Axis(1)).enumerate() {
            let range = self.range(col);
            let min = self.min_vals[col];
            if range > 0.0 {
                column.mapv_inplace(|x| (x - min) / range);
            } else {
                column.fill(0.0);
            }
        }

        Ok(scaled)
    }

    /// Fit on `data` and return the scaled copy
    pub fn fit_transform(data: &Array2<f64>) -> Result<(Self, Array2<f64>)> {
        let scaler = Self::fit(data)?;
        let scaled = scaler.transform(data)?;
        Ok((scaler, scaled))
    }

    /// Map scaled values back to the original range
    ///
    /// Formula: x = x_scaled * (max - min) + min
    pub fn inverse_transform(&self, data: &Array2<f64>) -> Result<Array2<f64>> {
        self.check_width(data)?;

        let mut restored = data.clone();
        for (col, mut column) in restored.axis_iter_mut(Axis(1)).enumerate() {
            let range = self.range(col).max(0.0);
            let min = self.min_vals[col];
            column.mapv_inplace(|x| x * range + min);
        }

        Ok(restored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_fit_transform_range() {
        let data = array![[0.0, 100.0], [50.0, 200.0], [100.0, 300.0]];
        let (scaler, scaled) = MinMaxScaler::fit_transform(&data).unwrap();

        assert_eq!(scaler.min_vals, vec![0.0, 100.0]);
        assert_eq!(scaler.max_vals, vec![100.0, 300.0]);
        for val in scaled.iter() {
            assert!(*val >= 0.0 && *val <= 1.0);
        }
        assert_eq!(scaled[[1, 0]], 0.5);
        assert_eq!(scaled[[2, 1]], 1.0);
    }

    #[test]
    fn test_transform_does_not_clamp() {
        let train = array![[0.0], [10.0]];
        let scaler = MinMaxScaler::fit(&train).unwrap();

        let test = array![[-5.0], [20.0]];
        let scaled = scaler.transform(&test).unwrap();

        assert_eq!(scaled[[0, 0]], -0.5);
        assert_eq!(scaled[[1, 0]], 2.0);
    }

    #[test]
    fn test_constant_column_maps_to_zero() {
        let data = array![[1.0, 7.0], [2.0, 7.0], [3.0, 7.0]];
        let (scaler, scaled) = MinMaxScaler::fit_transform(&data).unwrap();

        assert_eq!(scaler.constant_columns(), vec![1]);
        assert!(scaled.column(1).iter().all(|&v| v == 0.0));
        assert!(scaled.iter().all(|v| v.is_finite()));

        let other = scaler.transform(&array![[9.0, 123.0]]).unwrap();
        assert_eq!(other[[0, 1]], 0.0);
    }

    #[test]
    fn test_inverse_transform_recovers_original() {
        let data = array![[0.0, 100.0, 4.0], [50.0, 200.0, 4.0], [100.0, 300.0, 4.0]];
        let (scaler, scaled) = MinMaxScaler::fit_transform(&data).unwrap();
        let restored = scaler.inverse_transform(&scaled).unwrap();

        for (orig, back) in data.iter().zip(restored.iter()) {
            assert!((orig - back).abs() < 1e-10);
        }
    }

    #[test]
    fn test_width_mismatch() {
        let scaler = MinMaxScaler::fit(&array![[0.0, 1.0], [1.0, 2.0]]).unwrap();
        assert!(matches!(
            scaler.transform(&array![[0.0]]),
            Err(Error::ShapeMismatch { expected: 2, actual: 1 })
        ));
    }

    #[test]
    fn test_fit_empty() {
        let empty = Array2::<f64>::zeros((0, 3));
        assert!(MinMaxScaler::fit(&empty).is_err());
    }
}
