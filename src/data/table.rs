//! Tabular dataset: a header row plus a dense numeric feature matrix

use std::path::Path;

use ndarray::{Array2, Axis};

use crate::error::{Error, Result};

/// Numeric table loaded from CSV
///
/// Every column is treated as a feature; there is no index column and no
/// schema beyond "every cell parses as a number".
#[derive(Debug, Clone, PartialEq)]
pub struct TabularDataset {
    /// Column names taken from the header row
    pub headers: Vec<String>,
    /// Feature matrix of shape (num_rows, num_features)
    pub features: Array2<f64>,
}

impl TabularDataset {
    /// Create a dataset, checking that headers match the feature width
    pub fn new(headers: Vec<String>, features: Array2<f64>) -> Result<Self> {
        if headers.len() != features.ncols() {
            return Err(Error::ShapeMismatch {
                expected: headers.len(),
                actual: features.ncols(),
            });
        }
        Ok(Self { headers, features })
    }

    /// Create a dataset with generated column names (`f0`, `f1`, ...)
    pub fn from_features(features: Array2<f64>) -> Self {
        let headers = (0..features.ncols()).map(|i| format!("f{}", i)).collect();
        Self { headers, features }
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.features.nrows()
    }

    /// Check if dataset has no rows
    pub fn is_empty(&self) -> bool {
        self.features.nrows() == 0
    }

    /// Number of feature columns
    pub fn num_features(&self) -> usize {
        self.features.ncols()
    }

    /// Build a new dataset from a subset of rows, in the given order
    pub fn select_rows(&self, indices: &[usize]) -> Self {
        Self {
            headers: self.headers.clone(),
            features: self.features.select(Axis(0), indices),
        }
    }

    /// Load dataset from CSV file
    ///
    /// The first row is read as headers. Every other cell must parse as `f64`.
    pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path.as_ref())?;
        let headers: Vec<String> = reader.headers()?.iter().map(|h| h.trim().to_string()).collect();

        if headers.is_empty() {
            return Err(Error::EmptyDataset(format!(
                "{} has no columns",
                path.as_ref().display()
            )));
        }

        let mut values = Vec::new();
        let mut num_rows = 0;

        for (i, result) in reader.records().enumerate() {
            let record = result?;
            for (j, cell) in record.iter().enumerate() {
                let value: f64 = cell.trim().parse().map_err(|_| Error::Parse {
                    row: i + 1,
                    column: headers[j].clone(),
                    value: cell.to_string(),
                })?;
                values.push(value);
            }
            num_rows += 1;
        }

        if num_rows == 0 {
            return Err(Error::EmptyDataset(format!(
                "{} has no data rows",
                path.as_ref().display()
            )));
        }

        let features = Array2::from_shape_vec((num_rows, headers.len()), values)?;

        Ok(Self { headers, features })
    }

    /// Save dataset to CSV file
    pub fn save_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;

        writer.write_record(&self.headers)?;
        for row in self.features.rows() {
            writer.write_record(row.iter().map(|v| v.to_string()))?;
        }

        writer.flush()?;
        Ok(())
    }
}
