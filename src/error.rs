//! Error types for the WGAN tabular library

use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader/writer error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A cell could not be parsed as a number
    #[error("Failed to parse value {value:?} at row {row}, column {column:?}")]
    Parse {
        row: usize,
        column: String,
        value: String,
    },

    /// Dataset has no rows or no columns
    #[error("Empty dataset: {0}")]
    EmptyDataset(String),

    /// Not enough rows for the requested operation
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Feature width does not match what a component was built for
    #[error("Shape mismatch: expected {expected} features, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// ndarray could not build an array of the requested shape
    #[error("Array shape error: {0}")]
    Array(#[from] ndarray::ShapeError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// libtorch error
    #[error("Torch error: {0}")]
    Tch(#[from] tch::TchError),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error
    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML write error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}
