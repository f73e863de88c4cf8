//! Utility module with helper functions
//!
//! This module provides:
//! - Configuration handling
//! - Torch seeding
//! - ndarray/tensor conversions

mod config;
mod seed;
mod tensor;

pub use config::{Config, DataConfig, EvaluationConfigFile, ModelConfig, TrainingConfigFile};
pub use seed::seed_everything;
pub use tensor::{array_to_tensor, tensor_to_array, tensor_to_vec};
