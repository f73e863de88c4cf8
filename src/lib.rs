//! # WGAN for Tabular Data
//!
//! This crate trains a Wasserstein GAN with weight clipping on numeric CSV
//! data and then measures how well the trained critic separates real rows
//! from generated ones.
//!
//! ## Modules
//!
//! - `data`: CSV loading, seeded split, min-max scaling, batching
//! - `model`: WGAN architecture (Generator and Critic)
//! - `training`: Training loop, losses and early stopping
//! - `evaluation`: Accuracy and F1 of the critic on real vs. fake rows
//! - `pipeline`: End-to-end run
//! - `utils`: Configuration, seeding and tensor conversions

pub mod data;
pub mod error;
pub mod evaluation;
pub mod model;
pub mod pipeline;
pub mod training;
pub mod utils;

pub use data::{prepare, DataLoader, MinMaxScaler, PreparedData, TabularDataset};
pub use error::{Error, Result};
pub use evaluation::{EvaluationConfig, EvaluationReport, Evaluator};
pub use model::{Critic, Generator, Wgan};
pub use pipeline::{run_on_dataset, run_pipeline, PipelineReport};
pub use training::{EarlyStopping, StopDecision, Trainer, TrainingConfig, TrainingMetrics, TrainingSummary};
pub use utils::Config;
