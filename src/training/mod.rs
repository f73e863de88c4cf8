//! Training module for the WGAN
//!
//! This module provides:
//! - Training loop implementation
//! - Wasserstein loss functions
//! - Early stopping and per-epoch metrics

mod early_stopping;
mod losses;
mod metrics;
mod trainer;

pub use early_stopping::{EarlyStopping, StopDecision};
pub use losses::{critic_loss, generator_loss};
pub use metrics::TrainingMetrics;
pub use trainer::{train_step, StepLosses, Trainer, TrainingConfig, TrainingSummary};
