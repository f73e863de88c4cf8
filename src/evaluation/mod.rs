//! Evaluation of the trained critic
//!
//! This module provides:
//! - Binary classification metrics (accuracy, F1, weighted F1)
//! - Evaluator scoring real test rows against generated rows

mod evaluator;
mod metrics;

pub use evaluator::{EvaluationConfig, EvaluationReport, Evaluator};
pub use metrics::{accuracy, f1_score, precision, recall, threshold_predictions, weighted_f1_score};
