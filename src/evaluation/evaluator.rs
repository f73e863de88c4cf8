//! Real-vs-fake evaluation with the trained critic
//!
//! Synthetic rows are passed through the same frozen scaler that was fitted
//! on the raw train partition, even though the generator already emits values
//! in [0, 1]. The real side is the first `num_samples` rows of the scaled
//! test partition; fewer rows are used if the partition is smaller.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::metrics::{accuracy, f1_score, threshold_predictions, weighted_f1_score};
use crate::data::{MinMaxScaler, TabularDataset};
use crate::error::{Error, Result};
use crate::model::Wgan;
use crate::utils::{array_to_tensor, tensor_to_array, tensor_to_vec};

/// Evaluation settings
#[derive(Debug, Clone)]
pub struct EvaluationConfig {
    /// Number of synthetic rows, and the cap on real rows
    pub num_samples: usize,
    /// Scores strictly above this are predicted real
    pub threshold: f64,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            num_samples: 128,
            threshold: 0.0,
        }
    }
}

/// Metrics of one evaluation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Accuracy of real-row predictions against all-ones labels
    pub real_accuracy: f64,
    /// Accuracy of fake-row predictions against all-zeros labels
    pub fake_accuracy: f64,
    /// F1 of the fake class over the fake rows
    pub fake_f1: f64,
    /// Support-weighted F1 over real and fake rows together
    pub weighted_f1: f64,
    /// Number of real rows scored
    pub num_real: usize,
    /// Number of fake rows scored
    pub num_fake: usize,
}

impl EvaluationReport {
    /// Compute all metrics from binary predictions for each group
    pub fn from_predictions(real_predictions: &[u8], fake_predictions: &[u8]) -> Self {
        let real_labels = vec![1u8; real_predictions.len()];
        let fake_labels = vec![0u8; fake_predictions.len()];

        let all_labels = [real_labels.as_slice(), fake_labels.as_slice()].concat();
        let all_predictions = [real_predictions, fake_predictions].concat();

        Self {
            real_accuracy: accuracy(&real_labels, real_predictions),
            fake_accuracy: accuracy(&fake_labels, fake_predictions),
            fake_f1: f1_score(&fake_labels, fake_predictions, 0),
            weighted_f1: weighted_f1_score(&all_labels, &all_predictions),
            num_real: real_predictions.len(),
            num_fake: fake_predictions.len(),
        }
    }

    /// Log the four metric lines
    pub fn log(&self) {
        info!("Real Accuracy: {:.2}%", self.real_accuracy * 100.0);
        info!("Fake Accuracy: {:.2}%", self.fake_accuracy * 100.0);
        info!("F1 Score (Fake): {:.4}", self.fake_f1);
        info!("Weighted F1 Score: {:.4}", self.weighted_f1);
    }
}

/// Scores real and synthetic rows with a trained critic
pub struct Evaluator<'a> {
    config: EvaluationConfig,
    scaler: &'a MinMaxScaler,
}

impl<'a> Evaluator<'a> {
    /// Create an evaluator bound to the scaler fitted during data preparation
    pub fn new(config: EvaluationConfig, scaler: &'a MinMaxScaler) -> Self {
        Self { config, scaler }
    }

    /// Generate synthetic rows, scaled with the frozen scaler
    pub fn synthetic_rows(&self, model: &Wgan) -> Result<ndarray::Array2<f64>> {
        let generated = tensor_to_array(&model.generate(self.config.num_samples as i64))?;
        self.scaler.transform(&generated)
    }

    /// Predictions (1 = real) for every row of `rows`
    pub fn predict(&self, model: &Wgan, rows: &ndarray::Array2<f64>) -> Result<Vec<u8>> {
        let scores = tensor_to_vec(&model.score(&array_to_tensor(rows, model.device)))?;
        Ok(threshold_predictions(&scores, self.config.threshold))
    }

    /// Evaluate the critic on the scaled test partition
    pub fn evaluate(&self, model: &Wgan, test: &TabularDataset) -> Result<EvaluationReport> {
        if test.is_empty() {
            return Err(Error::InsufficientData(
                "test partition is empty".to_string(),
            ));
        }
        if test.num_features() as i64 != model.num_features() {
            return Err(Error::ShapeMismatch {
                expected: model.num_features() as usize,
                actual: test.num_features(),
            });
        }

        let num_real = self.config.num_samples.min(test.len());
        if num_real < self.config.num_samples {
            debug!(
                "Test partition has {} rows, evaluating {} real against {} fake",
                test.len(),
                num_real,
                self.config.num_samples
            );
        }

        let real_rows = test.features.slice(ndarray::s![..num_real, ..]).to_owned();
        let fake_rows = self.synthetic_rows(model)?;

        let real_predictions = self.predict(model, &real_rows)?;
        let fake_predictions = self.predict(model, &fake_rows)?;

        Ok(EvaluationReport::from_predictions(
            &real_predictions,
            &fake_predictions,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::synthetic_table;
    use tch::Device;

    #[test]
    fn test_report_perfect() {
        let report = EvaluationReport::from_predictions(&[1; 128], &[0; 128]);

        assert_eq!(report.real_accuracy, 1.0);
        assert_eq!(report.fake_accuracy, 1.0);
        assert_eq!(report.fake_f1, 1.0);
        assert_eq!(report.weighted_f1, 1.0);
    }

    #[test]
    fn test_report_critic_calls_everything_real() {
        let report = EvaluationReport::from_predictions(&[1; 4], &[1; 4]);

        assert_eq!(report.real_accuracy, 1.0);
        assert_eq!(report.fake_accuracy, 0.0);
        assert_eq!(report.fake_f1, 0.0);
        // class 1: p=0.5, r=1 -> 2/3; class 0: 0 -> weighted (4 * 2/3) / 8
        assert!((report.weighted_f1 - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_truncates_small_test_set() {
        let table = synthetic_table(20, 3, 5);
        let (scaler, scaled) = MinMaxScaler::fit_transform(&table.features).unwrap();
        let test = TabularDataset::from_features(scaled);

        let model = Wgan::with_defaults(3, 8, Device::Cpu);
        let evaluator = Evaluator::new(EvaluationConfig::default(), &scaler);
        let report = evaluator.evaluate(&model, &test).unwrap();

        assert_eq!(report.num_real, 20);
        assert_eq!(report.num_fake, 128);
        for metric in [
            report.real_accuracy,
            report.fake_accuracy,
            report.fake_f1,
            report.weighted_f1,
        ] {
            assert!((0.0..=1.0).contains(&metric));
        }
    }

    #[test]
    fn test_synthetic_rows_use_frozen_scaler() {
        // Raw range [0, 2] halves every generated value
        let scaler = MinMaxScaler {
            min_vals: vec![0.0, 0.0],
            max_vals: vec![2.0, 2.0],
        };
        let model = Wgan::with_defaults(2, 8, Device::Cpu);
        let evaluator = Evaluator::new(
            EvaluationConfig {
                num_samples: 16,
                threshold: 0.0,
            },
            &scaler,
        );

        let rows = evaluator.synthetic_rows(&model).unwrap();
        assert_eq!(rows.dim(), (16, 2));
        assert!(rows.iter().all(|&v| (0.0..=0.5).contains(&v)));
    }

    #[test]
    fn test_evaluate_rejects_empty_test() {
        let scaler = MinMaxScaler {
            min_vals: vec![0.0],
            max_vals: vec![1.0],
        };
        let model = Wgan::with_defaults(1, 4, Device::Cpu);
        let evaluator = Evaluator::new(EvaluationConfig::default(), &scaler);
        let empty = TabularDataset::from_features(ndarray::Array2::zeros((0, 1)));

        assert!(evaluator.evaluate(&model, &empty).is_err());
    }
}
