//! Configuration management
//!
//! Provides unified configuration for the entire WGAN pipeline. Defaults
//! reproduce the reference experiment: 10 epochs, batch size 128, clip value
//! 0.02, patience 10, 128 evaluation samples.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::evaluation::EvaluationConfig;
use crate::model::AdamSettings;
use crate::training::TrainingConfig;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Data configuration
    pub data: DataConfig,
    /// Model configuration
    pub model: ModelConfig,
    /// Training configuration
    pub training: TrainingConfigFile,
    /// Evaluation configuration
    pub evaluation: EvaluationConfigFile,
}

/// Data-related configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path to the input CSV
    pub path: String,
    /// Fraction of rows held out for testing
    pub test_fraction: f64,
    /// Seed for the split, the batch shuffle and torch
    pub seed: u64,
    /// Mini-batch size
    pub batch_size: usize,
    /// Reshuffle rows every epoch
    pub shuffle: bool,
}

/// Model-related configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Latent dimension size
    pub latent_dim: i64,
    /// Hidden layer widths of the generator
    pub gen_hidden: [i64; 2],
    /// Hidden layer widths of the critic
    pub critic_hidden: [i64; 2],
}

/// Training-related configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfigFile {
    /// Maximum number of epochs
    pub epochs: usize,
    /// Generator learning rate
    pub gen_lr: f64,
    /// Critic learning rate
    pub critic_lr: f64,
    /// Adam first-moment decay
    pub beta1: f64,
    /// Adam second-moment decay
    pub beta2: f64,
    /// Critic weights are clamped into [-clip_value, clip_value]
    pub clip_value: f64,
    /// Non-improving epochs before stopping
    pub patience: usize,
    /// Log losses every N epochs
    pub log_every: usize,
    /// Show a per-epoch progress bar
    pub progress_bar: bool,
    /// Pin torch to one thread for reproducible results
    pub deterministic: bool,
    /// Device: "cpu" or "cuda"
    pub device: String,
}

/// Evaluation-related configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfigFile {
    /// Number of synthetic rows to generate, and maximum number of test rows
    pub num_samples: usize,
    /// Scores strictly above this are predicted real
    pub threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig {
                path: "data/dataset.csv".to_string(),
                test_fraction: 0.2,
                seed: 42,
                batch_size: 128,
                shuffle: true,
            },
            model: ModelConfig {
                latent_dim: 100,
                gen_hidden: [128, 256],
                critic_hidden: [256, 128],
            },
            training: TrainingConfigFile {
                epochs: 10,
                gen_lr: 1e-4,
                critic_lr: 5e-5,
                beta1: 0.5,
                beta2: 0.999,
                clip_value: 0.02,
                patience: 10,
                log_every: 10,
                progress_bar: false,
                deterministic: true,
                device: "cpu".to_string(),
            },
            evaluation: EvaluationConfigFile {
                num_samples: 128,
                threshold: 0.0,
            },
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_toml(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_toml(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from JSON file
    pub fn from_json(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn save_json(&self, path: &str) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load from `path`, picking the format from the extension
    pub fn load(path: &str) -> Result<Self> {
        if path.ends_with(".toml") {
            Self::from_toml(path)
        } else {
            Self::from_json(path)
        }
    }

    /// Save to `path`, picking the format from the extension
    pub fn save(&self, path: &str) -> Result<()> {
        if path.ends_with(".toml") {
            self.save_toml(path)
        } else {
            self.save_json(path)
        }
    }

    /// Get device from configuration
    pub fn get_device(&self) -> tch::Device {
        match self.training.device.to_lowercase().as_str() {
            "cuda" | "gpu" => {
                if tch::Cuda::is_available() {
                    tch::Device::Cuda(0)
                } else {
                    tracing::warn!("CUDA requested but not available, falling back to CPU");
                    tch::Device::Cpu
                }
            }
            _ => tch::Device::Cpu,
        }
    }

    /// Trainer settings derived from this configuration
    pub fn training_config(&self) -> TrainingConfig {
        TrainingConfig {
            epochs: self.training.epochs,
            gen_lr: self.training.gen_lr,
            critic_lr: self.training.critic_lr,
            adam: AdamSettings {
                beta1: self.training.beta1,
                beta2: self.training.beta2,
            },
            clip_value: self.training.clip_value,
            patience: self.training.patience,
            log_every: self.training.log_every,
            progress_bar: self.training.progress_bar,
        }
    }

    /// Evaluator settings derived from this configuration
    pub fn evaluation_config(&self) -> EvaluationConfig {
        EvaluationConfig {
            num_samples: self.evaluation.num_samples,
            threshold: self.evaluation.threshold,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let fail = |msg: &str| Err(Error::Config(msg.to_string()));

        if !(self.data.test_fraction > 0.0 && self.data.test_fraction < 1.0) {
            return fail("test fraction must be in (0, 1)");
        }
        if self.data.batch_size == 0 {
            return fail("batch size must be > 0");
        }
        if self.model.latent_dim <= 0 {
            return fail("latent dimension must be > 0");
        }
        if self.model.gen_hidden.iter().chain(&self.model.critic_hidden).any(|&h| h <= 0) {
            return fail("hidden layer widths must be > 0");
        }
        if self.training.epochs == 0 {
            return fail("number of epochs must be > 0");
        }
        if self.training.gen_lr <= 0.0 || self.training.critic_lr <= 0.0 {
            return fail("learning rates must be > 0");
        }
        if !(0.0..1.0).contains(&self.training.beta1) || !(0.0..1.0).contains(&self.training.beta2) {
            return fail("Adam betas must be in [0, 1)");
        }
        if self.training.clip_value <= 0.0 {
            return fail("clip value must be > 0");
        }
        if self.training.patience == 0 {
            return fail("patience must be > 0");
        }
        if self.training.log_every == 0 {
            return fail("log interval must be > 0");
        }
        if self.evaluation.num_samples == 0 {
            return fail("number of evaluation samples must be > 0");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.data.batch_size, 128);
        assert_eq!(config.training.epochs, 10);
        assert_eq!(config.training.clip_value, 0.02);
        assert_eq!(config.training.patience, 10);
        assert_eq!(config.training.beta1, 0.5);
        assert_eq!(config.evaluation.num_samples, 128);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_json_file_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let path = path.to_str().unwrap();

        let mut config = Config::default();
        config.training.epochs = 3;
        config.save(path).unwrap();

        assert_eq!(Config::load(path).unwrap(), config);
    }

    #[test]
    fn test_config_toml_file_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let path = path.to_str().unwrap();

        let mut config = Config::default();
        config.data.seed = 7;
        config.save(path).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("[training]"));
        assert_eq!(Config::load(path).unwrap(), config);
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        config.data.batch_size = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.training.clip_value = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.data.test_fraction = 1.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.model.critic_hidden = [0, 8];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_derived_training_config() {
        let config = Config::default();
        let training = config.training_config();

        assert_eq!(training.epochs, 10);
        assert_eq!(training.adam.beta2, 0.999);
        assert_eq!(training.clip_value, 0.02);
    }
}
