//! Training loop implementation for the WGAN
//!
//! Each mini-batch runs one critic update (followed by weight clipping) and
//! one generator update. After every epoch the final mini-batch's losses are
//! averaged and fed to the early-stopping controller.

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use tch::{Device, Tensor};
use tracing::{debug, info};

use super::early_stopping::{EarlyStopping, StopDecision};
use super::losses::{critic_loss, generator_loss};
use super::metrics::TrainingMetrics;
use crate::data::DataLoader;
use crate::error::{Error, Result};
use crate::model::{AdamSettings, Wgan};
use crate::utils::array_to_tensor;

/// Training configuration
#[derive(Debug, Clone)]
pub struct TrainingConfig {
    /// Maximum number of training epochs
    pub epochs: usize,
    /// Learning rate for generator
    pub gen_lr: f64,
    /// Learning rate for critic
    pub critic_lr: f64,
    /// Adam moment decays shared by both optimizers
    pub adam: AdamSettings,
    /// Critic weights are clamped into [-clip_value, clip_value]
    pub clip_value: f64,
    /// Stop after this many epochs without improvement
    pub patience: usize,
    /// Log losses on every epoch index divisible by this
    pub log_every: usize,
    /// Show a per-epoch progress bar
    pub progress_bar: bool,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            epochs: 10,
            gen_lr: 1e-4,
            critic_lr: 5e-5,
            adam: AdamSettings::default(),
            clip_value: 0.02,
            patience: 10,
            log_every: 10,
            progress_bar: false,
        }
    }
}

/// Outcome of a training run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSummary {
    /// Number of epochs actually run
    pub epochs_run: usize,
    /// Whether the patience counter ended training
    pub stopped_early: bool,
    /// Best averaged epoch loss
    pub best_loss: f64,
    /// Per-epoch loss history
    pub metrics: TrainingMetrics,
}

/// Losses of a single mini-batch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepLosses {
    pub gen_loss: f64,
    pub critic_loss: f64,
}

/// WGAN Trainer
pub struct Trainer {
    config: TrainingConfig,
    device: Device,
    metrics: TrainingMetrics,
}

impl Trainer {
    /// Create a new trainer
    pub fn new(config: TrainingConfig, device: Device) -> Self {
        Self {
            config,
            device,
            metrics: TrainingMetrics::new(),
        }
    }

    /// Train the WGAN model
    ///
    /// # Arguments
    ///
    /// * `model` - WGAN model to train
    /// * `data_loader` - DataLoader providing scaled training batches
    ///
    /// # Returns
    ///
    /// Summary with the number of epochs run and the loss history
    pub fn train(&mut self, model: &mut Wgan, data_loader: &mut DataLoader) -> Result<TrainingSummary> {
        if self.config.log_every == 0 {
            return Err(Error::Config("log interval must be > 0".to_string()));
        }
        if self.config.patience == 0 {
            return Err(Error::Config("patience must be > 0".to_string()));
        }
        if data_loader.num_batches() == 0 {
            return Err(Error::InsufficientData(
                "training partition yields no batches".to_string(),
            ));
        }
        if data_loader.num_features() as i64 != model.num_features() {
            return Err(Error::ShapeMismatch {
                expected: model.num_features() as usize,
                actual: data_loader.num_features(),
            });
        }

        let mut gen_opt = model.gen_optimizer(self.config.gen_lr, self.config.adam)?;
        let mut critic_opt = model.critic_optimizer(self.config.critic_lr, self.config.adam)?;
        let mut stopper = EarlyStopping::new(self.config.patience);
        self.metrics = TrainingMetrics::new();

        let num_batches = data_loader.num_batches();
        info!(
            "Starting training for up to {} epochs, {} batches per epoch",
            self.config.epochs, num_batches
        );

        let mut stopped_early = false;
        let mut epochs_run = 0;

        for epoch in 0..self.config.epochs {
            let pb = self.progress_bar(num_batches);
            let mut last = None;

            for real_batch in data_loader.iter() {
                let real_data = array_to_tensor(&real_batch, self.device);
                let losses = train_step(
                    model,
                    &real_data,
                    &mut gen_opt,
                    &mut critic_opt,
                    self.config.clip_value,
                );

                pb.set_message(format!(
                    "G: {:.4}, D: {:.4}",
                    losses.gen_loss, losses.critic_loss
                ));
                pb.inc(1);
                last = Some(losses);
            }
            pb.finish_and_clear();
            epochs_run += 1;

            let Some(last) = last else {
                break;
            };

            let avg_loss = self.metrics.record_epoch(last.gen_loss, last.critic_loss);
            debug!("Epoch {}: avg_loss={:.6}", epoch, avg_loss);

            if stopper.observe(avg_loss) == StopDecision::Stop {
                info!(
                    "Early stopping at epoch {} after {} epochs without improvement",
                    epoch,
                    stopper.epochs_no_improve()
                );
                stopped_early = true;
                break;
            }

            if epoch % self.config.log_every == 0 {
                info!(
                    "Epoch {}: G_loss={:.6}, D_loss={:.6}",
                    epoch, last.gen_loss, last.critic_loss
                );
            }
        }

        info!("Training finished");

        Ok(TrainingSummary {
            epochs_run,
            stopped_early,
            best_loss: stopper.best_loss(),
            metrics: self.metrics.clone(),
        })
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.config.progress_bar {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len as u64);
        let style = ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-");
        pb.set_style(style);
        pb
    }

    /// Get training metrics
    pub fn metrics(&self) -> &TrainingMetrics {
        &self.metrics
    }
}

/// Single training step: one critic update, weight clipping, one generator update
pub fn train_step(
    model: &mut Wgan,
    real_data: &Tensor,
    gen_opt: &mut tch::nn::Optimizer,
    critic_opt: &mut tch::nn::Optimizer,
    clip_value: f64,
) -> StepLosses {
    let batch_size = real_data.size()[0];

    // Critic: fakes are produced without a graph back into the generator
    let noise = model.generator.sample_noise(batch_size, model.device);
    let fake_data = model.generator.generate(&noise);

    let real_output = model.critic_forward(real_data);
    let fake_output = model.critic_forward(&fake_data);
    let d_loss = critic_loss(&real_output, &fake_output);

    critic_opt.zero_grad();
    d_loss.backward();
    critic_opt.step();
    model.clip_critic_weights(clip_value);

    // Generator: fresh noise, gradients flow through the critic into G
    let noise = model.generator.sample_noise(batch_size, model.device);
    let fake_data = model.generator_forward(&noise);
    let fake_output = model.critic_forward(&fake_data);
    let g_loss = generator_loss(&fake_output);

    gen_opt.zero_grad();
    g_loss.backward();
    gen_opt.step();

    StepLosses {
        gen_loss: g_loss.double_value(&[]),
        critic_loss: d_loss.double_value(&[]),
    }
}
