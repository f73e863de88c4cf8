//! WGAN wrapper combining Generator and Critic
//!
//! Owns one variable store per network so each optimizer only ever touches
//! its own parameters, and applies weight clipping to the critic.

use tch::{nn, nn::Module, nn::OptimizerConfig, nn::VarStore, Device, Tensor};

use super::critic::{Critic, CriticConfig};
use super::generator::{Generator, GeneratorConfig};
use crate::error::Result;

/// Adam settings shared by both networks
#[derive(Debug, Clone, Copy)]
pub struct AdamSettings {
    /// First-moment decay
    pub beta1: f64,
    /// Second-moment decay
    pub beta2: f64,
}

impl Default for AdamSettings {
    fn default() -> Self {
        Self {
            beta1: 0.5,
            beta2: 0.999,
        }
    }
}

/// Complete WGAN model
pub struct Wgan {
    /// Generator network
    pub generator: Generator,
    /// Critic network
    pub critic: Critic,
    /// Variable store for generator
    pub gen_vs: VarStore,
    /// Variable store for critic
    pub critic_vs: VarStore,
    /// Device (CPU/GPU)
    pub device: Device,
}

impl Wgan {
    /// Create a new WGAN model
    ///
    /// Parameters are initialized from the global torch generator, so seed it
    /// first for reproducible weights.
    pub fn new(gen_config: GeneratorConfig, critic_config: CriticConfig, device: Device) -> Self {
        let gen_vs = VarStore::new(device);
        let critic_vs = VarStore::new(device);

        let generator = Generator::new(&gen_vs.root(), gen_config);
        let critic = Critic::new(&critic_vs.root(), critic_config);

        Self {
            generator,
            critic,
            gen_vs,
            critic_vs,
            device,
        }
    }

    /// Create a WGAN for `num_features` columns with default hidden widths
    pub fn with_defaults(num_features: i64, latent_dim: i64, device: Device) -> Self {
        let gen_config = GeneratorConfig {
            latent_dim,
            output_dim: num_features,
            ..Default::default()
        };
        let critic_config = CriticConfig {
            input_dim: num_features,
            ..Default::default()
        };

        Self::new(gen_config, critic_config, device)
    }

    /// Generate `num_samples` synthetic rows from fresh noise, without gradients
    ///
    /// Returns a tensor of shape (num_samples, num_features)
    pub fn generate(&self, num_samples: i64) -> Tensor {
        let noise = self.generator.sample_noise(num_samples, self.device);
        self.generator.generate(&noise)
    }

    /// Critic scores without gradients, shape (batch_size, 1)
    pub fn score(&self, samples: &Tensor) -> Tensor {
        self.critic.score(samples)
    }

    /// Generator forward pass with gradients enabled
    pub fn generator_forward(&self, noise: &Tensor) -> Tensor {
        self.generator.forward(noise)
    }

    /// Critic forward pass with gradients enabled
    pub fn critic_forward(&self, samples: &Tensor) -> Tensor {
        self.critic.forward(samples)
    }

    /// Adam optimizer over the generator parameters
    pub fn gen_optimizer(&self, lr: f64, adam: AdamSettings) -> Result<nn::Optimizer> {
        let opt = nn::Adam {
            beta1: adam.beta1,
            beta2: adam.beta2,
            ..Default::default()
        }
        .build(&self.gen_vs, lr)?;
        Ok(opt)
    }

    /// Adam optimizer over the critic parameters
    pub fn critic_optimizer(&self, lr: f64, adam: AdamSettings) -> Result<nn::Optimizer> {
        let opt = nn::Adam {
            beta1: adam.beta1,
            beta2: adam.beta2,
            ..Default::default()
        }
        .build(&self.critic_vs, lr)?;
        Ok(opt)
    }

    /// Clamp every critic parameter element-wise into `[-clip_value, clip_value]`
    pub fn clip_critic_weights(&self, clip_value: f64) {
        tch::no_grad(|| {
            for mut var in self.critic_vs.trainable_variables() {
                let _ = var.clamp_(-clip_value, clip_value);
            }
        });
    }

    /// Largest absolute value over all critic parameters
    pub fn critic_max_abs_weight(&self) -> f64 {
        self.critic_vs
            .trainable_variables()
            .iter()
            .map(|var| var.abs().max().double_value(&[]))
            .fold(0.0, f64::max)
    }

    /// Get latent dimension
    pub fn latent_dim(&self) -> i64 {
        self.generator.config().latent_dim
    }

    /// Get number of features
    pub fn num_features(&self) -> i64 {
        self.generator.config().output_dim
    }
}
