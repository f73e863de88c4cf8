//! Generator network for the WGAN
//!
//! The Generator transforms standard-normal noise vectors into synthetic
//! feature rows. The final sigmoid keeps every output in [0, 1], the same
//! range as the min-max scaled training data.

use tch::{nn, nn::Module, Device, Kind, Tensor};

/// Generator network configuration
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Size of the latent noise vector
    pub latent_dim: i64,
    /// Number of output features (columns of the table)
    pub output_dim: i64,
    /// Width of the two hidden layers
    pub hidden_dims: [i64; 2],
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            latent_dim: 100,
            output_dim: 5,
            hidden_dims: [128, 256],
        }
    }
}

/// Generator network
///
/// Architecture:
/// 1. Linear -> ReLU
/// 2. Linear -> ReLU
/// 3. Linear -> Sigmoid
#[derive(Debug)]
pub struct Generator {
    config: GeneratorConfig,
    fc1: nn::Linear,
    fc2: nn::Linear,
    fc3: nn::Linear,
}

impl Generator {
    /// Create a new Generator network
    pub fn new(vs: &nn::Path, config: GeneratorConfig) -> Self {
        let [h1, h2] = config.hidden_dims;

        let fc1 = nn::linear(vs / "fc1", config.latent_dim, h1, Default::default());
        let fc2 = nn::linear(vs / "fc2", h1, h2, Default::default());
        let fc3 = nn::linear(vs / "fc3", h2, config.output_dim, Default::default());

        Self {
            config,
            fc1,
            fc2,
            fc3,
        }
    }

    /// Draw a batch of standard-normal latent vectors
    pub fn sample_noise(&self, batch_size: i64, device: Device) -> Tensor {
        Tensor::randn([batch_size, self.config.latent_dim], (Kind::Float, device))
    }

    /// Generate samples without tracking gradients
    pub fn generate(&self, noise: &Tensor) -> Tensor {
        tch::no_grad(|| self.forward(noise))
    }

    /// Get configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}

impl Module for Generator {
    /// Forward pass
    ///
    /// * `noise` - Tensor of shape (batch_size, latent_dim)
    ///
    /// Returns a tensor of shape (batch_size, output_dim) in [0, 1]
    fn forward(&self, noise: &Tensor) -> Tensor {
        noise
            .apply(&self.fc1)
            .relu()
            .apply(&self.fc2)
            .relu()
            .apply(&self.fc3)
            .sigmoid()
    }
}
