//! Critic (discriminator) network for the WGAN
//!
//! The critic maps a feature row to a single unbounded score. There is no
//! final sigmoid: the score approximates a Kantorovich potential, not a
//! probability.

use tch::{nn, nn::Module, Tensor};

/// Negative slope of the hidden activations
pub const LEAKY_SLOPE: f64 = 0.2;

/// Critic network configuration
#[derive(Debug, Clone)]
pub struct CriticConfig {
    /// Number of input features
    pub input_dim: i64,
    /// Width of the two hidden layers
    pub hidden_dims: [i64; 2],
}

impl Default for CriticConfig {
    fn default() -> Self {
        Self {
            input_dim: 5,
            hidden_dims: [256, 128],
        }
    }
}

/// Critic network
///
/// Architecture:
/// 1. Linear -> LeakyReLU(0.2)
/// 2. Linear -> LeakyReLU(0.2)
/// 3. Linear (1 output, no activation)
#[derive(Debug)]
pub struct Critic {
    config: CriticConfig,
    fc1: nn::Linear,
    fc2: nn::Linear,
    fc3: nn::Linear,
}

fn leaky_relu(xs: &Tensor) -> Tensor {
    xs.maximum(&(xs * LEAKY_SLOPE))
}

impl Critic {
    /// Create a new Critic network
    pub fn new(vs: &nn::Path, config: CriticConfig) -> Self {
        let [h1, h2] = config.hidden_dims;

        let fc1 = nn::linear(vs / "fc1", config.input_dim, h1, Default::default());
        let fc2 = nn::linear(vs / "fc2", h1, h2, Default::default());
        let fc3 = nn::linear(vs / "fc3", h2, 1, Default::default());

        Self {
            config,
            fc1,
            fc2,
            fc3,
        }
    }

    /// Score samples without tracking gradients
    pub fn score(&self, samples: &Tensor) -> Tensor {
        tch::no_grad(|| self.forward(samples))
    }

    /// Get configuration
    pub fn config(&self) -> &CriticConfig {
        &self.config
    }
}

impl Module for Critic {
    /// Forward pass
    ///
    /// * `input` - Tensor of shape (batch_size, input_dim)
    ///
    /// Returns a tensor of shape (batch_size, 1) with raw scores
    fn forward(&self, input: &Tensor) -> Tensor {
        let x = leaky_relu(&input.apply(&self.fc1));
        let x = leaky_relu(&x.apply(&self.fc2));
        x.apply(&self.fc3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tch::{nn::VarStore, Device, Kind};

    #[test]
    fn test_critic_output_shape() {
        let vs = VarStore::new(Device::Cpu);
        let critic = Critic::new(&vs.root(), CriticConfig::default());

        let input = Tensor::randn([4, 5], (Kind::Float, Device::Cpu));
        let output = critic.forward(&input);

        assert_eq!(output.size(), vec![4, 1]);
    }

    #[test]
    fn test_leaky_relu_slope() {
        let xs = Tensor::from_slice(&[-10.0f32, -1.0, 0.0, 2.0]);
        let ys = Vec::<f32>::try_from(&leaky_relu(&xs)).unwrap();

        assert_eq!(ys, vec![-2.0, -0.2, 0.0, 2.0]);
    }

    #[test]
    fn test_scores_are_unbounded() {
        let vs = VarStore::new(Device::Cpu);
        let critic = Critic::new(&vs.root(), CriticConfig::default());

        // Push every weight up so large inputs give scores well above 1
        tch::no_grad(|| {
            for mut var in vs.trainable_variables() {
                let _ = var.fill_(0.5);
            }
        });

        let input = Tensor::full([2, 5], 10.0, (Kind::Float, Device::Cpu));
        let scores = critic.score(&input);
        assert!(scores.min().double_value(&[]) > 1.0);
    }
}
