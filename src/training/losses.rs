//! Loss functions for WGAN training

use tch::{Kind, Tensor};

/// Wasserstein loss for the generator
///
/// Generator loss: -E[C(G(z))]
///
/// # Arguments
///
/// * `fake_output` - Critic scores on generated samples
///
/// # Returns
///
/// Scalar loss tensor
pub fn generator_loss(fake_output: &Tensor) -> Tensor {
    -fake_output.mean(Kind::Float)
}

/// Wasserstein loss for the critic
///
/// Critic loss: E[C(G(z))] - E[C(x)]
///
/// Lower is better for the critic: real rows should score above fakes.
pub fn critic_loss(real_output: &Tensor, fake_output: &Tensor) -> Tensor {
    fake_output.mean(Kind::Float) - real_output.mean(Kind::Float)
}
