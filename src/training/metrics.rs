//! Training metrics for monitoring WGAN progress

use serde::{Deserialize, Serialize};

/// Per-epoch loss history
///
/// Each entry holds the losses of the final mini-batch of that epoch, which
/// is also what early stopping looks at.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingMetrics {
    /// Generator losses per epoch
    pub gen_losses: Vec<f64>,
    /// Critic losses per epoch
    pub critic_losses: Vec<f64>,
    /// (gen_loss + critic_loss) / 2 per epoch
    pub avg_losses: Vec<f64>,
}

impl TrainingMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record epoch losses, returning the averaged loss
    pub fn record_epoch(&mut self, gen_loss: f64, critic_loss: f64) -> f64 {
        let avg = (gen_loss + critic_loss) / 2.0;
        self.gen_losses.push(gen_loss);
        self.critic_losses.push(critic_loss);
        self.avg_losses.push(avg);
        avg
    }

    /// Get number of recorded epochs
    pub fn num_epochs(&self) -> usize {
        self.gen_losses.len()
    }

    /// Get latest generator loss
    pub fn latest_gen_loss(&self) -> Option<f64> {
        self.gen_losses.last().copied()
    }

    /// Get latest critic loss
    pub fn latest_critic_loss(&self) -> Option<f64> {
        self.critic_losses.last().copied()
    }

    /// Lowest averaged loss over all epochs
    pub fn best_avg_loss(&self) -> Option<f64> {
        self.avg_losses.iter().copied().reduce(f64::min)
    }
}
