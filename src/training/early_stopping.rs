//! Loss-plateau early stopping

/// Decision returned after observing an epoch loss
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopDecision {
    /// Keep training
    Continue,
    /// Patience exhausted
    Stop,
}

/// Tracks the best loss and how many epochs have passed without beating it
#[derive(Debug, Clone)]
pub struct EarlyStopping {
    patience: usize,
    best_loss: f64,
    epochs_no_improve: usize,
}

impl EarlyStopping {
    /// Create a controller that stops after `patience` non-improving epochs
    pub fn new(patience: usize) -> Self {
        Self {
            patience,
            best_loss: f64::INFINITY,
            epochs_no_improve: 0,
        }
    }

    /// Record an epoch loss
    ///
    /// A strictly lower loss resets the counter; anything else (ties and NaN
    /// included) counts as no improvement.
    pub fn observe(&mut self, loss: f64) -> StopDecision {
        if loss < self.best_loss {
            self.best_loss = loss;
            self.epochs_no_improve = 0;
        } else {
            self.epochs_no_improve += 1;
        }

        if self.epochs_no_improve >= self.patience {
            StopDecision::Stop
        } else {
            StopDecision::Continue
        }
    }

    /// Best loss seen so far (infinity before the first observation)
    pub fn best_loss(&self) -> f64 {
        self.best_loss
    }

    /// Consecutive epochs without improvement
    pub fn epochs_no_improve(&self) -> usize {
        self.epochs_no_improve
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_improvement_resets_counter() {
        let mut stopper = EarlyStopping::new(3);

        assert_eq!(stopper.observe(1.0), StopDecision::Continue);
        assert_eq!(stopper.observe(1.5), StopDecision::Continue);
        assert_eq!(stopper.epochs_no_improve(), 1);

        assert_eq!(stopper.observe(0.5), StopDecision::Continue);
        assert_eq!(stopper.epochs_no_improve(), 0);
        assert_eq!(stopper.best_loss(), 0.5);
    }

    #[test]
    fn test_stops_exactly_at_patience() {
        let mut stopper = EarlyStopping::new(3);
        stopper.observe(1.0);

        assert_eq!(stopper.observe(2.0), StopDecision::Continue);
        assert_eq!(stopper.observe(2.0), StopDecision::Continue);
        assert_eq!(stopper.observe(2.0), StopDecision::Stop);
        assert_eq!(stopper.epochs_no_improve(), 3);
    }

    #[test]
    fn test_tie_is_not_improvement() {
        let mut stopper = EarlyStopping::new(10);
        stopper.observe(1.0);
        stopper.observe(1.0);

        assert_eq!(stopper.epochs_no_improve(), 1);
    }

    #[test]
    fn test_nan_is_not_improvement() {
        let mut stopper = EarlyStopping::new(1);
        assert_eq!(stopper.observe(f64::NAN), StopDecision::Stop);
        assert!(stopper.best_loss().is_infinite());
    }
}
