//! Classification metrics for real-vs-fake evaluation
//!
//! Labels and predictions are 0/1 integers: 1 = real, 0 = fake.

/// Threshold critic scores into binary predictions
///
/// A score strictly above `threshold` is predicted real (1); a score equal to
/// the threshold is predicted fake (0).
pub fn threshold_predictions(scores: &[f64], threshold: f64) -> Vec<u8> {
    scores.iter().map(|&s| u8::from(s > threshold)).collect()
}

/// Fraction of predictions equal to the labels
///
/// Returns 0.0 for empty input.
///
/// # Panics
///
/// Panics if `y_true` and `y_pred` differ in length.
pub fn accuracy(y_true: &[u8], y_pred: &[u8]) -> f64 {
    assert_eq!(y_true.len(), y_pred.len(), "Arrays must have same length");

    if y_true.is_empty() {
        return 0.0;
    }

    let correct = y_true.iter().zip(y_pred).filter(|(t, p)| t == p).count();
    correct as f64 / y_true.len() as f64
}

/// Confusion matrix values (TP, FP, FN, TN) for `positive` as the positive class
fn confusion_matrix_values(y_true: &[u8], y_pred: &[u8], positive: u8) -> (usize, usize, usize, usize) {
    let mut tp = 0;
    let mut fp = 0;
    let mut fn_ = 0;
    let mut tn = 0;

    for (&t, &p) in y_true.iter().zip(y_pred) {
        match (t == positive, p == positive) {
            (true, true) => tp += 1,
            (false, true) => fp += 1,
            (true, false) => fn_ += 1,
            (false, false) => tn += 1,
        }
    }

    (tp, fp, fn_, tn)
}

/// Precision for `positive`: TP / (TP + FP), 0.0 when nothing was predicted positive
pub fn precision(y_true: &[u8], y_pred: &[u8], positive: u8) -> f64 {
    let (tp, fp, _, _) = confusion_matrix_values(y_true, y_pred, positive);
    if tp + fp == 0 {
        0.0
    } else {
        tp as f64 / (tp + fp) as f64
    }
}

/// Recall for `positive`: TP / (TP + FN), 0.0 when there are no positives
pub fn recall(y_true: &[u8], y_pred: &[u8], positive: u8) -> f64 {
    let (tp, _, fn_, _) = confusion_matrix_values(y_true, y_pred, positive);
    if tp + fn_ == 0 {
        0.0
    } else {
        tp as f64 / (tp + fn_) as f64
    }
}

/// F1 score for `positive`
///
/// F1 = 2 * (precision * recall) / (precision + recall), 0.0 when both are 0
///
/// # Panics
///
/// Panics if `y_true` and `y_pred` differ in length.
pub fn f1_score(y_true: &[u8], y_pred: &[u8], positive: u8) -> f64 {
    assert_eq!(y_true.len(), y_pred.len(), "Arrays must have same length");

    let p = precision(y_true, y_pred, positive);
    let r = recall(y_true, y_pred, positive);

    if p + r == 0.0 {
        0.0
    } else {
        2.0 * p * r / (p + r)
    }
}

/// Support-weighted mean of the per-class F1 scores
///
/// Only classes present in `y_true` contribute, each weighted by how many
/// true labels it has.
///
/// # Panics
///
/// Panics if `y_true` and `y_pred` differ in length.
pub fn weighted_f1_score(y_true: &[u8], y_pred: &[u8]) -> f64 {
    assert_eq!(y_true.len(), y_pred.len(), "Arrays must have same length");

    if y_true.is_empty() {
        return 0.0;
    }

    let mut total = 0.0;
    for class in [0u8, 1u8] {
        let support = y_true.iter().filter(|&&t| t == class).count();
        if support > 0 {
            total += support as f64 * f1_score(y_true, y_pred, class);
        }
    }

    total / y_true.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_zero_is_fake() {
        let preds = threshold_predictions(&[-1.0, 0.0, 1e-9, 3.0], 0.0);
        assert_eq!(preds, vec![0, 0, 1, 1]);
    }

    #[test]
    #[should_panic(expected = "Arrays must have same length")]
    fn test_accuracy_length_mismatch_panics() {
        accuracy(&[1, 0], &[1]);
    }

    #[test]
    #[should_panic(expected = "Arrays must have same length")]
    fn test_weighted_f1_length_mismatch_panics() {
        weighted_f1_score(&[1, 0, 1], &[1, 0]);
    }

    #[test]
    fn test_accuracy() {
        assert_eq!(accuracy(&[1, 1, 0, 0], &[1, 0, 0, 0]), 0.75);
        assert_eq!(accuracy(&[], &[]), 0.0);
    }

    #[test]
    fn test_perfect_classification() {
        let real_labels = vec![1u8; 10];
        let fake_labels = vec![0u8; 10];
        let real_preds = vec![1u8; 10];
        let fake_preds = vec![0u8; 10];

        assert_eq!(accuracy(&real_labels, &real_preds), 1.0);
        assert_eq!(accuracy(&fake_labels, &fake_preds), 1.0);
        assert_eq!(f1_score(&fake_labels, &fake_preds, 0), 1.0);

        let y_true: Vec<u8> = [real_labels, fake_labels].concat();
        let y_pred: Vec<u8> = [real_preds, fake_preds].concat();
        assert_eq!(weighted_f1_score(&y_true, &y_pred), 1.0);
    }

    #[test]
    fn test_f1_score() {
        // class 1: tp=2, fp=1, fn=1 -> p=2/3, r=2/3, f1=2/3
        let y_true = [1, 1, 1, 0, 0];
        let y_pred = [1, 1, 0, 1, 0];
        assert!((f1_score(&y_true, &y_pred, 1) - 2.0 / 3.0).abs() < 1e-12);

        // class 0: tp=1, fp=1, fn=1 -> f1=0.5
        assert!((f1_score(&y_true, &y_pred, 0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_weighted_f1_score() {
        let y_true = [1, 1, 1, 0, 0];
        let y_pred = [1, 1, 0, 1, 0];
        // (3 * 2/3 + 2 * 0.5) / 5 = 0.6
        assert!((weighted_f1_score(&y_true, &y_pred) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_ill_defined_f1_is_zero() {
        // No true and no predicted positives for class 1
        assert_eq!(f1_score(&[0, 0], &[0, 0], 1), 0.0);
    }

    #[test]
    fn test_all_wrong() {
        let y_true = [1, 1, 0, 0];
        let y_pred = [0, 0, 1, 1];
        assert_eq!(accuracy(&y_true, &y_pred), 0.0);
        assert_eq!(weighted_f1_score(&y_true, &y_pred), 0.0);
    }
}
