//! Precision and recall from confusion counts.
//!
//! Both functions pin down the degenerate-denominator conventions used
//! throughout a confidence sweep: a threshold that admits no predictions is
//! vacuously precise, and a dataset with no ground truth can never achieve
//! recall.

use crate::types::ConfusionCounts;

/// Calculate precision from confusion counts.
///
/// Precision = TP / (TP + FP). Returns **1.0** when there are no predictions
/// at all (TP + FP = 0).
///
/// # Example
///
/// ```
/// use detection_eval::metrics::precision_recall::calculate_precision;
///
/// assert_eq!(calculate_precision(8, 2), 0.8);
/// assert_eq!(calculate_precision(0, 0), 1.0);
/// ```
#[must_use]
pub fn calculate_precision(true_positives: usize, false_positives: usize) -> f64 {
    let denominator = true_positives + false_positives;
    if denominator == 0 {
        return 1.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let precision = (true_positives as f64) / (denominator as f64);

    debug_assert!(
        (0.0..=1.0).contains(&precision),
        "Precision must be between 0 and 1, got {precision}"
    );

    precision
}

/// Calculate recall from confusion counts.
///
/// Recall = TP / (TP + FN). Returns **0.0** when there is no ground truth
/// (TP + FN = 0).
///
/// # Example
///
/// ```
/// use detection_eval::metrics::precision_recall::calculate_recall;
///
/// assert_eq!(calculate_recall(8, 2), 0.8);
/// assert_eq!(calculate_recall(0, 0), 0.0);
/// ```
#[must_use]
pub fn calculate_recall(true_positives: usize, false_negatives: usize) -> f64 {
    let denominator = true_positives + false_negatives;
    if denominator == 0 {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let recall = (true_positives as f64) / (denominator as f64);

    debug_assert!(
        (0.0..=1.0).contains(&recall),
        "Recall must be between 0 and 1, got {recall}"
    );

    recall
}

/// Calculate the (precision, recall) pair for a set of confusion counts.
#[must_use]
pub fn precision_recall(counts: &ConfusionCounts) -> (f64, f64) {
    (
        calculate_precision(counts.true_pos, counts.false_pos),
        calculate_recall(counts.true_pos, counts.false_neg),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision_values() {
        assert!((calculate_precision(8, 2) - 0.8).abs() < 1e-10);
        assert!((calculate_precision(1, 3) - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_precision_no_predictions_is_one() {
        assert_eq!(calculate_precision(0, 0), 1.0);
    }

    #[test]
    fn test_precision_all_false_positives() {
        assert_eq!(calculate_precision(0, 5), 0.0);
    }

    #[test]
    fn test_recall_values() {
        assert!((calculate_recall(8, 3) - 8.0 / 11.0).abs() < 1e-10);
    }

    #[test]
    fn test_recall_no_ground_truth_is_zero() {
        assert_eq!(calculate_recall(0, 0), 0.0);
    }

    #[test]
    fn test_recall_all_missed() {
        assert_eq!(calculate_recall(0, 4), 0.0);
    }

    #[test]
    fn test_precision_recall_from_counts() {
        let counts = ConfusionCounts::new(8, 2, 3);
        let (precision, recall) = precision_recall(&counts);
        assert!((precision - 0.8).abs() < 1e-10);
        assert!((recall - 8.0 / 11.0).abs() < 1e-10);
    }
}
