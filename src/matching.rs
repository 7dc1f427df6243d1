//! Greedy one-to-one matching of predicted boxes against ground truth.

use log::trace;

use crate::metrics::iou::calculate_iou_matrix;
use crate::types::{BoundingBox, ConfusionCounts};

/// A matched (prediction, ground truth) pair with its IoU.
///
/// Indices refer to positions in the box slices handed to [`match_boxes`].
/// Within one image, each prediction index and each ground-truth index
/// appears in at most one match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match {
    pub prediction: usize,
    pub ground_truth: usize,
    pub iou: f64,
}

/// Match predicted boxes to ground-truth boxes for a single image.
///
/// Builds every (prediction, ground truth) pair with IoU at or above
/// `iou_threshold`, orders the pairs by IoU descending, and accepts them
/// greedily: a pair is taken only while both of its indices are still
/// unconsumed. The ordering is global over all pairs, not per ground truth,
/// so the highest-IoU pair always wins its indices.
///
/// A pair with IoU exactly 0 is never a candidate, so a zero threshold still
/// requires actual overlap. A threshold above 1.0 yields an empty match set
/// rather than an error, since callers sweep arbitrary thresholds.
///
/// # Arguments
///
/// * `predictions` - Predicted boxes for this image
/// * `ground_truths` - Ground-truth boxes for this image
/// * `iou_threshold` - Minimum IoU for a pair to be considered
///
/// # Returns
///
/// Returns the accepted matches in decreasing IoU order. Empty input on
/// either side produces an empty match set.
pub fn match_boxes(
    predictions: &[BoundingBox],
    ground_truths: &[BoundingBox],
    iou_threshold: f64,
) -> Vec<Match> {
    let iou_matrix = calculate_iou_matrix(predictions, ground_truths);

    let mut candidates: Vec<Match> = Vec::new();
    for (pred_idx, row) in iou_matrix.iter().enumerate() {
        for (gt_idx, &iou) in row.iter().enumerate() {
            if iou >= iou_threshold && iou > 0.0 {
                candidates.push(Match {
                    prediction: pred_idx,
                    ground_truth: gt_idx,
                    iou,
                });
            }
        }
    }

    // Highest IoU first; ties resolved by lower prediction index, then lower
    // ground-truth index, so the output is deterministic.
    candidates.sort_by(|a, b| {
        b.iou
            .partial_cmp(&a.iou)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.prediction.cmp(&b.prediction))
            .then_with(|| a.ground_truth.cmp(&b.ground_truth))
    });

    // Consumed indices are tracked positionally; the box arrays themselves
    // are never touched.
    let mut prediction_used = vec![false; predictions.len()];
    let mut ground_truth_used = vec![false; ground_truths.len()];
    let mut matches = Vec::new();

    for candidate in candidates {
        if prediction_used[candidate.prediction] || ground_truth_used[candidate.ground_truth] {
            continue;
        }
        prediction_used[candidate.prediction] = true;
        ground_truth_used[candidate.ground_truth] = true;
        trace!(
            "matched prediction {} to ground truth {} (IoU {:.4})",
            candidate.prediction,
            candidate.ground_truth,
            candidate.iou
        );
        matches.push(candidate);
    }

    matches
}

/// Derive confusion counts for one image from its match set.
///
/// `true_pos` is the number of matches, `false_pos` the unmatched
/// predictions, `false_neg` the unmatched ground truths. The identities
/// `true_pos + false_pos == P` and `true_pos + false_neg == G` hold by
/// construction.
///
/// # Arguments
///
/// * `matches` - Matches produced by [`match_boxes`]
/// * `num_predictions` - Number of predicted boxes the matches were drawn from
/// * `num_ground_truths` - Number of ground-truth boxes the matches were drawn from
pub fn confusion_counts(
    matches: &[Match],
    num_predictions: usize,
    num_ground_truths: usize,
) -> ConfusionCounts {
    let true_pos = matches.len();
    debug_assert!(true_pos <= num_predictions && true_pos <= num_ground_truths);

    ConfusionCounts {
        true_pos,
        false_pos: num_predictions - true_pos,
        false_neg: num_ground_truths - true_pos,
    }
}
