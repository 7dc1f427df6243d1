//! Main evaluation orchestrator: dataset aggregation, confidence sweep, and
//! mean Average Precision.

use log::{debug, trace};
use rayon::prelude::*;

use crate::error::Result;
use crate::matching::{confusion_counts, match_boxes};
use crate::metrics::ap::calculate_mean_average_precision;
use crate::metrics::precision_recall::precision_recall;
use crate::sink::CurveSink;
use crate::stats::DatasetStats;
use crate::threshold::{filter_by_confidence, generate_threshold_range};
use crate::types::{ConfusionCounts, Dataset, EvaluationReport, PrCurve};

/// IoU threshold used by [`evaluate`].
pub const DEFAULT_IOU_THRESHOLD: f64 = 0.5;

/// Number of confidence thresholds in the full sweep grid.
pub const CONFIDENCE_SWEEP_STEPS: usize = 500;

/// Number of recall levels the mAP is interpolated at.
pub const MAP_RECALL_LEVELS: usize = 11;

/// Sum confusion counts over all images at one confidence threshold.
///
/// Each image is filtered, matched, and counted independently; the counts
/// are then reduced with a plain sum, so the result does not depend on the
/// parallel execution order.
fn dataset_confusion_counts(
    dataset: &Dataset,
    confidence_threshold: f64,
    iou_threshold: f64,
) -> Result<ConfusionCounts> {
    crate::threshold::validate_threshold(confidence_threshold)?;

    dataset
        .samples()
        .par_iter()
        .map(|(_, sample)| -> Result<ConfusionCounts> {
            let kept = filter_by_confidence(
                &sample.detections.boxes,
                &sample.detections.scores,
                confidence_threshold,
            )?;
            let matches = match_boxes(&kept, &sample.ground_truths, iou_threshold);
            Ok(confusion_counts(
                &matches,
                kept.len(),
                sample.ground_truths.len(),
            ))
        })
        .try_reduce(ConfusionCounts::default, |mut acc, counts| {
            acc.merge(&counts);
            Ok(acc)
        })
}

/// Compute the dataset-wide (precision, recall) pair at one confidence
/// threshold.
///
/// Predictions scoring below `confidence_threshold` are dropped before
/// matching at `iou_threshold`; counts are summed across all images. With no
/// surviving predictions the precision is 1.0 (vacuously precise); with no
/// ground truth the recall is 0.0.
///
/// # Arguments
///
/// * `dataset` - The dataset to evaluate
/// * `confidence_threshold` - Minimum prediction score (0.0 to 1.0)
/// * `iou_threshold` - Minimum IoU for a match
///
/// # Errors
///
/// Returns an error if `confidence_threshold` is outside [0.0, 1.0].
pub fn precision_recall_at_confidence(
    dataset: &Dataset,
    confidence_threshold: f64,
    iou_threshold: f64,
) -> Result<(f64, f64)> {
    let counts = dataset_confusion_counts(dataset, confidence_threshold, iou_threshold)?;
    Ok(precision_recall(&counts))
}

/// Build the precision-recall curve over a confidence threshold grid.
///
/// One (precision, recall) point per grid value, in grid order; no
/// deduplication, smoothing, or monotonic envelope is applied. Pass the grid
/// in descending order to get a curve with non-decreasing recall.
///
/// # Arguments
///
/// * `dataset` - The dataset to evaluate
/// * `iou_threshold` - Minimum IoU for a match, fixed for the whole sweep
/// * `confidence_thresholds` - The grid to sweep
///
/// # Errors
///
/// Returns an error if any grid value is outside [0.0, 1.0].
pub fn precision_recall_curve(
    dataset: &Dataset,
    iou_threshold: f64,
    confidence_thresholds: &[f64],
) -> Result<PrCurve> {
    let mut curve = PrCurve::with_capacity(confidence_thresholds.len());

    for &confidence_threshold in confidence_thresholds {
        let (precision, recall) =
            precision_recall_at_confidence(dataset, confidence_threshold, iou_threshold)?;
        trace!(
            "confidence {confidence_threshold:.4}: precision {precision:.4}, recall {recall:.4}"
        );
        curve.push(precision, recall);
    }

    Ok(curve)
}

/// Evaluate a dataset at a specific IoU threshold.
///
/// Sweeps the full confidence grid in descending order, hands the curve to
/// `sink`, and interpolates the mean Average Precision at the standard
/// recall levels.
///
/// # Arguments
///
/// * `dataset` - The dataset to evaluate
/// * `sink` - Destination for the computed curve
/// * `iou_threshold` - Minimum IoU for a match
///
/// # Errors
///
/// Returns an error if the sink fails to persist the curve.
pub fn evaluate_at_iou(
    dataset: &Dataset,
    sink: &mut dyn CurveSink,
    iou_threshold: f64,
) -> Result<EvaluationReport> {
    let stats = DatasetStats::collect(dataset);
    debug!("{}", stats.summary_string());

    // Descending grid: recall is non-decreasing along the stored curve.
    let mut confidence_thresholds = generate_threshold_range(0.0, 1.0, CONFIDENCE_SWEEP_STEPS)?;
    confidence_thresholds.reverse();

    let curve = precision_recall_curve(dataset, iou_threshold, &confidence_thresholds)?;
    sink.save_curve(&curve.precisions, &curve.recalls)?;

    let recall_levels = generate_threshold_range(0.0, 1.0, MAP_RECALL_LEVELS)?;
    let mean_average_precision = calculate_mean_average_precision(&curve, &recall_levels);
    debug!("mean average precision at IoU {iou_threshold}: {mean_average_precision:.4}");

    Ok(EvaluationReport {
        mean_average_precision,
        curve,
    })
}

/// Evaluate a dataset at the default IoU threshold of 0.5.
///
/// This is the top-level entry point: curve at IoU 0.5 handed to the sink,
/// mAP interpolated at 11 recall levels.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use detection_eval::evaluator::evaluate;
/// use detection_eval::sink::NullCurveSink;
/// use detection_eval::types::{BoundingBox, Dataset, Detections};
///
/// let mut gts = BTreeMap::new();
/// gts.insert("image_1".to_string(), vec![BoundingBox::new(0.0, 0.0, 10.0, 10.0)]);
/// let mut preds = BTreeMap::new();
/// preds.insert(
///     "image_1".to_string(),
///     Detections::new(vec![BoundingBox::new(0.0, 0.0, 10.0, 10.0)], vec![1.0]),
/// );
///
/// let dataset = Dataset::from_mappings(gts, preds).unwrap();
/// let report = evaluate(&dataset, &mut NullCurveSink).unwrap();
/// assert!((report.mean_average_precision - 1.0).abs() < 1e-10);
/// ```
pub fn evaluate(dataset: &Dataset, sink: &mut dyn CurveSink) -> Result<EvaluationReport> {
    evaluate_at_iou(dataset, sink, DEFAULT_IOU_THRESHOLD)
}
