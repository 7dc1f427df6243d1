//! Confidence score thresholding utilities.

use crate::error::{DetectionEvalError, Result};
use crate::types::BoundingBox;

/// Filter predicted boxes by confidence score threshold.
///
/// Keeps the boxes whose index-aligned score is at or above `threshold`,
/// preserving their relative order. The two slices must be the same length;
/// dataset construction enforces this for every image.
///
/// # Arguments
///
/// * `boxes` - Predicted boxes
/// * `scores` - Confidence scores, index-aligned with `boxes`
/// * `threshold` - Minimum confidence score (0.0 to 1.0)
///
/// # Errors
///
/// Returns an error if the threshold is outside [0.0, 1.0].
///
/// # Example
///
/// ```
/// use detection_eval::threshold::filter_by_confidence;
/// use detection_eval::types::BoundingBox;
///
/// let boxes = vec![
///     BoundingBox::new(0.0, 0.0, 10.0, 10.0),
///     BoundingBox::new(20.0, 20.0, 30.0, 30.0),
/// ];
/// let scores = vec![0.9, 0.3];
///
/// let kept = filter_by_confidence(&boxes, &scores, 0.5).unwrap();
/// assert_eq!(kept.len(), 1);
/// ```
pub fn filter_by_confidence(
    boxes: &[BoundingBox],
    scores: &[f64],
    threshold: f64,
) -> Result<Vec<BoundingBox>> {
    validate_threshold(threshold)?;
    debug_assert_eq!(boxes.len(), scores.len());

    Ok(boxes
        .iter()
        .zip(scores.iter())
        .filter(|&(_, &score)| score >= threshold)
        .map(|(&bbox, _)| bbox)
        .collect())
}

/// Generate a range of evenly spaced threshold values.
///
/// Both endpoints are included.
///
/// # Arguments
///
/// * `start` - Starting threshold value (inclusive)
/// * `end` - Ending threshold value (inclusive)
/// * `steps` - Number of threshold values to generate
///
/// # Errors
///
/// Returns an error if `steps` is 0, either endpoint is outside [0.0, 1.0],
/// or `start > end`.
///
/// # Example
///
/// ```
/// use detection_eval::threshold::generate_threshold_range;
///
/// let thresholds = generate_threshold_range(0.0, 1.0, 11).unwrap();
/// assert_eq!(thresholds.len(), 11);
/// assert_eq!(thresholds[0], 0.0);
/// assert_eq!(thresholds[10], 1.0);
/// ```
pub fn generate_threshold_range(start: f64, end: f64, steps: usize) -> Result<Vec<f64>> {
    if steps == 0 {
        return Err(DetectionEvalError::InvalidThreshold(
            "Number of steps must be greater than 0".to_string(),
        ));
    }

    validate_threshold(start)?;
    validate_threshold(end)?;

    if start > end {
        return Err(DetectionEvalError::InvalidThreshold(format!(
            "Start threshold ({start}) must be <= end threshold ({end})"
        )));
    }

    if steps == 1 {
        return Ok(vec![start]);
    }

    // Pin the last value to `end` so accumulated rounding cannot push it
    // outside the requested range.
    let step_size = (end - start) / (steps - 1) as f64;
    Ok((0..steps)
        .map(|i| {
            if i == steps - 1 {
                end
            } else {
                start + step_size * i as f64
            }
        })
        .collect())
}

/// Validate that a threshold is in the valid range [0.0, 1.0].
pub(crate) fn validate_threshold(threshold: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(DetectionEvalError::InvalidThreshold(format!(
            "Threshold must be between 0.0 and 1.0, got {threshold}"
        )));
    }
    Ok(())
}
