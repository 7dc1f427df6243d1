//! Interpolated-precision mean Average Precision (mAP).

use crate::types::PrCurve;

/// Interpolate precision at a set of recall levels.
///
/// For each level `r`, the interpolated precision is the maximum precision
/// among curve points whose recall is at least `r`. A point with recall
/// exactly 0 has no true positives behind it and supports no level. Levels
/// that no point supports contribute 0.
///
/// # Arguments
///
/// * `recall_levels` - Recall levels to interpolate at (typically evenly spaced in [0, 1])
/// * `precisions` - Precision values of the curve points
/// * `recalls` - Recall values of the curve points, index-aligned with `precisions`
///
/// # Returns
///
/// Returns one interpolated precision per recall level.
pub fn interpolated_precision_at(
    recall_levels: &[f64],
    precisions: &[f64],
    recalls: &[f64],
) -> Vec<f64> {
    recall_levels
        .iter()
        .map(|&level| {
            precisions
                .iter()
                .zip(recalls.iter())
                .filter(|&(_, &recall)| recall >= level && recall > 0.0)
                .map(|(&precision, _)| precision)
                .fold(0.0f64, f64::max)
        })
        .collect()
}

/// Calculate the mean Average Precision of a precision-recall curve.
///
/// Interpolates precision at each of the given recall levels and returns the
/// arithmetic mean of the interpolated values.
///
/// # Example
///
/// ```
/// use detection_eval::metrics::ap::calculate_mean_average_precision;
/// use detection_eval::types::PrCurve;
///
/// let curve = PrCurve {
///     precisions: vec![1.0; 5],
///     recalls: vec![0.2, 0.4, 0.6, 0.8, 1.0],
/// };
/// let levels: Vec<f64> = (0..11).map(|i| i as f64 / 10.0).collect();
/// let map = calculate_mean_average_precision(&curve, &levels);
/// assert!((map - 1.0).abs() < 1e-10);
/// ```
pub fn calculate_mean_average_precision(curve: &PrCurve, recall_levels: &[f64]) -> f64 {
    if recall_levels.is_empty() || curve.is_empty() {
        return 0.0;
    }

    let interpolated = interpolated_precision_at(recall_levels, &curve.precisions, &curve.recalls);

    interpolated.iter().sum::<f64>() / interpolated.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recall_levels() -> Vec<f64> {
        (0..11).map(|i| f64::from(i) / 10.0).collect()
    }

    #[test]
    fn test_perfect_curve() {
        let curve = PrCurve {
            precisions: vec![1.0; 4],
            recalls: vec![0.25, 0.5, 0.75, 1.0],
        };
        let map = calculate_mean_average_precision(&curve, &recall_levels());
        assert!((map - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_curve() {
        let map = calculate_mean_average_precision(&PrCurve::default(), &recall_levels());
        assert_eq!(map, 0.0);
    }

    #[test]
    fn test_zero_recall_points_support_nothing() {
        // A detector that never recalls anything: precision is vacuously 1
        // at every threshold, but no recall level is supported.
        let curve = PrCurve {
            precisions: vec![1.0; 3],
            recalls: vec![0.0; 3],
        };
        let map = calculate_mean_average_precision(&curve, &recall_levels());
        assert_eq!(map, 0.0);
    }

    #[test]
    fn test_unreached_levels_contribute_zero() {
        // Recall tops out at 0.5: levels 0.0..=0.5 take the max precision
        // among qualifying points, levels 0.6..=1.0 contribute 0.
        let curve = PrCurve {
            precisions: vec![1.0, 0.8],
            recalls: vec![0.25, 0.5],
        };
        let interpolated =
            interpolated_precision_at(&recall_levels(), &curve.precisions, &curve.recalls);
        assert_eq!(interpolated.len(), 11);
        assert!((interpolated[0] - 1.0).abs() < 1e-10); // level 0.0
        assert!((interpolated[2] - 1.0).abs() < 1e-10); // level 0.2
        assert!((interpolated[5] - 0.8).abs() < 1e-10); // level 0.5
        assert_eq!(interpolated[6], 0.0); // level 0.6
        assert_eq!(interpolated[10], 0.0); // level 1.0

        let map = calculate_mean_average_precision(&curve, &recall_levels());
        let expected = (1.0 + 1.0 + 1.0 + 0.8 + 0.8 + 0.8) / 11.0;
        assert!((map - expected).abs() < 1e-10);
    }

    #[test]
    fn test_max_over_suffix() {
        // Precision recovers at higher recall; interpolation takes the max
        // over all points at or beyond each level.
        let curve = PrCurve {
            precisions: vec![0.5, 0.9],
            recalls: vec![0.3, 0.6],
        };
        let interpolated =
            interpolated_precision_at(&recall_levels(), &curve.precisions, &curve.recalls);
        assert!((interpolated[1] - 0.9).abs() < 1e-10); // level 0.1
        assert!((interpolated[4] - 0.9).abs() < 1e-10); // level 0.4
        assert_eq!(interpolated[7], 0.0); // level 0.7
    }

    #[test]
    fn test_empty_levels() {
        let curve = PrCurve {
            precisions: vec![1.0],
            recalls: vec![1.0],
        };
        assert_eq!(calculate_mean_average_precision(&curve, &[]), 0.0);
    }
}
