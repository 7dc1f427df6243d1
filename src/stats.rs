//! Dataset statistics collected before evaluation.

use serde::{Deserialize, Serialize};

use crate::types::Dataset;

/// Summary counts for an evaluation dataset.
///
/// Collected once from a validated dataset and logged by the evaluator so a
/// run's inputs can be sanity-checked from the log alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    /// Number of images in the dataset
    pub images: usize,

    /// Total number of ground-truth boxes
    pub ground_truth_boxes: usize,

    /// Total number of predicted boxes
    pub predicted_boxes: usize,

    /// Number of images with no predictions
    pub images_without_predictions: usize,

    /// Number of images with no ground-truth boxes
    pub images_without_ground_truth: usize,
}

impl DatasetStats {
    /// Collect statistics from a dataset.
    pub fn collect(dataset: &Dataset) -> Self {
        let mut stats = Self {
            images: dataset.len(),
            ..Self::default()
        };

        for sample in dataset.samples().values() {
            stats.ground_truth_boxes += sample.ground_truths.len();
            stats.predicted_boxes += sample.detections.len();
            if sample.detections.is_empty() {
                stats.images_without_predictions += 1;
            }
            if sample.ground_truths.is_empty() {
                stats.images_without_ground_truth += 1;
            }
        }

        stats
    }

    /// Get a formatted one-line summary of the statistics.
    pub fn summary_string(&self) -> String {
        format!(
            "DatasetStats {{ images: {}, ground_truth_boxes: {}, predicted_boxes: {}, empty_predictions: {}, empty_ground_truth: {} }}",
            self.images,
            self.ground_truth_boxes,
            self.predicted_boxes,
            self.images_without_predictions,
            self.images_without_ground_truth
        )
    }
}
