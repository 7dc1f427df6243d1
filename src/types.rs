//! Core data types for boxes, datasets, and evaluation results.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{DetectionEvalError, Result};

/// An axis-aligned bounding box in corner format.
///
/// Serialized as a 4-element array `[xmin, ymin, xmax, ymax]`. A box is
/// well-formed when `xmin <= xmax` and `ymin <= ymax`; zero-area boxes are
/// legal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct BoundingBox {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl BoundingBox {
    /// Create a new bounding box from its corner coordinates.
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self { xmin, ymin, xmax, ymax }
    }

    /// Get the width of the bounding box.
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    /// Get the height of the bounding box.
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Get the area of the bounding box.
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Check that the corners are ordered (`xmin <= xmax`, `ymin <= ymax`).
    pub fn is_valid(&self) -> bool {
        self.xmin <= self.xmax && self.ymin <= self.ymax
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from(corners: [f64; 4]) -> Self {
        Self::new(corners[0], corners[1], corners[2], corners[3])
    }
}

impl From<BoundingBox> for [f64; 4] {
    fn from(bbox: BoundingBox) -> Self {
        [bbox.xmin, bbox.ymin, bbox.xmax, bbox.ymax]
    }
}

/// Predicted boxes for one image with their index-aligned confidence scores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Detections {
    pub boxes: Vec<BoundingBox>,
    pub scores: Vec<f64>,
}

impl Detections {
    /// Create a new detection set.
    pub fn new(boxes: Vec<BoundingBox>, scores: Vec<f64>) -> Self {
        Self { boxes, scores }
    }

    /// Number of predicted boxes.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Whether the detection set is empty.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

/// Ground truth and predictions for a single image.
#[derive(Debug, Clone)]
pub struct ImageSample {
    pub ground_truths: Vec<BoundingBox>,
    pub detections: Detections,
}

/// A read-only evaluation dataset keyed by image identifier.
///
/// Built once from the two collaborator mappings and never mutated
/// afterwards. Construction fails fast on an image identifier present in
/// only one of the mappings, or on a score sequence whose length differs
/// from its box count.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    samples: BTreeMap<String, ImageSample>,
}

impl Dataset {
    /// Build a dataset from the ground-truth and prediction mappings.
    ///
    /// # Errors
    ///
    /// Returns an error if an image identifier is missing from either
    /// mapping, or if a score sequence length does not match its box count.
    pub fn from_mappings(
        ground_truths: BTreeMap<String, Vec<BoundingBox>>,
        predictions: BTreeMap<String, Detections>,
    ) -> Result<Self> {
        for image_id in predictions.keys() {
            if !ground_truths.contains_key(image_id) {
                return Err(DetectionEvalError::MissingGroundTruth(image_id.clone()));
            }
        }

        let mut samples = BTreeMap::new();
        for (image_id, gt_boxes) in ground_truths {
            let detections = predictions
                .get(&image_id)
                .cloned()
                .ok_or_else(|| DetectionEvalError::MissingPredictions(image_id.clone()))?;

            if detections.boxes.len() != detections.scores.len() {
                return Err(DetectionEvalError::ScoreCountMismatch {
                    image_id,
                    boxes: detections.boxes.len(),
                    scores: detections.scores.len(),
                });
            }

            samples.insert(
                image_id,
                ImageSample {
                    ground_truths: gt_boxes,
                    detections,
                },
            );
        }

        Ok(Self { samples })
    }

    /// All samples, keyed by image identifier.
    pub fn samples(&self) -> &BTreeMap<String, ImageSample> {
        &self.samples
    }

    /// Number of images in the dataset.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the dataset contains no images.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Total number of ground-truth boxes across all images.
    pub fn total_ground_truths(&self) -> usize {
        self.samples.values().map(|s| s.ground_truths.len()).sum()
    }
}

/// True positive, false positive, and false negative tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionCounts {
    pub true_pos: usize,
    pub false_pos: usize,
    pub false_neg: usize,
}

impl ConfusionCounts {
    /// Create a new set of counts.
    pub fn new(true_pos: usize, false_pos: usize, false_neg: usize) -> Self {
        Self { true_pos, false_pos, false_neg }
    }

    /// Add another set of counts into this one.
    pub fn merge(&mut self, other: &ConfusionCounts) {
        self.true_pos += other.true_pos;
        self.false_pos += other.false_pos;
        self.false_neg += other.false_neg;
    }
}

/// A precision-recall curve: two equal-length sequences, one point per
/// confidence threshold, ordered by decreasing threshold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrCurve {
    pub precisions: Vec<f64>,
    pub recalls: Vec<f64>,
}

impl PrCurve {
    /// Create an empty curve with room for `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            precisions: Vec::with_capacity(capacity),
            recalls: Vec::with_capacity(capacity),
        }
    }

    /// Append one (precision, recall) point.
    pub fn push(&mut self, precision: f64, recall: f64) {
        self.precisions.push(precision);
        self.recalls.push(recall);
    }

    /// Number of points on the curve.
    pub fn len(&self) -> usize {
        self.precisions.len()
    }

    /// Whether the curve has no points.
    pub fn is_empty(&self) -> bool {
        self.precisions.is_empty()
    }
}

/// Result of a full dataset evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Mean Average Precision at the evaluation IoU threshold.
    pub mean_average_precision: f64,
    /// The precision-recall curve the mAP was interpolated from.
    pub curve: PrCurve,
}
