//! # detection-eval
//!
//! A Rust library for object-detection evaluation metrics over predicted and
//! ground-truth bounding boxes.
//!
//! This library provides implementations of the standard single-class
//! detection metrics:
//! - **IoU** (Intersection over Union) between axis-aligned boxes
//! - **Greedy one-to-one matching** of predictions to ground truth at a
//!   fixed IoU threshold
//! - **Precision** and **recall** from summed per-image confusion counts
//! - **Precision-recall curves** swept over a confidence threshold grid
//! - **mAP** (mean Average Precision) interpolated at fixed recall levels
//!
//! ## Features
//!
//! - Load ground-truth and prediction mappings from JSON
//! - Calculate IoU between bounding boxes, with explicit degenerate-box
//!   handling
//! - Match predictions to ground truth greedily in global IoU order, with
//!   deterministic tie-breaking
//! - Sweep 500 confidence thresholds into a full precision-recall curve
//! - Hand the curve to a pluggable sink and report mAP
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use detection_eval::evaluator::evaluate;
//! use detection_eval::sink::NullCurveSink;
//! use detection_eval::types::{BoundingBox, Dataset, Detections};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut ground_truths = BTreeMap::new();
//! ground_truths.insert(
//!     "image_1".to_string(),
//!     vec![BoundingBox::new(10.0, 10.0, 60.0, 60.0)],
//! );
//!
//! let mut predictions = BTreeMap::new();
//! predictions.insert(
//!     "image_1".to_string(),
//!     Detections::new(vec![BoundingBox::new(12.0, 11.0, 61.0, 62.0)], vec![0.9]),
//! );
//!
//! let dataset = Dataset::from_mappings(ground_truths, predictions)?;
//! let report = evaluate(&dataset, &mut NullCurveSink)?;
//! println!("mAP: {:.4}", report.mean_average_precision);
//! # Ok(())
//! # }
//! ```
//!
//! ## Input Format
//!
//! The loader expects two JSON mappings keyed by image identifier:
//!
//! ```json
//! { "image_1": [[10.0, 10.0, 60.0, 60.0]] }
//! ```
//!
//! for ground truth, and
//!
//! ```json
//! { "image_1": { "boxes": [[10.0, 10.0, 60.0, 60.0]], "scores": [0.9] } }
//! ```
//!
//! for predictions, with boxes as `[xmin, ymin, xmax, ymax]` corner arrays
//! and one confidence score per predicted box.

pub mod error;
pub mod types;
pub mod loader;
pub mod threshold;
pub mod metrics;
pub mod matching;
pub mod stats;
pub mod sink;
pub mod evaluator;

// Re-export commonly used types and functions
pub use error::{DetectionEvalError, Result};
pub use types::{
    BoundingBox, ConfusionCounts, Dataset, Detections, EvaluationReport, ImageSample, PrCurve,
};
pub use loader::{
    load_detections_from_file, load_detections_from_str, load_ground_truths_from_file,
    load_ground_truths_from_str,
};
pub use matching::{confusion_counts, match_boxes, Match};
pub use threshold::{filter_by_confidence, generate_threshold_range};
pub use evaluator::{evaluate, evaluate_at_iou, precision_recall_at_confidence, precision_recall_curve};
