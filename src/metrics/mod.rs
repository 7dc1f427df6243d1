//! Metrics calculation modules for detection evaluation.

pub mod ap;
pub mod iou;
pub mod precision_recall;

pub use ap::{calculate_mean_average_precision, interpolated_precision_at};
pub use iou::{calculate_iou, calculate_iou_matrix};
pub use precision_recall::{calculate_precision, calculate_recall, precision_recall};
