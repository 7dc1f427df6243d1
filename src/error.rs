//! Error types for the detection-eval library.

use thiserror::Error;

/// Result type for detection-eval operations.
pub type Result<T> = std::result::Result<T, DetectionEvalError>;

/// Error types that can occur while building or evaluating a dataset.
#[derive(Error, Debug)]
pub enum DetectionEvalError {
    /// Error during JSON parsing or serialization.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error during I/O operations.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Invalid bounding box coordinates.
    #[error("Invalid bounding box: {0}")]
    InvalidBoundingBox(String),

    /// Score sequence length does not match the predicted box count.
    #[error("Image `{image_id}`: {scores} scores for {boxes} predicted boxes")]
    ScoreCountMismatch {
        image_id: String,
        boxes: usize,
        scores: usize,
    },

    /// Image present in the ground-truth mapping but absent from predictions.
    #[error("Image `{0}` has ground truth but no prediction entry")]
    MissingPredictions(String),

    /// Image present in the prediction mapping but absent from ground truth.
    #[error("Image `{0}` has predictions but no ground-truth entry")]
    MissingGroundTruth(String),

    /// Invalid confidence threshold or threshold range.
    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),
}
