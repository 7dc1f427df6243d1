//! JSON loading utilities for ground-truth and prediction mappings.
//!
//! The wire format mirrors what the collaborating box source produces:
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
//! for predictions. Boxes are `[xmin, ymin, xmax, ymax]` corner arrays.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{DetectionEvalError, Result};
use crate::types::{BoundingBox, Detections};

/// Load a ground-truth mapping from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if any box has
/// unordered corners.
///
/// # Example
///
/// ```no_run
/// use detection_eval::loader::load_ground_truths_from_file;
///
/// let ground_truths = load_ground_truths_from_file("ground_truth.json").unwrap();
/// println!("Loaded {} images", ground_truths.len());
/// ```
pub fn load_ground_truths_from_file<P: AsRef<Path>>(
    path: P,
) -> Result<BTreeMap<String, Vec<BoundingBox>>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mapping: BTreeMap<String, Vec<BoundingBox>> = serde_json::from_reader(reader)?;

    validate_ground_truths(&mapping)?;

    Ok(mapping)
}

/// Load a ground-truth mapping from a JSON string.
///
/// # Errors
///
/// Returns an error if the JSON cannot be parsed or if any box has unordered
/// corners.
///
/// # Example
///
/// ```
/// use detection_eval::loader::load_ground_truths_from_str;
///
/// let json = r#"{ "image_1": [[0.0, 0.0, 10.0, 10.0]] }"#;
/// let ground_truths = load_ground_truths_from_str(json).unwrap();
/// assert_eq!(ground_truths["image_1"].len(), 1);
/// ```
pub fn load_ground_truths_from_str(json_str: &str) -> Result<BTreeMap<String, Vec<BoundingBox>>> {
    let mapping: BTreeMap<String, Vec<BoundingBox>> = serde_json::from_str(json_str)?;
    validate_ground_truths(&mapping)?;
    Ok(mapping)
}

/// Load a prediction mapping from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if any box has
/// unordered corners. Score/box count mismatches are caught later, when the
/// two mappings are combined into a dataset.
pub fn load_detections_from_file<P: AsRef<Path>>(
    path: P,
) -> Result<BTreeMap<String, Detections>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mapping: BTreeMap<String, Detections> = serde_json::from_reader(reader)?;

    validate_detections(&mapping)?;

    Ok(mapping)
}

/// Load a prediction mapping from a JSON string.
///
/// # Errors
///
/// Returns an error if the JSON cannot be parsed or if any box has unordered
/// corners.
///
/// # Example
///
/// ```
/// use detection_eval::loader::load_detections_from_str;
///
/// let json = r#"{ "image_1": { "boxes": [[0.0, 0.0, 10.0, 10.0]], "scores": [0.9] } }"#;
/// let detections = load_detections_from_str(json).unwrap();
/// assert_eq!(detections["image_1"].len(), 1);
/// ```
pub fn load_detections_from_str(json_str: &str) -> Result<BTreeMap<String, Detections>> {
    let mapping: BTreeMap<String, Detections> = serde_json::from_str(json_str)?;
    validate_detections(&mapping)?;
    Ok(mapping)
}

fn validate_ground_truths(mapping: &BTreeMap<String, Vec<BoundingBox>>) -> Result<()> {
    for (image_id, boxes) in mapping {
        validate_boxes(image_id, boxes)?;
    }
    Ok(())
}

fn validate_detections(mapping: &BTreeMap<String, Detections>) -> Result<()> {
    for (image_id, detections) in mapping {
        validate_boxes(image_id, &detections.boxes)?;
    }
    Ok(())
}

fn validate_boxes(image_id: &str, boxes: &[BoundingBox]) -> Result<()> {
    for (idx, bbox) in boxes.iter().enumerate() {
        if !bbox.is_valid() {
            return Err(DetectionEvalError::InvalidBoundingBox(format!(
                "Image `{image_id}`, box {idx}: corners out of order ({bbox:?})"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_ground_truths() {
        let json = r#"{
            "image_1": [[10.0, 10.0, 60.0, 60.0], [100.0, 100.0, 150.0, 150.0]],
            "image_2": []
        }"#;

        let mapping = load_ground_truths_from_str(json).unwrap();
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping["image_1"].len(), 2);
        assert!(mapping["image_2"].is_empty());
        assert_eq!(mapping["image_1"][0], BoundingBox::new(10.0, 10.0, 60.0, 60.0));
    }

    #[test]
    fn test_load_detections() {
        let json = r#"{
            "image_1": {
                "boxes": [[10.0, 10.0, 60.0, 60.0]],
                "scores": [0.87]
            }
        }"#;

        let mapping = load_detections_from_str(json).unwrap();
        assert_eq!(mapping["image_1"].boxes.len(), 1);
        assert_eq!(mapping["image_1"].scores, vec![0.87]);
    }

    #[test]
    fn test_invalid_json() {
        assert!(load_ground_truths_from_str("{ not json").is_err());
        assert!(load_detections_from_str("[]").is_err());
    }

    #[test]
    fn test_wrong_box_arity() {
        let json = r#"{ "image_1": [[10.0, 10.0, 60.0]] }"#;
        assert!(load_ground_truths_from_str(json).is_err());
    }

    #[test]
    fn test_unordered_corners_rejected() {
        let json = r#"{ "image_1": [[60.0, 10.0, 10.0, 60.0]] }"#;
        let result = load_ground_truths_from_str(json);
        assert!(matches!(
            result,
            Err(DetectionEvalError::InvalidBoundingBox(_))
        ));
    }

    #[test]
    fn test_degenerate_box_accepted() {
        let json = r#"{ "image_1": [[5.0, 5.0, 5.0, 5.0]] }"#;
        let mapping = load_ground_truths_from_str(json).unwrap();
        assert_eq!(mapping["image_1"][0].area(), 0.0);
    }
}
