//! Basic evaluation example demonstrating core functionality.

use detection_eval::evaluator::evaluate;
use detection_eval::matching::match_boxes;
use detection_eval::metrics::iou::calculate_iou;
use detection_eval::sink::JsonCurveSink;
use detection_eval::types::{BoundingBox, Dataset};
use detection_eval::{load_detections_from_str, load_ground_truths_from_str};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Detection Evaluation Example ===\n");

    // Example 1: IoU Calculation
    println!("1. IoU Calculation");
    let bbox1 = BoundingBox::new(10.0, 10.0, 60.0, 60.0);
    let bbox2 = BoundingBox::new(30.0, 30.0, 80.0, 80.0);
    let iou = calculate_iou(&bbox1, &bbox2);
    println!("   IoU between overlapping boxes: {:.4}", iou);
    println!();

    // Example 2: Load ground truth and predictions
    println!("2. Loading Box Mappings");
    let ground_truth_json = r#"{
        "image_1": [[100.0, 100.0, 300.0, 250.0], [350.0, 200.0, 450.0, 320.0]],
        "image_2": [[50.0, 50.0, 150.0, 150.0]]
    }"#;
    let predictions_json = r#"{
        "image_1": {
            "boxes": [[102.0, 98.0, 305.0, 252.0], [360.0, 210.0, 455.0, 330.0]],
            "scores": [0.95, 0.71]
        },
        "image_2": {
            "boxes": [[55.0, 48.0, 152.0, 155.0], [400.0, 400.0, 500.0, 500.0]],
            "scores": [0.88, 0.30]
        }
    }"#;

    let ground_truths = load_ground_truths_from_str(ground_truth_json)?;
    let predictions = load_detections_from_str(predictions_json)?;
    println!("   Loaded {} images of ground truth", ground_truths.len());
    println!("   Loaded {} images of predictions", predictions.len());
    println!();

    // Example 3: Per-image matching
    println!("3. Greedy Matching (image_1, IoU threshold 0.5)");
    let matches = match_boxes(
        &predictions["image_1"].boxes,
        &ground_truths["image_1"],
        0.5,
    );
    for m in &matches {
        println!(
            "   prediction {} -> ground truth {} (IoU {:.4})",
            m.prediction, m.ground_truth, m.iou
        );
    }
    println!();

    // Example 4: Full evaluation
    println!("4. Full Evaluation at IoU 0.5");
    let dataset = Dataset::from_mappings(ground_truths, predictions)?;
    let mut sink = JsonCurveSink::new("precision_recall_curve.json");
    let report = evaluate(&dataset, &mut sink)?;
    println!("   Curve points: {}", report.curve.len());
    println!("   Curve saved to precision_recall_curve.json");
    println!("   Mean average precision: {:.4}", report.mean_average_precision);

    Ok(())
}
