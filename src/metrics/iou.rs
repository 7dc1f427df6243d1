//! Intersection over Union (IoU) calculation.

use crate::types::BoundingBox;

/// Calculate the Intersection over Union (IoU) between two bounding boxes.
///
/// IoU is defined as the area of intersection divided by the area of union.
/// The function is symmetric in its two arguments.
///
/// # Arguments
///
/// * `bbox1` - First bounding box
/// * `bbox2` - Second bounding box
///
/// # Returns
///
/// Returns a value between 0.0 (no overlap) and 1.0 (perfect overlap).
/// Boxes that only touch at an edge or corner have zero intersection area
/// and yield 0.0. Two coincident zero-area boxes have a zero union and also
/// yield 0.0 rather than dividing by zero.
///
/// # Example
///
/// ```
/// use detection_eval::metrics::iou::calculate_iou;
/// use detection_eval::types::BoundingBox;
///
/// let bbox1 = BoundingBox::new(0.0, 0.0, 2.0, 2.0);
/// let bbox2 = BoundingBox::new(1.0, 1.0, 3.0, 3.0);
/// let iou = calculate_iou(&bbox1, &bbox2);
/// assert!((iou - 1.0 / 7.0).abs() < 1e-10);
/// ```
pub fn calculate_iou(bbox1: &BoundingBox, bbox2: &BoundingBox) -> f64 {
    // Calculate intersection coordinates
    let x_left = bbox1.xmin.max(bbox2.xmin);
    let y_top = bbox1.ymin.max(bbox2.ymin);
    let x_right = bbox1.xmax.min(bbox2.xmax);
    let y_bottom = bbox1.ymax.min(bbox2.ymax);

    // No overlapping area
    if x_right <= x_left || y_bottom <= y_top {
        return 0.0;
    }

    let intersection_area = (x_right - x_left) * (y_bottom - y_top);

    let union_area = bbox1.area() + bbox2.area() - intersection_area;

    // Both boxes degenerate and coincident
    if union_area == 0.0 {
        return 0.0;
    }

    intersection_area / union_area
}

/// Calculate the IoU matrix between two sets of bounding boxes.
///
/// # Arguments
///
/// * `bboxes1` - First set of bounding boxes
/// * `bboxes2` - Second set of bounding boxes
///
/// # Returns
///
/// Returns a 2D vector where `result[i][j]` is the IoU between `bboxes1[i]`
/// and `bboxes2[j]`.
pub fn calculate_iou_matrix(bboxes1: &[BoundingBox], bboxes2: &[BoundingBox]) -> Vec<Vec<f64>> {
    bboxes1
        .iter()
        .map(|bbox1| {
            bboxes2
                .iter()
                .map(|bbox2| calculate_iou(bbox1, bbox2))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_boxes() {
        let bbox1 = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let bbox2 = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let iou = calculate_iou(&bbox1, &bbox2);
        assert!((iou - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_no_overlap() {
        let bbox1 = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let bbox2 = BoundingBox::new(20.0, 20.0, 30.0, 30.0);
        let iou = calculate_iou(&bbox1, &bbox2);
        assert_eq!(iou, 0.0);
    }

    #[test]
    fn test_touching_at_corner() {
        let bbox1 = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
        let bbox2 = BoundingBox::new(1.0, 1.0, 2.0, 2.0);
        let iou = calculate_iou(&bbox1, &bbox2);
        assert_eq!(iou, 0.0);
    }

    #[test]
    fn test_touching_at_edge() {
        let bbox1 = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
        let bbox2 = BoundingBox::new(1.0, 0.0, 2.0, 1.0);
        let iou = calculate_iou(&bbox1, &bbox2);
        assert_eq!(iou, 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        let bbox1 = BoundingBox::new(0.0, 0.0, 2.0, 2.0);
        let bbox2 = BoundingBox::new(1.0, 1.0, 3.0, 3.0);
        let iou = calculate_iou(&bbox1, &bbox2);

        // Intersection: 1x1 = 1
        // Union: 4 + 4 - 1 = 7
        assert!((iou - 1.0 / 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_symmetry() {
        let bbox1 = BoundingBox::new(0.0, 0.0, 5.0, 3.0);
        let bbox2 = BoundingBox::new(2.0, 1.0, 7.0, 6.0);
        assert_eq!(calculate_iou(&bbox1, &bbox2), calculate_iou(&bbox2, &bbox1));
    }

    #[test]
    fn test_degenerate_coincident_boxes() {
        let bbox1 = BoundingBox::new(5.0, 5.0, 5.0, 5.0);
        let bbox2 = BoundingBox::new(5.0, 5.0, 5.0, 5.0);
        let iou = calculate_iou(&bbox1, &bbox2);
        assert_eq!(iou, 0.0);
    }

    #[test]
    fn test_contained_box() {
        let outer = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let inner = BoundingBox::new(2.0, 2.0, 7.0, 7.0);
        let iou = calculate_iou(&outer, &inner);
        // Intersection: 25, union: 100
        assert!((iou - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_iou_matrix() {
        let bboxes1 = vec![
            BoundingBox::new(0.0, 0.0, 10.0, 10.0),
            BoundingBox::new(5.0, 5.0, 15.0, 15.0),
        ];
        let bboxes2 = vec![BoundingBox::new(0.0, 0.0, 10.0, 10.0)];

        let matrix = calculate_iou_matrix(&bboxes1, &bboxes2);
        assert_eq!(matrix.len(), 2);
        assert_eq!(matrix[0].len(), 1);
        assert!((matrix[0][0] - 1.0).abs() < 1e-10);
        assert!(matrix[1][0] > 0.0 && matrix[1][0] < 1.0);
    }

    #[test]
    fn test_iou_matrix_empty() {
        let bboxes = vec![BoundingBox::new(0.0, 0.0, 1.0, 1.0)];
        assert!(calculate_iou_matrix(&[], &bboxes).is_empty());
        assert_eq!(calculate_iou_matrix(&bboxes, &[]), vec![Vec::<f64>::new()]);
    }
}
