//! Weighted ranking of decompose-and-pack results
//!
//! Each result is graded relative to the best bounding box and the best
//! part count among all results; the weighted sum ranks the results in
//! descending order. Ties keep input order.

use crate::io::configuration::{DEFAULT_BOUNDING_BOX_WEIGHT, DEFAULT_NUM_OF_PARTS_WEIGHT};
use crate::io::error::{invalid_parameter, Result};

/// Relative weights of the two grading criteria
///
/// The weights must be non-negative and sum to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraderWeights {
    /// Weight of the bounding-box criterion
    pub bounding_box: f64,
    /// Weight of the part-count criterion
    pub num_of_parts: f64,
}

impl Default for GraderWeights {
    fn default() -> Self {
        Self {
            bounding_box: DEFAULT_BOUNDING_BOX_WEIGHT,
            num_of_parts: DEFAULT_NUM_OF_PARTS_WEIGHT,
        }
    }
}

impl GraderWeights {
    /// Validate the weights
    ///
    /// # Errors
    ///
    /// Returns an error if either weight is negative or the weights do
    /// not sum to 1.
    pub fn validate(&self) -> Result<()> {
        if self.bounding_box < 0.0 || self.num_of_parts < 0.0 {
            return Err(invalid_parameter(
                "weights",
                &format!("({}, {})", self.bounding_box, self.num_of_parts),
                &"weights must be non-negative",
            ));
        }
        if ((self.bounding_box + self.num_of_parts) - 1.0).abs() > 1e-9 {
            return Err(invalid_parameter(
                "weights",
                &format!("({}, {})", self.bounding_box, self.num_of_parts),
                &"weights must sum to 1",
            ));
        }
        Ok(())
    }
}

/// Grades for each result: weighted sum of the best-to-own ratios of
/// bounding box and part count
pub fn grades(bounding_boxes: &[u64], part_counts: &[usize], weights: &GraderWeights) -> Vec<f64> {
    let Some(&min_box) = bounding_boxes.iter().min() else {
        return Vec::new();
    };
    let Some(&min_parts) = part_counts.iter().min() else {
        return Vec::new();
    };

    bounding_boxes
        .iter()
        .zip(part_counts)
        .map(|(&bounding_box, &parts)| {
            let box_grade = if bounding_box == 0 {
                1.0
            } else {
                min_box as f64 / bounding_box as f64
            };
            let parts_grade = if parts == 0 {
                1.0
            } else {
                min_parts as f64 / parts as f64
            };
            weights.bounding_box * box_grade + weights.num_of_parts * parts_grade
        })
        .collect()
}

/// Result indices ordered by descending grade, ties in input order
pub fn rank(bounding_boxes: &[u64], part_counts: &[usize], weights: &GraderWeights) -> Vec<usize> {
    let graded = grades(bounding_boxes, part_counts, weights);
    let mut indices: Vec<usize> = (0..graded.len()).collect();
    // Stable sort keeps equal grades in input order.
    indices.sort_by(|&a, &b| graded[b].total_cmp(&graded[a]));
    indices
}
