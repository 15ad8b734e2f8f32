//! Algebraic trilateration for exactly three anchors
//!
//! Subtracting the circle equations of anchor pairs (1,2) and (2,3) cancels
//! the quadratic terms and leaves a 2x2 linear system
//!
//! ```text
//! a x + b y = c,   a = -2 x_i + 2 x_j
//!                  b = -2 y_i + 2 y_j
//!                  c = r_i^2 - r_j^2 - x_i^2 + x_j^2 - y_i^2 + y_j^2
//! ```
//!
//! solved per sample by Cramer's rule. The determinant depends only on the
//! anchor coordinates, so degenerate geometry is detected once, before any
//! sample is processed.

use log::warn;
use nalgebra::Matrix2;

use crate::core::{Anchor, DistanceMatrix, PositionEstimate};
use crate::validation::{GeometryError, LocalizationError};

/// Exact-algebra position estimator for exactly three anchors
#[derive(Debug, Clone, Copy)]
pub struct TrilaterationLocalizer {
    /// Absolute determinant threshold below which the anchor layout is
    /// treated as collinear. Anchor coordinates are room-scale meters.
    pub collinearity_tolerance: f64,
}

impl Default for TrilaterationLocalizer {
    fn default() -> Self {
        Self { collinearity_tolerance: 1e-9 }
    }
}

impl TrilaterationLocalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Estimate one position per sample from per-anchor distance estimates.
    ///
    /// Noiseless distances are recovered exactly: the system is linear and
    /// solved in closed form. Collinear anchors make the system singular and
    /// fail with [`GeometryError::CollinearAnchors`] instead of yielding
    /// NaN or infinite coordinates.
    pub fn estimate(
        &self,
        anchors: &[Anchor; 3],
        distances: &DistanceMatrix,
    ) -> Result<Vec<PositionEstimate>, LocalizationError> {
        let columns = super::anchor_columns(anchors, distances)?;

        let (a1, b1) = pair_coefficients(&anchors[0], &anchors[1]);
        let (a2, b2) = pair_coefficients(&anchors[1], &anchors[2]);
        let system = Matrix2::new(a1, b1, a2, b2);
        let det = system.determinant();
        if det.abs() < self.collinearity_tolerance {
            warn!(
                "collinear anchor layout ({}, {}, {}): determinant {:e}",
                anchors[0].id, anchors[1].id, anchors[2].id, det
            );
            return Err(GeometryError::CollinearAnchors { determinant: det }.into());
        }

        let mut estimates = Vec::with_capacity(columns[0].len());
        for s in 0..columns[0].len() {
            let (r1, r2, r3) = (columns[0][s], columns[1][s], columns[2][s]);
            let c1 = pair_constant(&anchors[0], &anchors[1], r1, r2);
            let c2 = pair_constant(&anchors[1], &anchors[2], r2, r3);

            // Cramer's rule; the second denominator is the negated first.
            let x = (c1 * b2 - b1 * c2) / det;
            let y = (c1 * a2 - a1 * c2) / -det;
            estimates.push(PositionEstimate::new(x, y));
        }
        Ok(estimates)
    }
}

fn pair_coefficients(i: &Anchor, j: &Anchor) -> (f64, f64) {
    (-2.0 * i.x + 2.0 * j.x, -2.0 * i.y + 2.0 * j.y)
}

fn pair_constant(i: &Anchor, j: &Anchor, r_i: f64, r_j: f64) -> f64 {
    r_i * r_i - r_j * r_j - i.x * i.x + j.x * j.x - i.y * i.y + j.y * j.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::DomainError;

    fn euclidean(anchor: &Anchor, x: f64, y: f64) -> f64 {
        ((anchor.x - x).powi(2) + (anchor.y - y).powi(2)).sqrt()
    }

    fn matrix_for_target(anchors: &[Anchor; 3], x: f64, y: f64, samples: usize) -> DistanceMatrix {
        anchors
            .iter()
            .map(|a| (a.id.clone(), vec![euclidean(a, x, y); samples]))
            .collect()
    }

    fn square_anchors() -> [Anchor; 3] {
        [
            Anchor::new("AP1", 0.0, 0.0),
            Anchor::new("AP2", 0.0, 2.0),
            Anchor::new("AP3", 2.0, 2.0),
        ]
    }

    #[test]
    fn noiseless_distances_recover_the_target_exactly() {
        let anchors = square_anchors();
        let distances = matrix_for_target(&anchors, 1.0, 1.0, 1);

        let estimates = TrilaterationLocalizer::new().estimate(&anchors, &distances).unwrap();
        assert_eq!(estimates.len(), 1);
        assert_eq!(estimates[0], PositionEstimate::new(1.0, 1.0));
    }

    #[test]
    fn off_center_targets_are_recovered_too() {
        let anchors = square_anchors();
        let localizer = TrilaterationLocalizer::new();
        for &(x, y) in &[(0.5, 1.5), (1.0, 0.25), (1.7, 0.3)] {
            let distances = matrix_for_target(&anchors, x, y, 1);
            let estimate = localizer.estimate(&anchors, &distances).unwrap()[0];
            assert!((estimate.x - x).abs() < 1e-12, "x for target ({}, {})", x, y);
            assert!((estimate.y - y).abs() < 1e-12, "y for target ({}, {})", x, y);
        }
    }

    #[test]
    fn one_estimate_per_sample() {
        let anchors = square_anchors();
        let distances = matrix_for_target(&anchors, 1.0, 1.0, 5);
        let estimates = TrilaterationLocalizer::new().estimate(&anchors, &distances).unwrap();
        assert_eq!(estimates.len(), 5);
        assert!(estimates.iter().all(|e| *e == PositionEstimate::new(1.0, 1.0)));
    }

    #[test]
    fn collinear_anchors_error_instead_of_nan() {
        let anchors = [
            Anchor::new("AP1", 0.0, 0.0),
            Anchor::new("AP2", 1.0, 0.0),
            Anchor::new("AP3", 2.0, 0.0),
        ];
        let distances: DistanceMatrix = anchors
            .iter()
            .map(|a| (a.id.clone(), vec![1.0]))
            .collect();

        let err = TrilaterationLocalizer::new().estimate(&anchors, &distances).unwrap_err();
        match err {
            LocalizationError::Geometry(GeometryError::CollinearAnchors { determinant }) => {
                assert!(determinant.abs() < 1e-9)
            }
            other => panic!("expected geometry error, got {:?}", other),
        }
    }

    #[test]
    fn missing_column_is_a_domain_error() {
        let anchors = square_anchors();
        let mut distances = matrix_for_target(&anchors, 1.0, 1.0, 1);
        distances.remove("AP3");

        let err = TrilaterationLocalizer::new().estimate(&anchors, &distances).unwrap_err();
        assert_eq!(
            err,
            LocalizationError::Domain(DomainError::MissingAnchorColumn {
                anchor_id: "AP3".to_string()
            })
        );
    }

    #[test]
    fn noisy_distances_still_produce_finite_estimates() {
        let anchors = square_anchors();
        let mut distances = matrix_for_target(&anchors, 1.0, 1.0, 1);
        for column in distances.values_mut() {
            column[0] *= 1.07;
        }

        let estimates = TrilaterationLocalizer::new().estimate(&anchors, &distances).unwrap();
        assert!(estimates[0].x.is_finite());
        assert!(estimates[0].y.is_finite());
    }
}
