//! Min-max (bounding-box intersection) localization
//!
//! Each anchor's distance estimate bounds the target inside a square around
//! the anchor. Intersecting the squares per axis gives the tightest upper
//! bound (smallest of the per-anchor maxima) and the loosest lower bound
//! (largest of the per-anchor minima); the estimate is the midpoint of the
//! resulting box.
//!
//! Bounds are intersected strictly per sample. Mixing bounds from different
//! measurements would intersect boxes that describe different instants and
//! invalidate the estimate, so no cross-sample pooling happens here.

use crate::core::{Anchor, DistanceMatrix, PositionEstimate};
use crate::validation::DomainError;

/// Bounding-box intersection position estimator for N >= 2 anchors
#[derive(Debug, Clone, Copy, Default)]
pub struct MinMaxLocalizer;

impl MinMaxLocalizer {
    pub fn new() -> Self {
        Self
    }

    /// Estimate one position per sample from per-anchor distance estimates.
    ///
    /// Every anchor must have a distance column of the same non-empty length.
    pub fn estimate(
        &self,
        anchors: &[Anchor],
        distances: &DistanceMatrix,
    ) -> Result<Vec<PositionEstimate>, DomainError> {
        if anchors.len() < 2 {
            return Err(DomainError::TooFewAnchors { required: 2, available: anchors.len() });
        }
        let columns = super::anchor_columns(anchors, distances)?;
        let samples = columns[0].len();

        let mut estimates = Vec::with_capacity(samples);
        for s in 0..samples {
            let (mut x_upper, mut x_lower) = (f64::INFINITY, f64::NEG_INFINITY);
            let (mut y_upper, mut y_lower) = (f64::INFINITY, f64::NEG_INFINITY);
            for (anchor, column) in anchors.iter().zip(&columns) {
                let d = column[s];
                x_upper = x_upper.min(anchor.x + d);
                x_lower = x_lower.max(anchor.x - d);
                y_upper = y_upper.min(anchor.y + d);
                y_lower = y_lower.max(anchor.y - d);
            }
            estimates.push(PositionEstimate::new(
                (x_upper + x_lower) / 2.0,
                (y_upper + y_lower) / 2.0,
            ));
        }
        Ok(estimates)
    }
}
