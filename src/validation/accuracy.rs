//! Positioning accuracy against a known ground-truth point

use nalgebra::Vector2;

use crate::core::{GroundTruth, PositionEstimate};
use crate::validation::DomainError;

/// Per-sample Euclidean distance between each estimate and the true position.
pub fn position_errors(estimates: &[PositionEstimate], truth: &GroundTruth) -> Vec<f64> {
    estimates
        .iter()
        .map(|e| Vector2::new(e.x - truth.x, e.y - truth.y).norm())
        .collect()
}

/// Mean of the per-sample Euclidean distances.
///
/// This is the scalar conventionally reported as "MSE" in RSSI localization
/// experiments: the mean of the distances themselves, not of their squares.
/// That convention is kept so results stay numerically comparable with
/// published figures.
pub fn mean_position_error(
    estimates: &[PositionEstimate],
    truth: &GroundTruth,
) -> Result<f64, DomainError> {
    if estimates.is_empty() {
        return Err(DomainError::EmptyInput { what: "position estimates" });
    }
    let errors = position_errors(estimates, truth);
    Ok(errors.iter().sum::<f64>() / errors.len() as f64)
}
