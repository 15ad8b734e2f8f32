//! RSSI to distance conversion under a calibrated path-loss model
//!
//! Inverts the simplified log-distance model: `d = 10^((k - rssi) / (10 n))`.
//! The conversion is an exponential, so every produced distance is strictly
//! positive. No upper plausibility bound is applied; discarding physically
//! implausible distances is the caller's responsibility.

use log::debug;

use crate::core::{Anchor, DistanceMatrix, Measurement, PathLossModel};
use crate::validation::DomainError;

/// Convert a single RSSI reading to a distance estimate.
///
/// `k` is the reference RSSI at 1 m, `n` the path-loss exponent. Fails if
/// `n` is zero; pure otherwise, and strictly decreasing in `rssi` for
/// `n > 0`.
pub fn rssi_to_distance(k: f64, n: f64, rssi: f64) -> Result<f64, DomainError> {
    if n == 0.0 {
        return Err(DomainError::ZeroPathLossExponent);
    }
    Ok(10f64.powf((k - rssi) / (10.0 * n)))
}

/// Convert a sequence of RSSI readings under one model.
pub fn distances_from_rssi(
    model: &PathLossModel,
    rssi: &[f64],
) -> Result<Vec<f64>, DomainError> {
    rssi.iter().map(|&r| rssi_to_distance(model.k, model.n, r)).collect()
}

/// Build the per-anchor distance matrix for a localization run.
///
/// One distance column per anchor, one value per measurement, in measurement
/// order. Every measurement must carry a reading for every anchor; a missing
/// reading fails the whole run rather than producing a partial column.
pub fn distance_matrix(
    model: &PathLossModel,
    anchors: &[Anchor],
    measurements: &[Measurement],
) -> Result<DistanceMatrix, DomainError> {
    if anchors.is_empty() {
        return Err(DomainError::EmptyInput { what: "anchors" });
    }
    if measurements.is_empty() {
        return Err(DomainError::EmptyInput { what: "measurements" });
    }

    let mut matrix = DistanceMatrix::with_capacity(anchors.len());
    for anchor in anchors {
        let mut column = Vec::with_capacity(measurements.len());
        for (sample, measurement) in measurements.iter().enumerate() {
            let rssi = measurement.rssi(&anchor.id).ok_or_else(|| {
                DomainError::MissingReading { anchor_id: anchor.id.clone(), sample }
            })?;
            column.push(rssi_to_distance(model.k, model.n, rssi)?);
        }
        matrix.insert(anchor.id.clone(), column);
    }

    debug!(
        "distance matrix: {} anchors x {} samples (n={:.3})",
        anchors.len(),
        measurements.len(),
        model.n
    );
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(k: f64, n: f64) -> PathLossModel {
        PathLossModel { k, n, sigma: 0.0, frequency: 2.4e9 }
    }

    #[test]
    fn reference_rssi_maps_to_one_meter() {
        let d = rssi_to_distance(-49.0, 2.255, -49.0).unwrap();
        assert_eq!(d, 1.0);
    }

    #[test]
    fn conversion_round_trips() {
        let (k, n) = (-49.0, 2.255);
        for rssi in [-35.0, -49.0, -60.5, -72.0] {
            let d = rssi_to_distance(k, n, rssi).unwrap();
            let recovered = k - 10.0 * n * d.log10();
            assert!((recovered - rssi).abs() < 1e-9);
        }
    }

    #[test]
    fn strictly_decreasing_in_rssi_for_positive_exponent() {
        let (k, n) = (-49.0, 2.255);
        let near = rssi_to_distance(k, n, -45.0).unwrap();
        let far = rssi_to_distance(k, n, -65.0).unwrap();
        assert!(far > near);
        assert!(near > 0.0 && far > 0.0);
    }

    #[test]
    fn zero_exponent_is_rejected() {
        assert_eq!(
            rssi_to_distance(-49.0, 0.0, -60.0),
            Err(DomainError::ZeroPathLossExponent)
        );
    }

    #[test]
    fn vectorized_conversion_matches_scalar() {
        let m = model(-49.0, 2.255);
        let rssi = [-45.0, -49.0, -58.0];
        let distances = distances_from_rssi(&m, &rssi).unwrap();
        for (&r, &d) in rssi.iter().zip(&distances) {
            assert_eq!(d, rssi_to_distance(m.k, m.n, r).unwrap());
        }
    }

    #[test]
    fn matrix_has_one_column_per_anchor() {
        let anchors = vec![Anchor::new("AP1", 0.0, 0.0), Anchor::new("AP2", 0.0, 2.0)];
        let measurements = vec![
            Measurement::new().with_reading("AP1", -49.0).with_reading("AP2", -55.0),
            Measurement::new().with_reading("AP1", -52.0).with_reading("AP2", -51.0),
        ];

        let matrix = distance_matrix(&model(-49.0, 2.255), &anchors, &measurements).unwrap();
        assert_eq!(matrix.len(), 2);
        assert_eq!(matrix["AP1"].len(), 2);
        assert_eq!(matrix["AP1"][0], 1.0);
        assert!(matrix.values().flatten().all(|&d| d > 0.0));
    }

    #[test]
    fn missing_reading_fails_the_run() {
        let anchors = vec![Anchor::new("AP1", 0.0, 0.0), Anchor::new("AP2", 0.0, 2.0)];
        let measurements = vec![
            Measurement::new().with_reading("AP1", -49.0).with_reading("AP2", -55.0),
            Measurement::new().with_reading("AP1", -52.0),
        ];

        let err = distance_matrix(&model(-49.0, 2.255), &anchors, &measurements).unwrap_err();
        assert_eq!(err, DomainError::MissingReading { anchor_id: "AP2".to_string(), sample: 1 });
    }

    #[test]
    fn empty_inputs_are_rejected() {
        let anchors = vec![Anchor::new("AP1", 0.0, 0.0)];
        assert_eq!(
            distance_matrix(&model(-49.0, 2.255), &anchors, &[]),
            Err(DomainError::EmptyInput { what: "measurements" })
        );
        assert_eq!(
            distance_matrix(&model(-49.0, 2.255), &[], &[Measurement::new()]),
            Err(DomainError::EmptyInput { what: "anchors" })
        );
    }
}
