//! Log-distance path-loss model fitting
//!
//! Fits the path-loss exponent `n` and residual standard deviation `sigma`
//! of the simplified log-distance model
//!
//! ```text
//! rssi(d) = k - 10 n log10(d)
//! ```
//!
//! by minimizing `F(n) = sum_i (m_i - k + 10 n log10(d_i))^2`. The zero of
//! `dF/dn` is linear in `n`, so the fit is a closed-form ratio of two sums
//! and bit-reproducible; no iterative optimization is involved.

use std::f64::consts::PI;

use log::debug;
use rand::Rng;
use rand_distr::StandardNormal;

use crate::core::{CalibrationSample, PathLossModel, REFERENCE_DISTANCE, SPEED_OF_LIGHT};
use crate::validation::DomainError;

/// Convention for the reference RSSI `k` at the 1 m reference distance
///
/// Two incompatible conventions are in experimental use; they disagree
/// numerically and are deliberately kept as distinct, named strategies so a
/// scenario always states which one it was scored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceRssi {
    /// `k` is read directly from the second calibration sample's RSSI.
    /// Requires at least two samples.
    #[default]
    SecondSample,
    /// `k` is the free-space path loss at the reference distance,
    /// `-20 log10(4 pi f / c)`, derived from the operating frequency.
    FreeSpace,
}

/// Fits a [`PathLossModel`] from paired (distance, RSSI) calibration data
#[derive(Debug, Clone, Copy, Default)]
pub struct PathLossCalibrator {
    /// Reference-RSSI convention used for `k`
    pub reference: ReferenceRssi,
}

impl PathLossCalibrator {
    pub fn new(reference: ReferenceRssi) -> Self {
        Self { reference }
    }

    /// Fit the path-loss exponent and residual standard deviation.
    ///
    /// `distances` and `rssi` are paired, equal-length, non-empty sequences;
    /// every distance must be strictly positive. The same input always
    /// produces the same model.
    pub fn fit(
        &self,
        distances: &[f64],
        rssi: &[f64],
        frequency: f64,
    ) -> Result<PathLossModel, DomainError> {
        if distances.len() != rssi.len() {
            return Err(DomainError::LengthMismatch {
                distances: distances.len(),
                rssi: rssi.len(),
            });
        }
        if distances.is_empty() {
            return Err(DomainError::EmptyInput { what: "calibration samples" });
        }
        check_distances(distances)?;

        let k = self.reference_rssi(rssi, frequency)?;

        // dF/dn = sum 2 L_i (m_i - k + n L_i) = 0, with L_i = 10 log10(d_i),
        // gives n = -sum L_i (m_i - k) / sum L_i^2.
        let mut cross = 0.0;
        let mut squared = 0.0;
        for (&d, &m) in distances.iter().zip(rssi) {
            let l = 10.0 * d.log10();
            cross += l * (m - k);
            squared += l * l;
        }
        if squared == 0.0 {
            return Err(DomainError::UnidentifiableExponent);
        }
        let n = -cross / squared;

        let residual_sq: f64 = distances
            .iter()
            .zip(rssi)
            .map(|(&d, &m)| {
                let r = m - k + 10.0 * n * d.log10();
                r * r
            })
            .sum();
        let sigma = (residual_sq / distances.len() as f64).sqrt();

        debug!(
            "fitted path-loss model: k={:.2} dBm, n={:.4}, sigma={:.4} dB ({} samples)",
            k,
            n,
            sigma,
            distances.len()
        );

        Ok(PathLossModel { k, n, sigma, frequency })
    }

    /// Fit from [`CalibrationSample`] records instead of paired slices.
    pub fn fit_samples(
        &self,
        samples: &[CalibrationSample],
        frequency: f64,
    ) -> Result<PathLossModel, DomainError> {
        let distances: Vec<f64> = samples.iter().map(|s| s.distance).collect();
        let rssi: Vec<f64> = samples.iter().map(|s| s.rssi).collect();
        self.fit(&distances, &rssi, frequency)
    }

    fn reference_rssi(&self, rssi: &[f64], frequency: f64) -> Result<f64, DomainError> {
        match self.reference {
            ReferenceRssi::SecondSample => {
                if rssi.len() < 2 {
                    return Err(DomainError::InsufficientSamples {
                        required: 2,
                        available: rssi.len(),
                    });
                }
                Ok(rssi[1])
            }
            ReferenceRssi::FreeSpace => {
                if frequency <= 0.0 {
                    return Err(DomainError::NonPositiveFrequency { value: frequency });
                }
                Ok(-20.0 * (4.0 * PI * REFERENCE_DISTANCE * frequency / SPEED_OF_LIGHT).log10())
            }
        }
    }
}

/// Evaluate the simplified path-loss curve `k - 10 n log10(d)` elementwise.
///
/// Pure; the same model and distances always produce the same curve.
pub fn predict_simplified(
    model: &PathLossModel,
    distances: &[f64],
) -> Result<Vec<f64>, DomainError> {
    check_distances(distances)?;
    Ok(distances
        .iter()
        .map(|d| model.k - 10.0 * model.n * d.log10())
        .collect())
}

/// Evaluate the shadowed path-loss curve: the simplified curve plus one
/// independent zero-mean Gaussian draw of standard deviation `model.sigma`
/// per distance.
///
/// Not pure; the caller injects the random source, so seeding it makes the
/// curve reproducible.
pub fn predict_shadowed<R: Rng + ?Sized>(
    model: &PathLossModel,
    distances: &[f64],
    rng: &mut R,
) -> Result<Vec<f64>, DomainError> {
    let simplified = predict_simplified(model, distances)?;
    Ok(simplified
        .into_iter()
        .map(|p| {
            let noise: f64 = rng.sample(StandardNormal);
            p + model.sigma * noise
        })
        .collect())
}

fn check_distances(distances: &[f64]) -> Result<(), DomainError> {
    for (index, &value) in distances.iter().enumerate() {
        if value <= 0.0 {
            return Err(DomainError::NonPositiveDistance { index, value });
        }
    }
    Ok(())
}
