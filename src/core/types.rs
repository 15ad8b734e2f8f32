//! Core data types for RSSI localization

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Fixed access point with a known 2D position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

impl Anchor {
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self { id: id.into(), x, y }
    }
}

/// One timestamp's RSSI readings, keyed by anchor id
///
/// A complete measurement carries a reading for every anchor of the run;
/// rows with missing readings are expected to be dropped by the caller
/// before they reach the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Measurement {
    pub readings: HashMap<String, f64>,
}

impl Measurement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reading(mut self, anchor_id: impl Into<String>, rssi: f64) -> Self {
        self.readings.insert(anchor_id.into(), rssi);
        self
    }

    pub fn rssi(&self, anchor_id: &str) -> Option<f64> {
        self.readings.get(anchor_id).copied()
    }
}

/// One calibration pair: transmitter-receiver distance and measured RSSI
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationSample {
    /// Distance from transmitter to receiver (m), strictly positive
    pub distance: f64,
    /// Measured RSSI at that distance (dBm)
    pub rssi: f64,
}

impl CalibrationSample {
    pub fn new(distance: f64, rssi: f64) -> Self {
        Self { distance, rssi }
    }
}

/// Fitted log-distance path-loss model
///
/// Only ever constructed complete by [`crate::PathLossCalibrator::fit`]:
/// `k`, `n` and `sigma` are always consistent with each other, so the
/// shadowed prediction curve can never observe a half-fitted model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathLossModel {
    /// Reference RSSI at the 1 m reference distance (dBm)
    pub k: f64,
    /// Path-loss exponent
    pub n: f64,
    /// Residual standard deviation of the fit (dB)
    pub sigma: f64,
    /// Operating frequency (Hz)
    pub frequency: f64,
}

/// Estimated 2D target position, one per measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionEstimate {
    pub x: f64,
    pub y: f64,
}

impl PositionEstimate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Known true target position for an entire run
///
/// The measurement scenario assumes a stationary target sampled repeatedly,
/// so a single reference point covers every measurement of the run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundTruth {
    pub x: f64,
    pub y: f64,
}

impl GroundTruth {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Per-anchor distance estimates, one entry per anchor id, one value per sample
///
/// Produced by [`crate::processing::distance_matrix`]; every distance is
/// strictly positive since the RSSI conversion is an exponential.
pub type DistanceMatrix = HashMap<String, Vec<f64>>;
