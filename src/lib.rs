//! RSSI Indoor Localization
//!
//! Estimates a 2D target position from received-signal-strength (RSSI)
//! measurements taken by fixed anchors, including the calibration step that
//! turns raw RSSI into distance estimates.
//!
//! The pipeline runs in four stages:
//!
//! 1. [`PathLossCalibrator`] fits a log-distance [`PathLossModel`]
//!    (exponent `n`, residual `sigma`) from paired (distance, RSSI)
//!    calibration data, once per environment.
//! 2. [`processing::distance_matrix`] inverts the model to turn each
//!    measurement's RSSI readings into per-anchor distance estimates.
//! 3. [`MinMaxLocalizer`] (bounding boxes, N >= 2 anchors) or
//!    [`TrilaterationLocalizer`] (exact algebra, 3 anchors) turns the
//!    distance matrix into one position estimate per measurement.
//! 4. [`validation::accuracy`] scores the estimates against a known
//!    ground-truth position.
//!
//! The crate is a pure library: it consumes in-memory numeric data, performs
//! no measurement I/O, and keeps no state between invocations. The only
//! non-deterministic operation is the shadowed path-loss curve, which takes
//! a caller-supplied random source.

pub mod core;
pub mod calibration;
pub mod processing;
pub mod algorithms;
pub mod validation;
pub mod utils;

// Re-export commonly used types
pub use self::core::{
    Anchor, CalibrationSample, DistanceMatrix, GroundTruth, Measurement, PathLossModel,
    PositionEstimate, REFERENCE_DISTANCE, SPEED_OF_LIGHT,
};
pub use calibration::{predict_shadowed, predict_simplified, PathLossCalibrator, ReferenceRssi};
pub use processing::{distance_matrix, distances_from_rssi, rssi_to_distance};
pub use algorithms::{MinMaxLocalizer, TrilaterationLocalizer};
pub use validation::{
    mean_position_error, position_errors, DomainError, GeometryError, LocalizationError,
};
pub use utils::{ConfigError, SceneConfig, TargetPosition};
