//! Path-loss model calibration

pub mod path_loss;

pub use path_loss::{predict_shadowed, predict_simplified, PathLossCalibrator, ReferenceRssi};
