//! Scene configuration for a localization run
//!
//! Everything the measurement scripts used to hardcode per data-set case
//! (anchor layout, true target position, operating frequency, path-loss
//! parameters) is explicit, validated configuration here. The core stays
//! free of process-wide state; a driver builds or loads one [`SceneConfig`]
//! per run and passes its pieces into the calibration and localization
//! calls.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Anchor, GroundTruth, PathLossModel};

/// Scene description for one localization run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Fixed anchors, at least two, with unique ids
    pub anchors: Vec<Anchor>,
    /// True target position for the run
    pub ground_truth: GroundTruth,
    /// Operating frequency (Hz)
    pub frequency_hz: f64,
    /// Previously fitted path-loss model, if calibration already ran
    pub path_loss: Option<PathLossModel>,
}

/// Standard target placements of the square-cell measurement layout,
/// relative to a cell of side `d` with anchors at `(0,0)`, `(0,d)`, `(d,d)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetPosition {
    /// Midpoint of the far edge: `(d/2, d)`
    FarEdgeMidpoint,
    /// Off-center point: `(d/4, 3d/4)`
    OffCenter,
    /// Cell center: `(d/2, d/2)`
    Center,
    /// Midpoint of the near edge: `(d/2, 0)`
    NearEdgeMidpoint,
}

impl TargetPosition {
    /// Coordinates of this placement in a cell of side `d`.
    pub fn coordinates(&self, d: f64) -> GroundTruth {
        match self {
            TargetPosition::FarEdgeMidpoint => GroundTruth::new(d / 2.0, d),
            TargetPosition::OffCenter => GroundTruth::new(d / 4.0, 3.0 * d / 4.0),
            TargetPosition::Center => GroundTruth::new(d / 2.0, d / 2.0),
            TargetPosition::NearEdgeMidpoint => GroundTruth::new(d / 2.0, 0.0),
        }
    }
}

impl SceneConfig {
    /// The standard three-anchor square cell of side `d`: anchors AP1..AP3
    /// at `(0,0)`, `(0,d)`, `(d,d)` with the target at one of the standard
    /// placements.
    pub fn square_cell(d: f64, target: TargetPosition, frequency_hz: f64) -> Self {
        Self {
            anchors: vec![
                Anchor::new("AP1", 0.0, 0.0),
                Anchor::new("AP2", 0.0, d),
                Anchor::new("AP3", d, d),
            ],
            ground_truth: target.coordinates(d),
            frequency_hz,
            path_loss: None,
        }
    }

    /// Parse a scene from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json)
            .map_err(|e| ConfigError::Parse { message: e.to_string() })
    }

    /// Load and validate a scene from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io { message: e.to_string() })?;
        let config = Self::from_json(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the scene as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse { message: e.to_string() })
    }

    /// Check the scene is usable for a localization run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.anchors.len() < 2 {
            return Err(ConfigError::TooFewAnchors { available: self.anchors.len() });
        }
        let mut seen = HashSet::new();
        for anchor in &self.anchors {
            if !seen.insert(anchor.id.as_str()) {
                return Err(ConfigError::DuplicateAnchorId { id: anchor.id.clone() });
            }
            if !anchor.x.is_finite() || !anchor.y.is_finite() {
                return Err(ConfigError::InvalidParameter {
                    parameter: format!("anchor {} position", anchor.id),
                    reason: "coordinates must be finite".to_string(),
                });
            }
        }
        if !self.ground_truth.x.is_finite() || !self.ground_truth.y.is_finite() {
            return Err(ConfigError::InvalidParameter {
                parameter: "ground_truth".to_string(),
                reason: "coordinates must be finite".to_string(),
            });
        }
        if !self.frequency_hz.is_finite() || self.frequency_hz <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "frequency_hz".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        if let Some(model) = &self.path_loss {
            if model.n == 0.0 {
                return Err(ConfigError::InvalidParameter {
                    parameter: "path_loss.n".to_string(),
                    reason: "path-loss exponent must be non-zero".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Scene configuration failures
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Configuration file could not be read
    Io { message: String },
    /// JSON could not be parsed or serialized
    Parse { message: String },
    /// A parameter value is out of range
    InvalidParameter { parameter: String, reason: String },
    /// Two anchors share an id
    DuplicateAnchorId { id: String },
    /// Fewer than two anchors configured
    TooFewAnchors { available: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { message } => write!(f, "config I/O error: {}", message),
            ConfigError::Parse { message } => write!(f, "config parse error: {}", message),
            ConfigError::InvalidParameter { parameter, reason } => {
                write!(f, "invalid config parameter {}: {}", parameter, reason)
            }
            ConfigError::DuplicateAnchorId { id } => {
                write!(f, "duplicate anchor id: {}", id)
            }
            ConfigError::TooFewAnchors { available } => {
                write!(f, "scene needs at least 2 anchors, got {}", available)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
