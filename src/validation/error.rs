//! Error classification for the localization core
//!
//! Two kinds of failure exist: invalid numeric input ([`DomainError`]) and
//! degenerate anchor geometry ([`GeometryError`]). Both are detected eagerly
//! at the point of violation and propagated to the caller; the math is
//! deterministic, so nothing is retried and no partial results are returned.

use std::fmt;

use serde::Serialize;

/// Invalid numeric input to a calibration, conversion or localization routine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DomainError {
    /// A calibration or prediction distance was zero or negative
    NonPositiveDistance { index: usize, value: f64 },
    /// Path-loss exponent of zero makes the RSSI inversion divide by zero
    ZeroPathLossExponent,
    /// Paired input sequences differ in length
    LengthMismatch { distances: usize, rssi: usize },
    /// An operation received an empty input sequence
    EmptyInput { what: &'static str },
    /// A measurement row carries no reading for one of the run's anchors
    MissingReading { anchor_id: String, sample: usize },
    /// Per-anchor distance columns differ in length
    RaggedDistances { anchor_id: String, expected: usize, actual: usize },
    /// No distance column exists for one of the run's anchors
    MissingAnchorColumn { anchor_id: String },
    /// Too few calibration samples for the chosen reference-RSSI strategy
    InsufficientSamples { required: usize, available: usize },
    /// Too few anchors for the chosen localizer
    TooFewAnchors { required: usize, available: usize },
    /// Free-space reference RSSI needs a positive operating frequency
    NonPositiveFrequency { value: f64 },
    /// Every calibration distance sits at the reference distance, so the
    /// path-loss exponent is unidentifiable
    UnidentifiableExponent,
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NonPositiveDistance { index, value } => {
                write!(f, "distance at index {} is not positive: {}", index, value)
            }
            DomainError::ZeroPathLossExponent => {
                write!(f, "path-loss exponent is zero; RSSI cannot be inverted to a distance")
            }
            DomainError::LengthMismatch { distances, rssi } => {
                write!(
                    f,
                    "distance and RSSI sequences differ in length: {} vs {}",
                    distances, rssi
                )
            }
            DomainError::EmptyInput { what } => write!(f, "empty input: {}", what),
            DomainError::MissingReading { anchor_id, sample } => {
                write!(f, "measurement {} has no RSSI reading for anchor {}", sample, anchor_id)
            }
            DomainError::RaggedDistances { anchor_id, expected, actual } => {
                write!(
                    f,
                    "distance column for anchor {} has {} samples, expected {}",
                    anchor_id, actual, expected
                )
            }
            DomainError::MissingAnchorColumn { anchor_id } => {
                write!(f, "no distance column for anchor {}", anchor_id)
            }
            DomainError::InsufficientSamples { required, available } => {
                write!(
                    f,
                    "calibration needs at least {} samples, got {}",
                    required, available
                )
            }
            DomainError::TooFewAnchors { required, available } => {
                write!(f, "localizer needs at least {} anchors, got {}", required, available)
            }
            DomainError::NonPositiveFrequency { value } => {
                write!(f, "operating frequency must be positive, got {}", value)
            }
            DomainError::UnidentifiableExponent => {
                write!(
                    f,
                    "all calibration distances equal the reference distance; \
                     the path-loss exponent cannot be identified"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}

/// Degenerate anchor configuration leading to a singular linear system
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GeometryError {
    /// The three trilateration anchors are (nearly) collinear
    CollinearAnchors { determinant: f64 },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::CollinearAnchors { determinant } => {
                write!(
                    f,
                    "degenerate anchor geometry: anchors are collinear (system determinant {:e})",
                    determinant
                )
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// Union of both failure kinds, for operations that can fail either way
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LocalizationError {
    Domain(DomainError),
    Geometry(GeometryError),
}

impl fmt::Display for LocalizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocalizationError::Domain(e) => e.fmt(f),
            LocalizationError::Geometry(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for LocalizationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LocalizationError::Domain(e) => Some(e),
            LocalizationError::Geometry(e) => Some(e),
        }
    }
}

impl From<DomainError> for LocalizationError {
    fn from(e: DomainError) -> Self {
        LocalizationError::Domain(e)
    }
}

impl From<GeometryError> for LocalizationError {
    fn from(e: GeometryError) -> Self {
        LocalizationError::Geometry(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_anchor() {
        let err = DomainError::MissingReading { anchor_id: "AP2".to_string(), sample: 7 };
        let msg = err.to_string();
        assert!(msg.contains("AP2"));
        assert!(msg.contains('7'));
    }

    #[test]
    fn conversion_preserves_the_variant() {
        let err: LocalizationError =
            GeometryError::CollinearAnchors { determinant: 0.0 }.into();
        match err {
            LocalizationError::Geometry(GeometryError::CollinearAnchors { determinant }) => {
                assert_eq!(determinant, 0.0)
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }
}
