//! Position estimation algorithms
//!
//! Two independent estimators over the same per-anchor distance matrix:
//! bounding-box intersection ([`min_max`]) and algebraic trilateration
//! ([`trilateration`]). They share no state and may disagree; the caller
//! picks one (or runs both and compares).

pub mod min_max;
pub mod trilateration;

pub use min_max::MinMaxLocalizer;
pub use trilateration::TrilaterationLocalizer;

use crate::core::{Anchor, DistanceMatrix};
use crate::validation::DomainError;

/// Resolve the distance column of every anchor and check the columns line up:
/// one column per anchor, all non-empty and of equal length.
pub(crate) fn anchor_columns<'a>(
    anchors: &[Anchor],
    distances: &'a DistanceMatrix,
) -> Result<Vec<&'a [f64]>, DomainError> {
    let mut columns = Vec::with_capacity(anchors.len());
    let mut samples = None;
    for anchor in anchors {
        let column = distances.get(&anchor.id).ok_or_else(|| {
            DomainError::MissingAnchorColumn { anchor_id: anchor.id.clone() }
        })?;
        match samples {
            None => {
                if column.is_empty() {
                    return Err(DomainError::EmptyInput { what: "distance samples" });
                }
                samples = Some(column.len());
            }
            Some(expected) => {
                if column.len() != expected {
                    return Err(DomainError::RaggedDistances {
                        anchor_id: anchor.id.clone(),
                        expected,
                        actual: column.len(),
                    });
                }
            }
        }
        columns.push(column.as_slice());
    }
    Ok(columns)
}
