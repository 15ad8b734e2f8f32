//! Input validation errors and accuracy assessment

pub mod error;
pub mod accuracy;

pub use error::{DomainError, GeometryError, LocalizationError};
pub use accuracy::{mean_position_error, position_errors};
