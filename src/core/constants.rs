//! Physical constants and system parameters

/// Speed of light in vacuum (m/s)
pub const SPEED_OF_LIGHT: f64 = 3e8;

/// Reference distance for the path-loss model (m)
pub const REFERENCE_DISTANCE: f64 = 1.0;
