//! Measurement processing: RSSI to distance conversion

pub mod distance;

pub use distance::{distance_matrix, distances_from_rssi, rssi_to_distance};
