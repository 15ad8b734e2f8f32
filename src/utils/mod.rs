//! Shared utilities

pub mod config;

pub use config::{ConfigError, SceneConfig, TargetPosition};
