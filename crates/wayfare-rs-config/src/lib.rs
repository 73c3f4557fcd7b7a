//! Configuration models and loading for Wayfare.
//!
//! This crate owns the Wayfare config schema, the builder used by embedding
//! applications, and the json5 file loader with environment overrides.

mod error;
mod loader;
mod model;

/// Public error type returned by config loading and validation APIs.
pub use error::ConfigError;
/// File and environment loading entry points.
pub use loader::{DEFAULT_CONFIG_FILE, apply_env_overrides, load, load_from_path};
/// Configuration schema models.
pub use model::*;
