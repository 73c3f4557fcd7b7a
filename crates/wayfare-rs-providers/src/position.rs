//! Platform position abstraction.
//!
//! The engine never talks to a device position API directly; embedding
//! applications implement `PositionSource` over whatever platform surface
//! they have (browser geolocation, OS location services, a fixed test
//! coordinate) and the engine treats it as a one-shot async lookup.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use wayfare_rs_config::GeocodingConfig;

/// Raw device coordinates from a successful position lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

/// Options for a one-shot position request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionOptions {
    /// Request the most accurate fix the platform can provide.
    pub high_accuracy: bool,
    /// Give up after this long.
    pub timeout: Duration,
    /// Maximum acceptable age for a cached fix; zero forces a fresh one.
    pub max_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(10),
            max_age: Duration::ZERO,
        }
    }
}

impl PositionOptions {
    /// Build options from config, keeping the other defaults.
    pub fn from_config(config: &GeocodingConfig) -> Self {
        Self {
            timeout: Duration::from_secs(config.position_timeout_secs),
            ..Self::default()
        }
    }
}

/// Errors a platform position source can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PositionError {
    /// The user declined to share their position.
    #[error("position permission denied")]
    PermissionDenied,
    /// The platform could not determine a position.
    #[error("position unavailable")]
    PositionUnavailable,
    /// The request did not complete within the configured timeout.
    #[error("position request timed out")]
    Timeout,
    /// Any other platform failure.
    #[error("unknown position error")]
    Unknown,
}

/// One-shot async position lookup.
#[async_trait]
pub trait PositionSource: Send + Sync {
    /// Request the current position once; the platform controls timing.
    async fn current_position(&self, options: &PositionOptions)
    -> Result<Position, PositionError>;
}
