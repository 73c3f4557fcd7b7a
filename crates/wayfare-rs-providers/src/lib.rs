//! External provider clients for Wayfare.
//!
//! This crate owns the reqwest-backed clients for the text-generation and
//! reverse-geocoding endpoints, plus the platform position abstraction. Each
//! provider is a trait seam so the engine and tests can inject doubles.

mod error;
mod generation;
mod geocode;
mod position;

/// Provider error types.
pub use error::{GenerationError, GeocodeError};
/// Text-generation client and wire types.
pub use generation::{GeminiClient, GenerationClient};
/// Reverse-geocoding client and wire types.
pub use geocode::{AddressComponent, GeocodeClient, GeocodeResult, GoogleGeocodeClient};
/// Platform position source abstraction.
pub use position::{Position, PositionError, PositionOptions, PositionSource};
