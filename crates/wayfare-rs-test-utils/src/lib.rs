//! Shared test doubles for Wayfare crates.

mod events;
mod generation;
mod geocode;
mod position;

pub use events::CollectingSink;
pub use generation::{BlockedGenerator, FailingGenerator, FixedGenerator, RecordingGenerator};
pub use geocode::{EmptyGeocoder, FailingGeocoder, FixedGeocoder, eiffel_tower_results};
pub use position::{FailingPositionSource, FixedPositionSource};
