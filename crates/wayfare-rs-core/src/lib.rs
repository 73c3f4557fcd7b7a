//! Conversational session core for Wayfare.
//!
//! This crate owns the session state store, the chat engine that orchestrates
//! generation and geolocation enrichment, the address resolver, and the
//! quick-reply suggestion generator used by every chat surface.

pub mod engine;
pub mod events;
pub mod prompt;
pub mod resolver;
pub mod store;
pub mod suggest;
pub mod types;

/// Chat engine facade and reply payload.
pub use engine::{ChatEngine, Reply};
/// Session event sink primitives.
pub use events::{EventSink, SessionEvent};
pub use prompt::PromptBuilder;
pub use resolver::resolve_location;
pub use store::SessionStore;
pub use suggest::SuggestionEngine;
pub use types::{Location, Message, Sender, Session, SessionId, SessionSummary};
