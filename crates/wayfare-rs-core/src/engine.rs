//! Chat engine facade.
//!
//! One engine per chat surface: it owns the session store and the injected
//! provider clients, and orchestrates message sends and location sharing
//! sequentially. Provider failures never propagate past the engine; every
//! failure path degrades to a user-visible informational string.

use crate::events::EventSink;
use crate::prompt::PromptBuilder;
use crate::resolver::resolve_location;
use crate::store::SessionStore;
use crate::suggest::SuggestionEngine;
use crate::types::{Location, Message, Sender};
use log::{info, warn};
use std::sync::Arc;
use wayfare_rs_config::WayfareConfig;
use wayfare_rs_providers::{
    GenerationClient, GenerationError, GeocodeClient, PositionError, PositionOptions,
    PositionSource,
};

/// Greeting appended when a chat surface opens.
const WELCOME_MESSAGE: &str =
    "Hi! I'm your travel assistant. Ask me anything about destinations, planning, or bookings.";
/// Fallback reply when generation fails or returns nothing usable.
const FALLBACK_REPLY: &str =
    "Sorry, I'm having trouble answering right now. Please try again in a moment.";
/// Shown when the user declines location sharing.
const PERMISSION_DENIED_MESSAGE: &str = "No problem! You've declined location sharing, so I'll \
stick to general recommendations.";
/// Shown when the platform cannot determine a position.
const POSITION_UNAVAILABLE_MESSAGE: &str = "I couldn't detect your location right now, so I'll \
share general recommendations instead.";
/// Shown when the position request times out.
const POSITION_TIMEOUT_MESSAGE: &str =
    "The location request timed out. I'll share general recommendations instead.";
/// Shown for any other platform position failure.
const POSITION_UNKNOWN_MESSAGE: &str = "Something went wrong while checking your location, so \
I'll share general recommendations instead.";
/// Shown when geocoding fails after a successful position fix.
const RESOLUTION_FALLBACK_MESSAGE: &str =
    "I couldn't determine your exact location, but I can still recommend great places!";

/// A bot reply plus the next quick-reply batch.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    /// The appended bot message.
    pub message: Message,
    /// Quick replies to offer next.
    pub suggestions: Vec<String>,
}

/// Conversational engine for one chat surface.
pub struct ChatEngine {
    store: SessionStore,
    generator: Arc<dyn GenerationClient>,
    geocoder: Arc<dyn GeocodeClient>,
    positions: Arc<dyn PositionSource>,
    prompts: PromptBuilder,
    suggestions: SuggestionEngine,
    position_options: PositionOptions,
}

impl ChatEngine {
    /// Build an engine with injected provider clients and an optional event
    /// sink for the presentation layer.
    pub fn new(
        config: &WayfareConfig,
        generator: Arc<dyn GenerationClient>,
        geocoder: Arc<dyn GeocodeClient>,
        positions: Arc<dyn PositionSource>,
        sink: Option<Arc<dyn EventSink>>,
    ) -> Self {
        let store = SessionStore::new(sink);
        info!("created chat engine (session_id={})", store.summary().id);
        Self {
            store,
            generator,
            geocoder,
            positions,
            prompts: PromptBuilder::new(config.persona.preamble.clone()),
            suggestions: SuggestionEngine::new(config.suggestions.effective_batch_size()),
            position_options: PositionOptions::from_config(&config.geocoding),
        }
    }

    /// Handle to the underlying session store.
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Open the conversation with the fixed greeting and starter suggestions.
    pub fn greet(&self) -> Reply {
        let message = self.store.append_message(WELCOME_MESSAGE, Sender::Bot);
        let suggestions = self.suggestions.next("", &self.store.location());
        Reply {
            message,
            suggestions,
        }
    }

    /// Send one user message and return the bot reply with next suggestions.
    ///
    /// Returns `None` when the trimmed input is empty. Never fails: blocked
    /// prompts get a fixed apology naming the reason, everything else
    /// degrades to the fallback reply.
    pub async fn send_message(&self, text: &str) -> Option<Reply> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        self.store.clear_input();
        self.store.append_message(trimmed, Sender::User);
        self.store.set_typing(true);

        let location = self.store.location();
        let prompt = self.prompts.build(trimmed, &location);
        let reply_text = match self.generator.generate(&prompt).await {
            Ok(text) => text,
            Err(GenerationError::Blocked { reason }) => {
                warn!("generation blocked (reason={reason})");
                format!(
                    "I'm sorry, I can't respond to that ({reason}). Let's keep it about travel!"
                )
            }
            Err(err) => {
                warn!("generation failed: {err}");
                FALLBACK_REPLY.to_string()
            }
        };

        self.store.set_typing(false);
        let message = self.store.append_message(reply_text, Sender::Bot);
        let suggestions = self.suggestions.next(trimmed, &self.store.location());
        Some(Reply {
            message,
            suggestions,
        })
    }

    /// Request the device position once and enrich the session with it.
    ///
    /// Returns the informational message appended, if any. A successful
    /// re-resolution overwrites the stored location (last write wins) but the
    /// "location informed" message is shown at most once per session. All
    /// failures degrade to a single informational message; none retry.
    pub async fn share_location(&self) -> Option<Message> {
        let position = match self.positions.current_position(&self.position_options).await {
            Ok(position) => position,
            Err(err) => {
                info!("position request failed: {err}");
                let text = position_error_message(err);
                return Some(self.store.append_message(text, Sender::Bot));
            }
        };

        match self
            .geocoder
            .reverse_geocode(position.latitude, position.longitude)
            .await
        {
            Ok(results) => {
                let location = resolve_location(&results, position.latitude, position.longitude);
                let place = location.display_string();
                self.store.set_location(location);

                if self.store.location_informed() {
                    return None;
                }
                self.store.mark_location_informed();
                let place = place.unwrap_or_else(|| "your area".to_string());
                let text =
                    format!("I see you're at {place}! I can recommend great places near you.");
                Some(self.store.append_message(text, Sender::Bot))
            }
            Err(err) => {
                warn!("address resolution failed: {err}");
                // Keep the raw coordinates; the session continues in
                // general-recommendations mode.
                self.store.set_location(Location {
                    lat: Some(position.latitude),
                    lng: Some(position.longitude),
                    ..Location::default()
                });
                Some(
                    self.store
                        .append_message(RESOLUTION_FALLBACK_MESSAGE, Sender::Bot),
                )
            }
        }
    }
}

/// Distinct explanatory message per platform position error.
fn position_error_message(err: PositionError) -> &'static str {
    match err {
        PositionError::PermissionDenied => PERMISSION_DENIED_MESSAGE,
        PositionError::PositionUnavailable => POSITION_UNAVAILABLE_MESSAGE,
        PositionError::Timeout => POSITION_TIMEOUT_MESSAGE,
        PositionError::Unknown => POSITION_UNKNOWN_MESSAGE,
    }
}
