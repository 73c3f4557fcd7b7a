//! Core data types shared across the session API.

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::distr::Alphanumeric;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a session.
pub type SessionId = Uuid;

/// Message stored in a session transcript.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Unique message id; uniqueness is the only invariant.
    pub id: String,
    /// Raw or lightly marked-up content.
    pub text: String,
    /// Who produced the message.
    pub sender: Sender,
    /// Display-formatted timestamp captured at creation, never recomputed.
    pub time: String,
    /// Creation timestamp for ordering and summaries.
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Construct a message stamped with the current time.
    pub fn new(text: impl Into<String>, sender: Sender) -> Self {
        let created_at = Utc::now();
        Self {
            id: message_id(created_at),
            text: text.into(),
            sender,
            time: created_at.format("%H:%M").to_string(),
            created_at,
        }
    }
}

/// Generation-time millis plus a random alphanumeric suffix.
fn message_id(created_at: DateTime<Utc>) -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();
    format!("{}-{}", created_at.timestamp_millis(), suffix)
}

/// Speaker side for a message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// User-authored message.
    User,
    /// Assistant-authored message.
    Bot,
}

impl Sender {
    /// Return the sender as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }

    /// Parse a sender from a lowercase string.
    pub fn parse(value: &str) -> Self {
        if value == "bot" { Sender::Bot } else { Sender::User }
    }
}

impl FromStr for Sender {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Sender::parse(value))
    }
}

/// Resolved user location; every field is independently nullable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Location {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub formatted_address: Option<String>,
    /// Most specific available description for the last resolved coordinate
    /// pair; derived, see the resolver's precedence chain.
    pub precise_location_string: Option<String>,
}

impl Location {
    /// Whether a coordinate pair has been resolved.
    pub fn is_resolved(&self) -> bool {
        self.lat.is_some() && self.lng.is_some()
    }

    /// Best available display description, most specific first.
    pub fn display_string(&self) -> Option<String> {
        if let Some(precise) = &self.precise_location_string {
            return Some(precise.clone());
        }
        match (&self.city, &self.country) {
            (Some(city), Some(country)) => Some(format!("{city}, {country}")),
            (Some(city), None) => Some(city.clone()),
            _ => self.formatted_address.clone(),
        }
    }
}

/// Full session state for one chat surface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    /// Session identifier.
    pub id: SessionId,
    /// Ordered list of messages in the session.
    pub messages: Vec<Message>,
    /// Pending compose text.
    pub input: String,
    /// Typing indicator flag consumed by the presentation layer.
    pub typing: bool,
    /// Resolved user location, empty until resolution.
    pub location: Location,
    /// Sticky flag: the location informational message was already shown.
    pub location_informed: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            messages: Vec::new(),
            input: String::new(),
            typing: false,
            location: Location::default(),
            location_informed: false,
            created_at: Utc::now(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary view of a session for listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionSummary {
    /// Session identifier.
    pub id: SessionId,
    /// Count of messages stored.
    pub message_count: usize,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::{Location, Message, Sender};
    use pretty_assertions::assert_eq;

    #[test]
    fn sender_parses_and_formats() {
        assert_eq!(Sender::parse("bot"), Sender::Bot);
        assert_eq!(Sender::parse("user"), Sender::User);
        assert_eq!(Sender::parse("anything-else"), Sender::User);
        assert_eq!(Sender::Bot.as_str(), "bot");
    }

    #[test]
    fn message_ids_are_unique() {
        let ids: Vec<String> = (0..200)
            .map(|_| Message::new("hi", Sender::User).id)
            .collect();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn display_string_prefers_precise_location() {
        let location = Location {
            city: Some("Paris".to_string()),
            country: Some("France".to_string()),
            precise_location_string: Some("Eiffel Tower, Paris".to_string()),
            ..Location::default()
        };
        assert_eq!(
            location.display_string().as_deref(),
            Some("Eiffel Tower, Paris")
        );

        let location = Location {
            city: Some("Paris".to_string()),
            country: Some("France".to_string()),
            ..Location::default()
        };
        assert_eq!(location.display_string().as_deref(), Some("Paris, France"));
    }
}
