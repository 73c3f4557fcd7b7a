//! Prompt assembly for generation requests.
//!
//! Each prompt is persona preamble, an optional location block, and the
//! literal user text. The location block is included only when the user text
//! carries a locality-indicating phrase and a location is known.

use crate::types::Location;

/// Fixed persona text prepended to every generation request.
pub const DEFAULT_PERSONA: &str = "You are Wayfare's travel assistant: a friendly, knowledgeable \
travel expert helping visitors plan trips, pick destinations, and book with confidence. Keep \
answers concise and practical, favor short paragraphs and lists, and always stay on travel \
topics. Do not invent prices or availability.";

/// Substrings that signal the user wants location-aware content.
pub const LOCALITY_PHRASES: [&str; 8] = [
    "near me",
    "nearby",
    "local",
    "around here",
    "from here",
    "my city",
    "my location",
    "close to me",
];

/// Assembles single-shot prompts from a persona preamble.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    persona: String,
}

impl PromptBuilder {
    /// Create a builder, overriding the default persona when given.
    pub fn new(persona: Option<String>) -> Self {
        Self {
            persona: persona.unwrap_or_else(|| DEFAULT_PERSONA.to_string()),
        }
    }

    /// Whether the text contains a locality-indicating phrase.
    pub fn wants_location(text: &str) -> bool {
        let lowered = text.to_lowercase();
        LOCALITY_PHRASES
            .iter()
            .any(|phrase| lowered.contains(phrase))
    }

    /// Build the prompt for one user message.
    pub fn build(&self, user_text: &str, location: &Location) -> String {
        let mut prompt = self.persona.clone();

        if Self::wants_location(user_text)
            && let Some(place) = location.display_string()
        {
            prompt.push_str(&format!(
                "\n\nThe user's current location is {place}. Tailor recommendations to places \
near them when relevant."
            ));
        }

        prompt.push_str("\n\nUser message: ");
        prompt.push_str(user_text);
        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::PromptBuilder;
    use crate::types::Location;

    fn paris() -> Location {
        Location {
            lat: Some(48.85),
            lng: Some(2.29),
            city: Some("Paris".to_string()),
            country: Some("France".to_string()),
            precise_location_string: Some("Eiffel Tower, Paris".to_string()),
            ..Location::default()
        }
    }

    #[test]
    fn detects_locality_phrases_case_insensitively() {
        assert!(PromptBuilder::wants_location("restaurants NEAR ME please"));
        assert!(PromptBuilder::wants_location("any local markets?"));
        assert!(!PromptBuilder::wants_location("plan a 7 day trip to Dubai"));
    }

    #[test]
    fn includes_location_block_only_when_asked_and_known() {
        let builder = PromptBuilder::new(None);

        let with = builder.build("what's good near me?", &paris());
        assert!(with.contains("current location is Eiffel Tower, Paris"));
        assert!(with.contains("what's good near me?"));

        let without_phrase = builder.build("plan a 7 day trip to Dubai", &paris());
        assert!(!without_phrase.contains("current location"));
        assert!(without_phrase.contains("plan a 7 day trip to Dubai"));

        let without_location = builder.build("what's good near me?", &Location::default());
        assert!(!without_location.contains("current location"));
    }

    #[test]
    fn persona_override_replaces_default() {
        let builder = PromptBuilder::new(Some("Terse concierge.".to_string()));
        let prompt = builder.build("hello", &Location::default());
        assert!(prompt.starts_with("Terse concierge."));
    }
}
