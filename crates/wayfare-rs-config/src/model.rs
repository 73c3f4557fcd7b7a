//! Configuration schema for Wayfare.

use serde::{Deserialize, Serialize};

/// Root config for the Wayfare chat engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WayfareConfig {
    #[serde(default, rename = "$schema")]
    pub schema: Option<String>,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub geocoding: GeocodingConfig,
    #[serde(default)]
    pub persona: PersonaConfig,
    #[serde(default)]
    pub suggestions: SuggestionsConfig,
}

impl WayfareConfig {
    /// Start building a config programmatically with defaults applied.
    pub fn builder() -> WayfareConfigBuilder {
        WayfareConfigBuilder::new()
    }
}

/// Builder for assembling a `WayfareConfig` in code.
#[derive(Debug, Default, Clone)]
pub struct WayfareConfigBuilder {
    config: WayfareConfig,
}

impl WayfareConfigBuilder {
    /// Create a new builder seeded with default config values.
    pub fn new() -> Self {
        Self {
            config: WayfareConfig::default(),
        }
    }

    /// Replace the text-generation endpoint configuration.
    pub fn generation(mut self, generation: GenerationConfig) -> Self {
        self.config.generation = generation;
        self
    }

    /// Replace the reverse-geocoding endpoint configuration.
    pub fn geocoding(mut self, geocoding: GeocodingConfig) -> Self {
        self.config.geocoding = geocoding;
        self
    }

    /// Replace the assistant persona configuration.
    pub fn persona(mut self, persona: PersonaConfig) -> Self {
        self.config.persona = persona;
        self
    }

    /// Replace the quick-reply suggestion configuration.
    pub fn suggestions(mut self, suggestions: SuggestionsConfig) -> Self {
        self.config.suggestions = suggestions;
        self
    }

    /// Finalize and return the built `WayfareConfig`.
    pub fn build(self) -> WayfareConfig {
        self.config
    }
}

/// Text-generation endpoint configuration.
///
/// The api key is accepted here for parity with the legacy client-side
/// deployment, but production deployments should route generation calls
/// through a backend proxy rather than shipping the key to browsers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default = "default_generation_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_generation_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: default_generation_endpoint(),
            api_key: None,
            timeout_secs: default_generation_timeout_secs(),
        }
    }
}

fn default_generation_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        .to_string()
}

fn default_generation_timeout_secs() -> u64 {
    30
}

/// Reverse-geocoding endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    #[serde(default = "default_geocoding_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: Option<String>,
    /// One-shot position request timeout in seconds.
    #[serde(default = "default_position_timeout_secs")]
    pub position_timeout_secs: u64,
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            endpoint: default_geocoding_endpoint(),
            api_key: None,
            position_timeout_secs: default_position_timeout_secs(),
        }
    }
}

fn default_geocoding_endpoint() -> String {
    "https://maps.googleapis.com/maps/api/geocode/json".to_string()
}

fn default_position_timeout_secs() -> u64 {
    10
}

/// Assistant persona configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PersonaConfig {
    /// Override for the fixed persona preamble prepended to every prompt.
    #[serde(default)]
    pub preamble: Option<String>,
}

/// Quick-reply suggestion configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsConfig {
    /// Number of quick replies offered per batch.
    #[serde(default = "default_suggestion_batch_size")]
    pub batch_size: usize,
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self {
            batch_size: default_suggestion_batch_size(),
        }
    }
}

fn default_suggestion_batch_size() -> usize {
    2
}

impl SuggestionsConfig {
    /// Batch size clamped to the supported 2..=4 window.
    pub fn effective_batch_size(&self) -> usize {
        self.batch_size.clamp(2, 4)
    }
}

#[cfg(test)]
mod tests {
    use super::{SuggestionsConfig, WayfareConfig};
    use pretty_assertions::assert_eq;

    #[test]
    fn builder_overrides_sections() {
        let config = WayfareConfig::builder()
            .suggestions(SuggestionsConfig { batch_size: 3 })
            .build();
        assert_eq!(config.suggestions.batch_size, 3);
        assert_eq!(config.generation.timeout_secs, 30);
    }

    #[test]
    fn batch_size_clamps_to_window() {
        assert_eq!(SuggestionsConfig { batch_size: 0 }.effective_batch_size(), 2);
        assert_eq!(SuggestionsConfig { batch_size: 3 }.effective_batch_size(), 3);
        assert_eq!(SuggestionsConfig { batch_size: 9 }.effective_batch_size(), 4);
    }
}
