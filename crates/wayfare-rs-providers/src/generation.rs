//! Text-generation client for the generateContent wire format.
//!
//! Every call is single-shot: the full prompt is sent as one user part and
//! the first candidate's text is returned. There is no multi-turn context
//! window; callers re-derive context per request.

use crate::error::GenerationError;
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use wayfare_rs_config::{ConfigError, GenerationConfig};

/// Client seam for fetching a generated reply to a prompt.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Send one prompt and return the provider's reply text, trimmed.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

// ============================================================================
// API Types
// ============================================================================

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
}

#[derive(Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Deserialize)]
pub(crate) struct GenerateResponse {
    pub(crate) candidates: Option<Vec<Candidate>>,
    #[serde(rename = "promptFeedback")]
    pub(crate) prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
pub(crate) struct Candidate {
    pub(crate) content: Option<CandidateContent>,
}

#[derive(Deserialize)]
pub(crate) struct CandidateContent {
    pub(crate) parts: Option<Vec<CandidatePart>>,
}

#[derive(Deserialize)]
pub(crate) struct CandidatePart {
    pub(crate) text: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct PromptFeedback {
    #[serde(rename = "blockReason")]
    pub(crate) block_reason: Option<String>,
}

// ============================================================================
// Client Implementation
// ============================================================================

/// Reqwest-backed client for a Gemini-shaped generateContent endpoint.
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    api_key: String,
    timeout: Duration,
}

impl GeminiClient {
    /// Build a client from config; the api key is the only required field.
    pub fn new(config: &GenerationConfig) -> Result<Self, ConfigError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingCredential("generation api key"))?;
        Ok(Self {
            client: Client::new(),
            endpoint: config.endpoint.clone(),
            api_key,
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let request = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        let url = format!("{}?key={}", self.endpoint, self.api_key);
        debug!("sending generation request (prompt_len={})", prompt.len());

        let response = self
            .client
            .post(&url)
            .json(&request)
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!("generation endpoint returned http {status}");
            return Err(GenerationError::Http { status, body });
        }

        let body: GenerateResponse = response.json().await?;
        extract_reply(body)
    }
}

/// Pull the first candidate's text out of a parsed response.
pub(crate) fn extract_reply(response: GenerateResponse) -> Result<String, GenerationError> {
    if let Some(reason) = response
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason)
    {
        return Err(GenerationError::Blocked { reason });
    }

    let mut text = String::new();
    if let Some(candidate) = response.candidates.unwrap_or_default().into_iter().next() {
        let parts = candidate
            .content
            .and_then(|content| content.parts)
            .unwrap_or_default();
        for part in parts {
            if let Some(part_text) = part.text {
                text.push_str(&part_text);
            }
        }
    }

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(GenerationError::EmptyResponse);
    }
    Ok(text)
}
