//! Error types for provider clients.

use thiserror::Error;

/// Errors returned by the text-generation client.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Network or request failure before a response body was read.
    #[error("generation request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Endpoint returned a non-success HTTP status.
    #[error("generation endpoint returned {status}: {body}")]
    Http { status: u16, body: String },
    /// Provider refused the prompt for safety reasons.
    #[error("generation blocked: {reason}")]
    Blocked { reason: String },
    /// Response parsed but contained no usable candidate text.
    #[error("empty or unrecognized generation response")]
    EmptyResponse,
}

/// Errors returned by the reverse-geocoding client.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Network or request failure before a response body was read.
    #[error("geocoding request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Endpoint returned a non-success HTTP status.
    #[error("geocoding endpoint returned {status}: {body}")]
    Http { status: u16, body: String },
    /// Well-formed response with a non-OK provider status or no results.
    #[error("geocoding provider returned status {status}")]
    Provider { status: String },
}
