//! Error types for config loading and validation.

use thiserror::Error;

/// Errors returned while loading or validating config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading a config file failed.
    #[error("failed to read config: {0}")]
    ReadFailed(#[from] std::io::Error),
    /// Parsing a config file failed.
    #[error("failed to parse config: {0}")]
    ParseFailed(#[from] json5::Error),
    /// A required credential is absent from both config and environment.
    #[error("missing credential: {0}")]
    MissingCredential(&'static str),
    /// Generic validation failure.
    #[error("invalid config: {0}")]
    Invalid(String),
}
