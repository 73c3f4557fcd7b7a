use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use wayfare_rs_providers::{GenerationClient, GenerationError};

/// Generator that always returns the same reply.
#[derive(Debug, Clone)]
pub struct FixedGenerator {
    reply: String,
}

impl FixedGenerator {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

#[async_trait]
impl GenerationClient for FixedGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        Ok(self.reply.clone())
    }
}

/// Generator that records every prompt it receives.
#[derive(Debug, Clone)]
pub struct RecordingGenerator {
    reply: String,
    pub prompts: Arc<Mutex<Vec<String>>>,
}

impl RecordingGenerator {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().last().cloned()
    }
}

#[async_trait]
impl GenerationClient for RecordingGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().push(prompt.to_string());
        Ok(self.reply.clone())
    }
}

/// Generator that always reports a safety block.
#[derive(Debug, Clone)]
pub struct BlockedGenerator {
    reason: String,
}

impl BlockedGenerator {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl GenerationClient for BlockedGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        Err(GenerationError::Blocked {
            reason: self.reason.clone(),
        })
    }
}

/// Generator that always fails at the transport level.
#[derive(Debug, Clone, Default)]
pub struct FailingGenerator;

#[async_trait]
impl GenerationClient for FailingGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        Err(GenerationError::Http {
            status: 503,
            body: "service unavailable".to_string(),
        })
    }
}
