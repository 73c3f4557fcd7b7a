//! Session events emitted for the presentation layer.

use serde::{Deserialize, Serialize};

/// Edge-triggered signals the presentation layer reacts to; none of these
/// are stored state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "type", content = "payload")]
pub enum SessionEvent {
    /// A message was appended; carries the new message id.
    MessageAppended { message_id: String },
    /// The transcript view should scroll to its end.
    ScrollToBottom,
    /// The typing indicator flag changed.
    TypingChanged { typing: bool },
}

/// Sink interface for session events.
pub trait EventSink: Send + Sync {
    /// Emit an event to downstream listeners.
    fn emit(&self, event: SessionEvent);
}
