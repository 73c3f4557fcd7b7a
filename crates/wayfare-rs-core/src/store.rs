//! In-memory session state store.
//!
//! Single source of truth for one visible conversation. All operations are
//! synchronous in-memory mutations and infallible; there is no persistence
//! behind this store.

use crate::events::{EventSink, SessionEvent};
use crate::types::{Location, Message, Sender, Session, SessionSummary};
use log::debug;
use parking_lot::RwLock;
use std::sync::Arc;

/// Cloneable handle to one session's state.
#[derive(Clone)]
pub struct SessionStore {
    /// Session state behind a single lock.
    session: Arc<RwLock<Session>>,
    /// Optional sink for presentation-layer signals.
    sink: Option<Arc<dyn EventSink>>,
}

impl SessionStore {
    /// Create a store for a fresh session with an optional event sink.
    pub fn new(sink: Option<Arc<dyn EventSink>>) -> Self {
        Self {
            session: Arc::new(RwLock::new(Session::new())),
            sink,
        }
    }

    fn emit(&self, event: SessionEvent) {
        if let Some(sink) = &self.sink {
            sink.emit(event);
        }
    }

    /// Append a message and signal the presentation layer to scroll.
    pub fn append_message(&self, text: impl Into<String>, sender: Sender) -> Message {
        let message = Message::new(text, sender);
        debug!(
            "appending message (id={}, sender={}, text_len={})",
            message.id,
            message.sender.as_str(),
            message.text.len()
        );
        self.session.write().messages.push(message.clone());
        self.emit(SessionEvent::MessageAppended {
            message_id: message.id.clone(),
        });
        self.emit(SessionEvent::ScrollToBottom);
        message
    }

    /// Toggle the typing indicator; does not affect message ordering.
    pub fn set_typing(&self, typing: bool) {
        self.session.write().typing = typing;
        self.emit(SessionEvent::TypingChanged { typing });
    }

    /// Current typing indicator state.
    pub fn is_typing(&self) -> bool {
        self.session.read().typing
    }

    /// Replace the pending compose text.
    pub fn set_input(&self, text: impl Into<String>) {
        self.session.write().input = text.into();
    }

    /// Clear the pending compose text.
    pub fn clear_input(&self) {
        self.session.write().input.clear();
    }

    /// Current pending compose text.
    pub fn input(&self) -> String {
        self.session.read().input.clone()
    }

    /// Current location snapshot.
    pub fn location(&self) -> Location {
        self.session.read().location.clone()
    }

    /// Overwrite the stored location; last write wins.
    pub fn set_location(&self, location: Location) {
        self.session.write().location = location;
    }

    /// Whether the location informational message was already shown.
    pub fn location_informed(&self) -> bool {
        self.session.read().location_informed
    }

    /// Mark the location informational message as shown; sticky for the
    /// session lifetime.
    pub fn mark_location_informed(&self) {
        self.session.write().location_informed = true;
    }

    /// Snapshot of the ordered message list.
    pub fn messages(&self) -> Vec<Message> {
        self.session.read().messages.clone()
    }

    /// Summary view of the session.
    pub fn summary(&self) -> SessionSummary {
        let session = self.session.read();
        SessionSummary {
            id: session.id,
            message_count: session.messages.len(),
            created_at: session.created_at,
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::SessionStore;
    use crate::events::{EventSink, SessionEvent};
    use crate::types::Sender;
    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    struct CollectingSink {
        events: Mutex<Vec<SessionEvent>>,
    }

    impl EventSink for CollectingSink {
        fn emit(&self, event: SessionEvent) {
            self.events.lock().push(event);
        }
    }

    #[test]
    fn appends_preserve_order_and_unique_ids() {
        let store = SessionStore::new(None);
        for index in 0..50 {
            store.append_message(format!("message {index}"), Sender::User);
        }

        let messages = store.messages();
        let texts: Vec<String> = messages.iter().map(|m| m.text.clone()).collect();
        let expected: Vec<String> = (0..50).map(|index| format!("message {index}")).collect();
        assert_eq!(texts, expected);

        let mut ids: Vec<String> = messages.iter().map(|m| m.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), messages.len());
    }

    #[test]
    fn append_emits_scroll_signal() {
        let sink = Arc::new(CollectingSink {
            events: Mutex::new(Vec::new()),
        });
        let store = SessionStore::new(Some(sink.clone()));
        store.append_message("hello", Sender::User);

        let events = sink.events.lock();
        assert!(events.contains(&SessionEvent::ScrollToBottom));
    }

    #[test]
    fn typing_and_input_are_independent_of_history() {
        let store = SessionStore::new(None);
        store.set_input("draft");
        store.set_typing(true);
        assert_eq!(store.input(), "draft");
        assert!(store.is_typing());
        assert!(store.messages().is_empty());

        store.clear_input();
        store.set_typing(false);
        assert_eq!(store.input(), "");
        assert!(!store.is_typing());
    }

    #[test]
    fn location_informed_flag_is_sticky() {
        let store = SessionStore::new(None);
        assert!(!store.location_informed());
        store.mark_location_informed();
        store.mark_location_informed();
        assert!(store.location_informed());
    }
}
