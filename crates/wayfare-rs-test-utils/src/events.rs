use parking_lot::Mutex;
use wayfare_rs_core::{EventSink, SessionEvent};

/// Sink that records every emitted event for later assertions.
#[derive(Default)]
pub struct CollectingSink {
    events: Mutex<Vec<SessionEvent>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SessionEvent> {
        self.events.lock().clone()
    }
}

impl EventSink for CollectingSink {
    fn emit(&self, event: SessionEvent) {
        self.events.lock().push(event);
    }
}
