use std::cell::RefCell;
use std::sync::Arc;

use parking_lot::Mutex;

use super::{EditorEvent, EventHandler, Severity, Toast};

/// Fans editor events out to the host's subscribers, in subscription order.
#[derive(Default)]
pub struct EventBus {
    subscribers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscribers.borrow().len())
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, subscriber: Box<dyn EventHandler>) {
        self.subscribers.borrow_mut().push(subscriber);
    }

    pub fn emit(&self, event: EditorEvent) {
        let mut subscribers = self.subscribers.borrow_mut();
        for subscriber in subscribers.iter_mut() {
            subscriber.handle_event(&event);
        }
    }

    /// Shorthand for emitting a [`Toast`] notification.
    pub fn toast(&self, title: &str, message: &str, severity: Severity) {
        self.emit(EditorEvent::Toast(Toast::new(title, message, severity)));
    }
}

/// Handler that keeps every event it sees; clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<EditorEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<EditorEvent> {
        self.events.lock().clone()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                EditorEvent::Toast(toast) => Some(toast.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn last_toast(&self) -> Option<Toast> {
        self.toasts().pop()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl EventHandler for EventLog {
    fn handle_event(&mut self, event: &EditorEvent) {
        self.events.lock().push(event.clone());
    }
}
