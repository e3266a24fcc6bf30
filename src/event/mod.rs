mod bus;
mod events;

pub use bus::{EventBus, EventLog};
pub use events::{EditorEvent, Severity, Toast};

pub trait EventHandler {
    fn handle_event(&mut self, event: &EditorEvent);
}
