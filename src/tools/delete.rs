use log::info;

use crate::event::EditorEvent;
use crate::input::{EventPropagation, EventTarget, PointerInput};
use crate::state::ToolKind;
use crate::tools::{Tool, ToolContext};

/// Removes whole rings from the draft on click.
#[derive(Debug, Default)]
pub struct DeleteTool;

impl DeleteTool {
    pub fn new() -> Self {
        Self
    }
}

impl Tool for DeleteTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Delete
    }

    fn on_click(&mut self, input: &PointerInput, ctx: &mut ToolContext<'_>) -> EventPropagation {
        let EventTarget::Ring(ring_index) = input.target else {
            return EventPropagation::Propagate;
        };

        if ctx.session.remove_ring(ring_index).is_some() {
            info!("Removed ring {ring_index} from the draft");
            ctx.events.emit(EditorEvent::RingDeleted { ring_index });
        }
        EventPropagation::Stop
    }
}
