use log::{debug, warn};

use crate::event::EditorEvent;
use crate::input::{EventPropagation, EventTarget, PointerInput, VertexDrag};
use crate::state::ToolKind;
use crate::tools::{Tool, ToolContext};

/// Selects a ring and drags its vertex markers.
#[derive(Debug, Default)]
pub struct EditTool {
    drag: Option<VertexDrag>,
}

impl EditTool {
    pub fn new() -> Self {
        Self::default()
    }

    fn release_drag(&mut self, ctx: &mut ToolContext<'_>) {
        if let Some(drag) = self.drag.take() {
            drag.release(ctx.map);
        }
    }
}

impl Tool for EditTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Edit
    }

    fn on_exit(&mut self, ctx: &mut ToolContext<'_>) {
        self.release_drag(ctx);
    }

    fn on_click(&mut self, input: &PointerInput, ctx: &mut ToolContext<'_>) -> EventPropagation {
        match input.target {
            EventTarget::Background => {
                ctx.session.reset_progress();
                ctx.events.emit(EditorEvent::RingDeselected);
                EventPropagation::Stop
            }
            EventTarget::Ring(ring_index) => {
                if ctx.session.select_ring(ring_index) {
                    debug!("Selected ring {ring_index} for editing");
                    ctx.events.emit(EditorEvent::RingSelected { ring_index });
                }
                EventPropagation::Stop
            }
            EventTarget::VertexMarker(_) => EventPropagation::Stop,
            EventTarget::Control => EventPropagation::Propagate,
        }
    }

    fn on_pointer_down(&mut self, input: &PointerInput, ctx: &mut ToolContext<'_>) -> EventPropagation {
        let EventTarget::VertexMarker(vertex_index) = input.target else {
            return EventPropagation::Propagate;
        };
        if ctx.session.selected_ring().is_none() {
            warn!("Vertex marker {vertex_index} pressed without a selected ring");
            return EventPropagation::Propagate;
        }

        // a stale gesture must give panning back before a new one starts
        self.release_drag(ctx);
        ctx.session.checkpoint();
        self.drag = Some(VertexDrag::begin(vertex_index, ctx.map));
        EventPropagation::Stop
    }

    fn on_pointer_move(&mut self, input: &PointerInput, ctx: &mut ToolContext<'_>) -> EventPropagation {
        let Some(drag) = self.drag.as_mut() else {
            return EventPropagation::Propagate;
        };

        let vertex_index = drag.vertex_index();
        match ctx.session.move_editing_vertex(vertex_index, input.latlng) {
            Ok(()) => {
                drag.record_move();
                if let Some(ring_index) = ctx.session.selected_ring() {
                    ctx.events.emit(EditorEvent::VertexMoved {
                        ring_index,
                        vertex_index,
                    });
                }
            }
            Err(err) => warn!("Dropping vertex move: {err}"),
        }
        EventPropagation::Stop
    }

    fn on_pointer_up(&mut self, _input: &PointerInput, ctx: &mut ToolContext<'_>) -> EventPropagation {
        if self.drag.is_none() {
            return EventPropagation::Propagate;
        }
        self.release_drag(ctx);
        EventPropagation::Stop
    }
}
