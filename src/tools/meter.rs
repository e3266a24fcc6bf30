use crate::event::EditorEvent;
use crate::input::{EventPropagation, PointerInput};
use crate::state::ToolKind;
use crate::tools::{Tool, ToolContext};

/// Accumulates vertices for live area and perimeter read-outs.
///
/// Nothing it collects is ever committed, and no history is kept.
#[derive(Debug, Default)]
pub struct MeterTool;

impl MeterTool {
    pub fn new() -> Self {
        Self
    }
}

impl Tool for MeterTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Meter
    }

    fn on_click(&mut self, input: &PointerInput, ctx: &mut ToolContext<'_>) -> EventPropagation {
        if !input.is_background() {
            return EventPropagation::Propagate;
        }

        ctx.session.push_vertex_untracked(input.latlng);
        let vertices = ctx.session.vertices();
        if vertices.len() >= 3 {
            let mut preview = vertices.to_vec();
            preview.push(vertices[0]);
            ctx.session.set_preview_ring(preview);
        }
        ctx.events.emit(EditorEvent::VertexAdded {
            count: ctx.session.vertices().len(),
        });
        EventPropagation::Stop
    }
}
