use log::{debug, warn};

use crate::event::{EditorEvent, Severity};
use crate::geometry::LatLng;
use crate::geometry::hit_testing::is_within_snap;
use crate::input::{EventPropagation, EventTarget, PointerInput};
use crate::state::ToolKind;
use crate::tools::{Tool, ToolContext};

/// Authors new rings one background click at a time.
#[derive(Debug, Default)]
pub struct DrawTool;

impl DrawTool {
    pub fn new() -> Self {
        Self
    }

    /// True when `point` lands within snap tolerance of the first pending vertex.
    fn snaps_to_first(point: LatLng, ctx: &ToolContext<'_>) -> bool {
        match ctx.session.vertices().first() {
            Some(first) => is_within_snap(
                ctx.map.project(point),
                ctx.map.project(*first),
                ctx.config.snap_tolerance,
            ),
            None => false,
        }
    }

    fn close(ctx: &mut ToolContext<'_>) {
        match ctx.session.close_pending() {
            Ok(ring_index) => {
                let vertex_count = ctx.session.completed()[ring_index].len();
                ctx.events.emit(EditorEvent::RingClosed {
                    ring_index,
                    vertex_count,
                });
                ctx.events.emit(EditorEvent::HistoryChanged {
                    can_undo: ctx.session.history().can_undo(),
                    can_redo: ctx.session.history().can_redo(),
                });
            }
            Err(err) => {
                warn!("Refusing to close ring: {err}");
                ctx.events.toast("Drawing Failed", &err.to_string(), Severity::Error);
            }
        }
    }
}

impl Tool for DrawTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Draw
    }

    fn on_click(&mut self, input: &PointerInput, ctx: &mut ToolContext<'_>) -> EventPropagation {
        if input.target == EventTarget::Control {
            return EventPropagation::Propagate;
        }

        // With a second vertex on the way a click near the start is a close attempt
        if ctx.session.vertices().len() >= 2 && Self::snaps_to_first(input.latlng, ctx) {
            Self::close(ctx);
            return EventPropagation::Stop;
        }

        if !input.is_background() {
            return EventPropagation::Propagate;
        }

        ctx.session.push_vertex(input.latlng);
        debug!("Added vertex {} at {:?}", ctx.session.vertices().len(), input.latlng);
        ctx.events.emit(EditorEvent::VertexAdded {
            count: ctx.session.vertices().len(),
        });
        ctx.events.emit(EditorEvent::HistoryChanged {
            can_undo: ctx.session.history().can_undo(),
            can_redo: ctx.session.history().can_redo(),
        });
        EventPropagation::Stop
    }

    fn on_pointer_move(&mut self, input: &PointerInput, ctx: &mut ToolContext<'_>) -> EventPropagation {
        let Some(first) = ctx.session.vertices().first().copied() else {
            return EventPropagation::Propagate;
        };

        let cursor = if Self::snaps_to_first(input.latlng, ctx) {
            first
        } else {
            input.latlng
        };
        let mut preview = ctx.session.vertices().to_vec();
        preview.push(cursor);
        preview.push(first);
        ctx.session.set_preview_ring(preview);
        EventPropagation::Propagate
    }

    fn on_zoom_end(&mut self, ctx: &mut ToolContext<'_>) {
        ctx.session.clear_preview_ring();
    }
}
