use egui::PointerButton;

use super::{EventPropagation, InputEvent};
use crate::tools::{Tool, ToolContext, ToolType};

/// Routes one input event to the active tool.
///
/// Only the primary button drives tools. The returned propagation tells the
/// host whether any map-level handler may still see the event.
pub fn route_event(event: &InputEvent, tool: &mut ToolType, ctx: &mut ToolContext<'_>) -> EventPropagation {
    match event {
        InputEvent::Click { input, button } => {
            if *button != PointerButton::Primary {
                return EventPropagation::Propagate;
            }
            tool.on_click(input, ctx)
        }
        InputEvent::PointerDown { input, button } => {
            if *button != PointerButton::Primary {
                return EventPropagation::Propagate;
            }
            tool.on_pointer_down(input, ctx)
        }
        InputEvent::PointerMove { input } => tool.on_pointer_move(input, ctx),
        InputEvent::PointerUp { input, button } => {
            if *button != PointerButton::Primary {
                return EventPropagation::Propagate;
            }
            tool.on_pointer_up(input, ctx)
        }
        InputEvent::ZoomEnd { zoom } => {
            log::trace!("Zoom ended at {zoom}");
            tool.on_zoom_end(ctx);
            EventPropagation::Propagate
        }
    }
}
