use crate::config::EditorConfig;
use crate::event::EventBus;
use crate::input::{EventPropagation, PointerInput};
use crate::map::MapSurface;
use crate::state::{DrawingSession, ToolKind};

mod delete;
mod draw;
mod edit;
mod meter;

pub use delete::DeleteTool;
pub use draw::DrawTool;
pub use edit::EditTool;
pub use meter::MeterTool;

/// Everything a tool handler may touch while processing one event.
///
/// Borrowed from the [`crate::state::EditorContext`] for the duration of a
/// single dispatch, so handlers never hold on to shared state.
pub struct ToolContext<'a> {
    pub session: &'a mut DrawingSession,
    pub map: &'a mut dyn MapSurface,
    pub events: &'a EventBus,
    pub config: &'a EditorConfig,
}

/// Tool trait defines the interface for all map tools
pub trait Tool {
    fn kind(&self) -> ToolKind;

    /// Return the name of the tool
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Called right after the tool becomes active.
    fn on_enter(&mut self, _ctx: &mut ToolContext<'_>) {}

    /// Called right before the tool is replaced, on every exit path.
    /// Must release anything the tool acquired from the map.
    fn on_exit(&mut self, _ctx: &mut ToolContext<'_>) {}

    fn on_click(&mut self, _input: &PointerInput, _ctx: &mut ToolContext<'_>) -> EventPropagation {
        EventPropagation::Propagate
    }

    fn on_pointer_down(&mut self, _input: &PointerInput, _ctx: &mut ToolContext<'_>) -> EventPropagation {
        EventPropagation::Propagate
    }

    fn on_pointer_move(&mut self, _input: &PointerInput, _ctx: &mut ToolContext<'_>) -> EventPropagation {
        EventPropagation::Propagate
    }

    fn on_pointer_up(&mut self, _input: &PointerInput, _ctx: &mut ToolContext<'_>) -> EventPropagation {
        EventPropagation::Propagate
    }

    /// The view finished zooming; screen-space previews are stale.
    fn on_zoom_end(&mut self, _ctx: &mut ToolContext<'_>) {}
}

/// Enum representing all available tool types
/// This allows us to avoid using Box<dyn Tool> and keeps dispatch exhaustive
#[derive(Debug, Default)]
pub enum ToolType {
    #[default]
    None,
    Draw(DrawTool),
    Edit(EditTool),
    Delete(DeleteTool),
    Meter(MeterTool),
}

impl ToolType {
    pub fn for_kind(kind: ToolKind) -> Self {
        match kind {
            ToolKind::None => Self::None,
            ToolKind::Draw => Self::Draw(DrawTool::new()),
            ToolKind::Edit => Self::Edit(EditTool::new()),
            ToolKind::Delete => Self::Delete(DeleteTool::new()),
            ToolKind::Meter => Self::Meter(MeterTool::new()),
        }
    }
}

impl Tool for ToolType {
    fn kind(&self) -> ToolKind {
        match self {
            Self::None => ToolKind::None,
            Self::Draw(tool) => tool.kind(),
            Self::Edit(tool) => tool.kind(),
            Self::Delete(tool) => tool.kind(),
            Self::Meter(tool) => tool.kind(),
        }
    }

    fn on_enter(&mut self, ctx: &mut ToolContext<'_>) {
        match self {
            Self::None => {}
            Self::Draw(tool) => tool.on_enter(ctx),
            Self::Edit(tool) => tool.on_enter(ctx),
            Self::Delete(tool) => tool.on_enter(ctx),
            Self::Meter(tool) => tool.on_enter(ctx),
        }
    }

    fn on_exit(&mut self, ctx: &mut ToolContext<'_>) {
        match self {
            Self::None => {}
            Self::Draw(tool) => tool.on_exit(ctx),
            Self::Edit(tool) => tool.on_exit(ctx),
            Self::Delete(tool) => tool.on_exit(ctx),
            Self::Meter(tool) => tool.on_exit(ctx),
        }
    }

    fn on_click(&mut self, input: &PointerInput, ctx: &mut ToolContext<'_>) -> EventPropagation {
        match self {
            Self::None => EventPropagation::Propagate,
            Self::Draw(tool) => tool.on_click(input, ctx),
            Self::Edit(tool) => tool.on_click(input, ctx),
            Self::Delete(tool) => tool.on_click(input, ctx),
            Self::Meter(tool) => tool.on_click(input, ctx),
        }
    }

    fn on_pointer_down(&mut self, input: &PointerInput, ctx: &mut ToolContext<'_>) -> EventPropagation {
        match self {
            Self::None => EventPropagation::Propagate,
            Self::Draw(tool) => tool.on_pointer_down(input, ctx),
            Self::Edit(tool) => tool.on_pointer_down(input, ctx),
            Self::Delete(tool) => tool.on_pointer_down(input, ctx),
            Self::Meter(tool) => tool.on_pointer_down(input, ctx),
        }
    }

    fn on_pointer_move(&mut self, input: &PointerInput, ctx: &mut ToolContext<'_>) -> EventPropagation {
        match self {
            Self::None => EventPropagation::Propagate,
            Self::Draw(tool) => tool.on_pointer_move(input, ctx),
            Self::Edit(tool) => tool.on_pointer_move(input, ctx),
            Self::Delete(tool) => tool.on_pointer_move(input, ctx),
            Self::Meter(tool) => tool.on_pointer_move(input, ctx),
        }
    }

    fn on_pointer_up(&mut self, input: &PointerInput, ctx: &mut ToolContext<'_>) -> EventPropagation {
        match self {
            Self::None => EventPropagation::Propagate,
            Self::Draw(tool) => tool.on_pointer_up(input, ctx),
            Self::Edit(tool) => tool.on_pointer_up(input, ctx),
            Self::Delete(tool) => tool.on_pointer_up(input, ctx),
            Self::Meter(tool) => tool.on_pointer_up(input, ctx),
        }
    }

    fn on_zoom_end(&mut self, ctx: &mut ToolContext<'_>) {
        match self {
            Self::None => {}
            Self::Draw(tool) => tool.on_zoom_end(ctx),
            Self::Edit(tool) => tool.on_zoom_end(ctx),
            Self::Delete(tool) => tool.on_zoom_end(ctx),
            Self::Meter(tool) => tool.on_zoom_end(ctx),
        }
    }
}
