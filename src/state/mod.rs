mod context;
mod editor_state;
mod session;

pub use context::{EditorContext, Measurement};
pub use editor_state::ToolKind;
pub use session::DrawingSession;
