//! The editor's tool state machine.
//!
//! Exactly one tool is active at a time. Switching is always explicit and is
//! refused while the active tool holds work the user has not saved:
//!
//! ```text
//!   Draw / Meter   pending vertices
//!   Edit / Delete  draft differs from completed, or a ring is selected
//!   None           never
//! ```
use std::fmt;

use serde::{Deserialize, Serialize};

use super::DrawingSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ToolKind {
    #[default]
    None,
    Draw,
    Edit,
    Delete,
    Meter,
}

impl ToolKind {
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::None => "None",
            ToolKind::Draw => "Draw",
            ToolKind::Edit => "Edit",
            ToolKind::Delete => "Delete",
            ToolKind::Meter => "Meter",
        }
    }

    /// Returns true if leaving this tool now would drop unsaved work
    pub fn has_unsaved_work(self, session: &DrawingSession) -> bool {
        match self {
            ToolKind::Draw | ToolKind::Meter => session.has_pending_vertices(),
            ToolKind::Edit | ToolKind::Delete => session.has_unsaved_alterations(),
            ToolKind::None => false,
        }
    }

    /// Returns true if the switch from `self` to `target` may proceed
    pub fn can_transition_to(self, target: ToolKind, session: &DrawingSession) -> bool {
        self == target || !self.has_unsaved_work(session)
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
