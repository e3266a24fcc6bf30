use serde::{Deserialize, Serialize};

use crate::state::ToolKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

/// A user-visible notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Toast {
    pub fn new(title: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    ToolChanged {
        old: ToolKind,
        new: ToolKind,
    },
    ToolSwitchRejected {
        active: ToolKind,
        requested: ToolKind,
    },
    VertexAdded {
        count: usize,
    },
    RingClosed {
        ring_index: usize,
        vertex_count: usize,
    },
    RingSelected {
        ring_index: usize,
    },
    RingDeselected,
    RingDeleted {
        ring_index: usize,
    },
    VertexMoved {
        ring_index: usize,
        vertex_index: usize,
    },
    DraftSaved {
        ring_count: usize,
    },
    DraftCancelled,
    HistoryChanged {
        can_undo: bool,
        can_redo: bool,
    },
    PreviewIndexChanged {
        index: usize,
    },
    SessionReset,
    Toast(Toast),
}
