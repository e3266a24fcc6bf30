//! The action buttons ("aids") shown next to the active tool.

use crate::error::DrawingError;
use crate::state::{DrawingSession, ToolKind};
use crate::submission::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aid {
    Submit,
    Save,
    Cancel,
    Exit,
    Undo,
    Redo,
    Previous,
    Next,
}

impl Aid {
    /// Display order, left to right.
    pub const ALL: [Aid; 8] = [
        Aid::Previous,
        Aid::Next,
        Aid::Undo,
        Aid::Redo,
        Aid::Cancel,
        Aid::Save,
        Aid::Submit,
        Aid::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Aid::Submit => "Submit",
            Aid::Save => "Save",
            Aid::Cancel => "Cancel",
            Aid::Exit => "Exit",
            Aid::Undo => "Undo",
            Aid::Redo => "Redo",
            Aid::Previous => "Previous",
            Aid::Next => "Next",
        }
    }
}

/// What invoking an aid did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AidOutcome {
    Applied,
    /// The aid was not on offer, or had nothing to act on
    Ignored,
    Rejected(DrawingError),
    /// Submission is asynchronous; the host hands the form to the submission bridge
    SubmitRequested,
}

fn is_offered(aid: Aid, tool: ToolKind, session: &DrawingSession, preview: Option<&Record>) -> bool {
    if preview.is_some_and(|record| !record.is_editable()) {
        return aid == Aid::Exit;
    }

    match aid {
        Aid::Exit => true,
        Aid::Undo | Aid::Redo => tool == ToolKind::Draw && !session.history().is_empty(),
        Aid::Previous | Aid::Next => tool != ToolKind::Meter && session.completed().len() >= 2,
        Aid::Submit => match tool {
            ToolKind::Draw => !session.has_pending_vertices(),
            ToolKind::Edit | ToolKind::Delete => !session.has_unsaved_alterations(),
            ToolKind::Meter => false,
            ToolKind::None => true,
        },
        Aid::Save => match tool {
            ToolKind::Draw => session.has_pending_vertices(),
            ToolKind::Edit | ToolKind::Delete => session.has_unsaved_alterations(),
            ToolKind::Meter | ToolKind::None => false,
        },
        Aid::Cancel => match tool {
            ToolKind::Draw => session.has_pending_vertices(),
            ToolKind::Meter => true,
            ToolKind::Edit | ToolKind::Delete => session.has_unsaved_alterations(),
            ToolKind::None => false,
        },
    }
}

/// Aids on offer for the active tool, in display order.
pub fn available_aids(tool: ToolKind, session: &DrawingSession, preview: Option<&Record>) -> Vec<Aid> {
    Aid::ALL
        .into_iter()
        .filter(|aid| is_offered(*aid, tool, session, preview))
        .collect()
}
