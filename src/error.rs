use thiserror::Error;

use crate::state::ToolKind;
use crate::submission::BackendError;

/// Errors raised when switching tools.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// The active tool still holds pending vertices or unsaved alterations.
    #[error("cannot switch from {active} to {requested}: unsaved changes")]
    UnsavedChanges {
        active: ToolKind,
        requested: ToolKind,
    },
}

/// Errors raised by drawing and editing operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawingError {
    #[error("Polygon must have at least 3 points.")]
    TooFewVertices { count: usize },
    #[error("No polygon is selected for editing.")]
    NothingSelected,
    #[error("Vertex {index} does not exist on the selected polygon.")]
    VertexOutOfRange { index: usize },
}

/// A submission precondition that failed. `Display` is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("No polygon drawn.")]
    NoPolygon,
    #[error("Title is required.")]
    MissingTitle,
    #[error("Address is required.")]
    MissingAddress,
    #[error("Description is required.")]
    MissingDescription,
    #[error("Crop is required.")]
    MissingCrop,
    #[error("Suitability Level is required.")]
    MissingSuitabilityLevel,
}

/// What happened to a freshly created contribution after its files failed to upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollbackOutcome {
    /// The submission was an update, nothing was rolled back.
    NotAttempted,
    /// The new contribution was deleted again.
    RolledBack,
    /// Deleting the new contribution failed as well; it is left orphaned.
    Failed(String),
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    Busy,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("the draft is identical to the record preview")]
    NoChanges,
    #[error("submission rejected: {0}")]
    Backend(#[source] BackendError),
    #[error("file upload failed: {source}")]
    FileUpload {
        #[source]
        source: BackendError,
        rollback: RollbackOutcome,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
