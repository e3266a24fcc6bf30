#![warn(clippy::all, rust_2018_idioms)]

pub mod aids;
pub mod config;
pub mod error;
pub mod event;
pub mod geometry;
pub mod history;
pub mod input;
pub mod map;
pub mod state;
pub mod submission;
pub mod tools;

pub use aids::{Aid, AidOutcome};
pub use config::EditorConfig;
pub use error::{ConfigError, DrawingError, SubmitError, TransitionError, ValidationError};
pub use event::{EditorEvent, EventBus, EventLog, Severity, Toast};
pub use geometry::{Bounds, LatLng, LngLat, MultiPolygon, Ring};
pub use history::{Snapshot, SnapshotHistory};
pub use input::{EventPropagation, EventTarget, InputEvent, PointerInput};
pub use map::MapSurface;
pub use state::{DrawingSession, EditorContext, Measurement, ToolKind};
pub use submission::{ContributionBackend, ContributionForm, Record, SubmissionBridge};
pub use tools::{Tool, ToolType};
