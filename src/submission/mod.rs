//! Packaging a finished drawing for the contributions backend.

mod backend;
mod bridge;
mod diff;
mod form;
mod model;
mod payload;

pub use backend::{BackendError, ContributionBackend, FileUpload};
pub use bridge::SubmissionBridge;
pub use diff::ContributionChanges;
pub use form::ContributionForm;
pub use model::{
    Crop, CropElement, FileAttachment, Record, RecordResponse, RecordStatus, SuitabilityLevel,
    SuitabilityLevelResponse, User,
};
pub use payload::{Contribution, CropRef};
