use crate::error::ValidationError;
use crate::geometry::Ring;

use super::model::{Crop, CropElement, FileAttachment, Record, RecordStatus, SuitabilityLevel, User};
use super::payload::{Contribution, CropRef};

/// Metadata the user fills in alongside the drawing.
///
/// A crop (and optionally a crop element) is either picked from the
/// reference list or typed in as a new name; a pick always wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContributionForm {
    pub title: String,
    pub address: String,
    pub description: String,
    pub selected_crop: Option<Crop>,
    pub added_crop: String,
    pub selected_crop_element: Option<CropElement>,
    pub added_crop_element: String,
    pub selected_suitability_level: Option<SuitabilityLevel>,
    pub files: Vec<FileAttachment>,
    pub has_file_changes: bool,
    /// The published record being revised, if this is an update
    pub preview_record: Option<Record>,
}

impl ContributionForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefill the form from a record so it can be revised.
    pub fn from_record(record: &Record) -> Self {
        Self {
            title: record.title.clone(),
            address: record.address.clone(),
            description: record.description.clone(),
            selected_crop: Some(record.crop.clone()),
            selected_crop_element: record.crop_element.clone(),
            selected_suitability_level: Some(record.suitability_level.clone()),
            preview_record: Some(record.clone()),
            ..Self::default()
        }
    }

    pub fn is_update(&self) -> bool {
        self.preview_record.is_some()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Replace the attachments, marking them changed for the next update.
    pub fn set_files(&mut self, files: Vec<FileAttachment>) {
        self.files = files;
        self.has_file_changes = true;
    }

    /// Runs the submission checks in order; the first failure is reported.
    pub fn validate(&self, completed: &[Ring]) -> Result<(), ValidationError> {
        if completed.is_empty() {
            return Err(ValidationError::NoPolygon);
        }
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.address.trim().is_empty() {
            return Err(ValidationError::MissingAddress);
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::MissingDescription);
        }
        if self.selected_crop.is_none() && self.added_crop.trim().is_empty() {
            return Err(ValidationError::MissingCrop);
        }
        if self.selected_suitability_level.is_none() {
            return Err(ValidationError::MissingSuitabilityLevel);
        }
        Ok(())
    }

    fn crop_ref(&self) -> CropRef {
        match &self.selected_crop {
            Some(crop) => CropRef::Id(crop.id),
            None => CropRef::Name(self.added_crop.trim().to_string()),
        }
    }

    fn crop_element_ref(&self) -> Option<CropRef> {
        if let Some(element) = &self.selected_crop_element {
            return Some(CropRef::Id(element.id));
        }
        let name = self.added_crop_element.trim();
        (!name.is_empty()).then(|| CropRef::Name(name.to_string()))
    }

    /// Validates and builds the request body. Updates keep the record's author.
    pub fn to_contribution(&self, user: &User, completed: &[Ring]) -> Result<Contribution, ValidationError> {
        self.validate(completed)?;
        let suitability_level = self
            .selected_suitability_level
            .as_ref()
            .map(|level| level.id)
            .ok_or(ValidationError::MissingSuitabilityLevel)?;
        let author = match &self.preview_record {
            Some(record) => record.author.id,
            None => user.id,
        };

        Ok(Contribution {
            author,
            title: self.title.trim().to_string(),
            address: self.address.trim().to_string(),
            description: self.description.trim().to_string(),
            crop: self.crop_ref(),
            crop_element: self.crop_element_ref(),
            suitability_level,
            status: RecordStatus::Pending,
            geom: Contribution::geometry_from(completed),
        })
    }
}
