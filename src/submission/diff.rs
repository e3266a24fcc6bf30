use crate::geometry::coords::multi_to_storage_order;

use super::model::{CropElement, Record};
use super::payload::{Contribution, CropRef};

/// Which fields of an update differ from the record it revises.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContributionChanges {
    pub title: bool,
    pub address: bool,
    pub description: bool,
    pub crop: bool,
    pub crop_element: bool,
    pub suitability_level: bool,
    pub geometry: bool,
    pub files: bool,
}

fn crop_differs(crop: &CropRef, id: u64, name: &str) -> bool {
    match crop {
        CropRef::Id(crop_id) => *crop_id != id,
        CropRef::Name(crop_name) => crop_name != name,
    }
}

fn crop_element_differs(element: Option<&CropRef>, original: Option<&CropElement>) -> bool {
    match (element, original) {
        (None, None) => false,
        (Some(element), Some(original)) => crop_differs(element, original.id, &original.name),
        _ => true,
    }
}

impl ContributionChanges {
    pub fn between(contribution: &Contribution, record: &Record, has_file_changes: bool) -> Self {
        // rings compare by their canonical storage-order serialization
        let draft = serde_json::to_string(&contribution.geom);
        let original = serde_json::to_string(&multi_to_storage_order(&record.geom));
        let geometry = match (draft, original) {
            (Ok(draft), Ok(original)) => draft != original,
            _ => true,
        };

        Self {
            title: contribution.title != record.title,
            address: contribution.address != record.address,
            description: contribution.description != record.description,
            crop: crop_differs(&contribution.crop, record.crop.id, &record.crop.name),
            crop_element: crop_element_differs(
                contribution.crop_element.as_ref(),
                record.crop_element.as_ref(),
            ),
            suitability_level: contribution.suitability_level != record.suitability_level.id,
            geometry,
            files: has_file_changes,
        }
    }

    pub fn has_changes(&self) -> bool {
        !self.changed_fields().is_empty()
    }

    pub fn changed_fields(&self) -> Vec<&'static str> {
        [
            ("title", self.title),
            ("address", self.address),
            ("description", self.description),
            ("crop", self.crop),
            ("crop_element", self.crop_element),
            ("suitability_level", self.suitability_level),
            ("geometry", self.geometry),
            ("files", self.files),
        ]
        .into_iter()
        .filter_map(|(name, changed)| changed.then_some(name))
        .collect()
    }
}
