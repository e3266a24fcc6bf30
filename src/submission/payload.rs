use serde::{Deserialize, Serialize};

use crate::geometry::coords::multi_to_storage_order;
use crate::geometry::{LngLat, Ring};

use super::model::RecordStatus;

/// A crop picked from the reference list, or a new one typed in by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CropRef {
    Id(u64),
    Name(String),
}

/// The body sent to create or update a contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub author: u64,
    pub title: String,
    pub address: String,
    pub description: String,
    pub crop: CropRef,
    pub crop_element: Option<CropRef>,
    pub suitability_level: u64,
    pub status: RecordStatus,
    /// Closed rings in storage order
    pub geom: Vec<Vec<LngLat>>,
}

impl Contribution {
    pub fn geometry_from(rings: &[Ring]) -> Vec<Vec<LngLat>> {
        multi_to_storage_order(rings)
    }
}
