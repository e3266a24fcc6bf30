use geojson::FeatureCollection;
use log::warn;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::measure::{DisplayGeometry, geometry_to_display};
use crate::geometry::{Bounds, MultiPolygon, bounding_box};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crop {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropElement {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub category: Option<Crop>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuitabilityLevel {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub color: String,
}

/// Grid codes arrive either as numbers or as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
enum GridCode {
    Number(i64),
    Text(String),
}

impl GridCode {
    fn into_code(self) -> String {
        match self {
            GridCode::Number(n) => n.to_string(),
            GridCode::Text(text) => text,
        }
    }
}

/// Suitability level as the backend sends it, keyed by `gridcode`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuitabilityLevelResponse {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub label: String,
    gridcode: GridCode,
    #[serde(default)]
    pub color: String,
}

impl From<SuitabilityLevelResponse> for SuitabilityLevel {
    fn from(level: SuitabilityLevelResponse) -> Self {
        Self {
            id: level.id,
            name: level.name,
            label: level.label,
            code: level.gridcode.into_code(),
            color: level.color,
        }
    }
}

/// Review state of a contribution. Only pending records may be edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum RecordStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl TryFrom<u8> for RecordStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RecordStatus::Pending),
            1 => Ok(RecordStatus::Approved),
            2 => Ok(RecordStatus::Rejected),
            other => Err(format!("unknown record status {other}")),
        }
    }
}

impl From<RecordStatus> for u8 {
    fn from(status: RecordStatus) -> Self {
        match status {
            RecordStatus::Pending => 0,
            RecordStatus::Approved => 1,
            RecordStatus::Rejected => 2,
        }
    }
}

/// A contribution exactly as returned by create, update and read calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordResponse {
    pub id: u64,
    pub author: User,
    pub title: String,
    pub address: String,
    pub description: String,
    pub crop: Crop,
    #[serde(default)]
    pub crop_element: Option<CropElement>,
    pub suitability_level: SuitabilityLevelResponse,
    pub status: RecordStatus,
    #[serde(default)]
    pub date_published: Option<String>,
    #[serde(default)]
    pub last_modified: Option<String>,
    #[serde(default)]
    pub contributors: Vec<User>,
    pub geometries: FeatureCollection,
}

/// A published contribution, geometry in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: u64,
    pub author: User,
    pub title: String,
    pub address: String,
    pub description: String,
    pub crop: Crop,
    pub crop_element: Option<CropElement>,
    pub suitability_level: SuitabilityLevel,
    pub status: RecordStatus,
    pub date_published: Option<String>,
    pub last_modified: Option<String>,
    pub contributors: Vec<User>,
    pub geom: MultiPolygon,
    pub bounding_box: Option<Bounds>,
}

impl Record {
    /// Converts a backend response, keeping the outer ring of each polygon feature.
    pub fn from_response(response: RecordResponse) -> Self {
        let geom = response
            .geometries
            .features
            .iter()
            .filter_map(|feature| match geometry_to_display(feature.geometry.as_ref()) {
                Some(DisplayGeometry::Rings(mut rings)) if !rings.is_empty() => Some(rings.swap_remove(0)),
                Some(other) => {
                    warn!("Skipping non-polygon feature in record {}: {other:?}", response.id);
                    None
                }
                None => None,
            })
            .collect();
        let bounding_box = bounding_box(&response.geometries);

        Self {
            id: response.id,
            author: response.author,
            title: response.title,
            address: response.address,
            description: response.description,
            crop: response.crop,
            crop_element: response.crop_element,
            suitability_level: response.suitability_level.into(),
            status: response.status,
            date_published: response.date_published,
            last_modified: response.last_modified,
            contributors: response.contributors,
            geom,
            bounding_box,
        }
    }

    pub fn is_editable(&self) -> bool {
        self.status == RecordStatus::Pending
    }
}

/// A file attached to a contribution, identified locally until uploaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAttachment {
    pub identifier: Uuid,
    pub name: String,
    /// Set once the backend hosts the file
    pub url: Option<String>,
}

impl FileAttachment {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            identifier: Uuid::new_v4(),
            name: name.into(),
            url: None,
        }
    }

    pub fn hosted(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::new(name)
        }
    }
}
