//! Coordinate types for parcel geometry.
//!
//! The map displays and edits vertices in `(latitude, longitude)` order while
//! the backend stores and transmits them in GeoJSON `(longitude, latitude)`
//! order. Both orders serialize as two-element arrays, so the type decides
//! which element comes first.

use serde::{Deserialize, Serialize};

/// A vertex in display order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// A vertex in storage (GeoJSON) order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

/// Ordered vertex sequence of one polygon boundary.
pub type Ring = Vec<LatLng>;

/// The set of rings authored or edited in one drawing session.
pub type MultiPolygon = Vec<Ring>;

/// Rectangular extent of a geometry, south-west and north-east corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn to_storage(self) -> LngLat {
        LngLat {
            lng: self.lng,
            lat: self.lat,
        }
    }

    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl LngLat {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    pub fn to_display(self) -> LatLng {
        LatLng {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(point: LatLng) -> Self {
        [point.lat, point.lng]
    }
}

impl From<[f64; 2]> for LngLat {
    fn from([lng, lat]: [f64; 2]) -> Self {
        Self { lng, lat }
    }
}

impl From<LngLat> for [f64; 2] {
    fn from(point: LngLat) -> Self {
        [point.lng, point.lat]
    }
}

impl Bounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }
}

/// Converts a display-order ring to storage order, vertex by vertex.
pub fn to_storage_order(ring: &[LatLng]) -> Vec<LngLat> {
    ring.iter().map(|vertex| vertex.to_storage()).collect()
}

/// Converts a storage-order ring back to display order.
pub fn to_display_order(ring: &[LngLat]) -> Ring {
    ring.iter().map(|vertex| vertex.to_display()).collect()
}

pub fn multi_to_storage_order(rings: &[Ring]) -> Vec<Vec<LngLat>> {
    rings.iter().map(|ring| to_storage_order(ring)).collect()
}

pub fn multi_to_display_order(rings: &[Vec<LngLat>]) -> MultiPolygon {
    rings.iter().map(|ring| to_display_order(ring)).collect()
}

/// A ring is closed when it has vertices and its first and last are equal.
pub fn is_closed(ring: &[LatLng]) -> bool {
    match (ring.first(), ring.last()) {
        (Some(first), Some(last)) => ring.len() > 1 && first == last,
        _ => false,
    }
}

/// Returns the ring with its first vertex appended when the ends diverge.
pub fn close_ring(ring: &[LatLng]) -> Ring {
    let mut closed = ring.to_vec();
    if let Some(first) = ring.first() {
        if !is_closed(ring) {
            closed.push(*first);
        }
    }
    closed
}

/// Strips the closing duplicate so each vertex appears once, as edit markers need.
pub fn open_ring(ring: &[LatLng]) -> Ring {
    if is_closed(ring) {
        ring[..ring.len() - 1].to_vec()
    } else {
        ring.to_vec()
    }
}
