use egui::Pos2;
use geo::{GeodesicArea, GeodesicLength, LineString, MultiLineString, Polygon};
use geojson::{FeatureCollection, Geometry, Value};
use log::warn;

use super::coords::{Bounds, LatLng};

const SQUARE_METERS_PER_HECTARE: f64 = 10_000.0;
const SQUARE_METERS_PER_SQUARE_KILOMETER: f64 = 1_000_000.0;
const METERS_PER_KILOMETER: f64 = 1_000.0;

/// Planar distance between two projected screen points.
///
/// Only meant for snap tolerance checks, never for real-world lengths.
pub fn point_distance(a: Pos2, b: Pos2) -> f32 {
    a.distance(b)
}

fn line_string(path: &[LatLng]) -> LineString<f64> {
    LineString::from(
        path.iter()
            .map(|vertex| (vertex.lng, vertex.lat))
            .collect::<Vec<_>>(),
    )
}

/// Geodesic area of a ring in hectares. Rings with fewer than three vertices have no area.
pub fn ring_area(ring: &[LatLng]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }

    let polygon = Polygon::new(line_string(ring), Vec::new());
    polygon.geodesic_area_unsigned() / SQUARE_METERS_PER_HECTARE
}

/// Geodesic length in kilometres summed over consecutive vertex pairs.
pub fn ring_perimeter(ring: &[LatLng]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }

    line_string(ring).geodesic_length() / METERS_PER_KILOMETER
}

/// Geodesic length in kilometres along an open path, without a closing leg.
pub fn path_length(path: &[LatLng]) -> f64 {
    if path.len() < 2 {
        return 0.0;
    }

    line_string(path).geodesic_length() / METERS_PER_KILOMETER
}

/// Extent of a single ring, `None` when it holds no finite vertex.
pub fn ring_bounds(ring: &[LatLng]) -> Option<Bounds> {
    let mut extent = Extent::default();
    for vertex in ring {
        extent.include(vertex.lng, vertex.lat);
    }
    extent.into_bounds()
}

/// Bounding box of every coordinate in a feature collection.
///
/// An empty collection (or one without finite coordinates) yields `None`
/// rather than a box stretching to infinity.
pub fn bounding_box(collection: &FeatureCollection) -> Option<Bounds> {
    let mut extent = Extent::default();
    for feature in &collection.features {
        if let Some(geometry) = &feature.geometry {
            extent.include_value(&geometry.value);
        }
    }
    extent.into_bounds()
}

#[derive(Debug)]
struct Extent {
    min_lng: f64,
    min_lat: f64,
    max_lng: f64,
    max_lat: f64,
}

impl Default for Extent {
    fn default() -> Self {
        Self {
            min_lng: f64::INFINITY,
            min_lat: f64::INFINITY,
            max_lng: f64::NEG_INFINITY,
            max_lat: f64::NEG_INFINITY,
        }
    }
}

impl Extent {
    fn include(&mut self, lng: f64, lat: f64) {
        if !lng.is_finite() || !lat.is_finite() {
            return;
        }
        self.min_lng = self.min_lng.min(lng);
        self.min_lat = self.min_lat.min(lat);
        self.max_lng = self.max_lng.max(lng);
        self.max_lat = self.max_lat.max(lat);
    }

    fn include_position(&mut self, position: &[f64]) {
        if let [lng, lat, ..] = position {
            self.include(*lng, *lat);
        }
    }

    fn include_value(&mut self, value: &Value) {
        match value {
            Value::Point(position) => self.include_position(position),
            Value::MultiPoint(positions) | Value::LineString(positions) => {
                positions.iter().for_each(|p| self.include_position(p));
            }
            Value::MultiLineString(lines) | Value::Polygon(lines) => {
                lines.iter().flatten().for_each(|p| self.include_position(p));
            }
            Value::MultiPolygon(polygons) => {
                polygons
                    .iter()
                    .flatten()
                    .flatten()
                    .for_each(|p| self.include_position(p));
            }
            Value::GeometryCollection(geometries) => {
                geometries.iter().for_each(|g| self.include_value(&g.value));
            }
        }
    }

    fn into_bounds(self) -> Option<Bounds> {
        if self.min_lng > self.max_lng || self.min_lat > self.max_lat {
            return None;
        }
        Some(Bounds::new(
            LatLng::new(self.min_lat, self.min_lng),
            LatLng::new(self.max_lat, self.max_lng),
        ))
    }
}

/// A GeoJSON geometry converted to display order.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayGeometry {
    Point(LatLng),
    Path(Vec<LatLng>),
    Rings(Vec<Vec<LatLng>>),
    MultiRings(Vec<Vec<Vec<LatLng>>>),
}

fn position_to_display(position: &[f64]) -> Option<LatLng> {
    match position {
        [lng, lat, ..] => Some(LatLng::new(*lat, *lng)),
        _ => None,
    }
}

fn positions_to_display(positions: &[Vec<f64>]) -> Option<Vec<LatLng>> {
    positions.iter().map(|p| position_to_display(p)).collect()
}

fn lines_to_display(lines: &[Vec<Vec<f64>>]) -> Option<Vec<Vec<LatLng>>> {
    lines.iter().map(|line| positions_to_display(line)).collect()
}

/// Swaps a GeoJSON geometry into display order.
///
/// Unsupported geometry types are logged and treated as "no geometry".
pub fn geometry_to_display(geometry: Option<&Geometry>) -> Option<DisplayGeometry> {
    let geometry = geometry?;
    match &geometry.value {
        Value::Point(position) => position_to_display(position).map(DisplayGeometry::Point),
        Value::LineString(positions) | Value::MultiPoint(positions) => {
            positions_to_display(positions).map(DisplayGeometry::Path)
        }
        Value::Polygon(lines) | Value::MultiLineString(lines) => {
            lines_to_display(lines).map(DisplayGeometry::Rings)
        }
        Value::MultiPolygon(polygons) => polygons
            .iter()
            .map(|polygon| lines_to_display(polygon))
            .collect::<Option<Vec<_>>>()
            .map(DisplayGeometry::MultiRings),
        Value::GeometryCollection(_) => {
            warn!("Unsupported geometry type: GeometryCollection");
            None
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

fn polygon_from_lines(lines: &[Vec<Vec<f64>>]) -> Option<Polygon<f64>> {
    let mut rings = lines_to_display(lines)?.into_iter().map(|ring| line_string(&ring));
    let exterior = rings.next()?;
    Some(Polygon::new(exterior, rings.collect()))
}

/// Area in square kilometres of a polygonal search result, zero for anything else.
pub fn geometry_area_km2(geometry: Option<&Geometry>) -> f64 {
    let Some(geometry) = geometry else {
        return 0.0;
    };
    let square_meters = match &geometry.value {
        Value::Polygon(lines) => polygon_from_lines(lines)
            .map(|polygon| polygon.geodesic_area_unsigned())
            .unwrap_or_default(),
        Value::MultiPolygon(polygons) => polygons
            .iter()
            .filter_map(|lines| polygon_from_lines(lines))
            .map(|polygon| polygon.geodesic_area_unsigned())
            .sum(),
        // lines enclose nothing
        Value::MultiLineString(_) => 0.0,
        other => {
            warn!("Unsupported geometry type for area: {}", value_kind(other));
            0.0
        }
    };
    square_meters / SQUARE_METERS_PER_SQUARE_KILOMETER
}

/// Perimeter in kilometres of a polygonal or multi-line search result.
pub fn geometry_perimeter_km(geometry: Option<&Geometry>) -> f64 {
    let Some(geometry) = geometry else {
        return 0.0;
    };
    let lines: Vec<Vec<LatLng>> = match &geometry.value {
        Value::Polygon(lines) | Value::MultiLineString(lines) => {
            lines_to_display(lines).unwrap_or_default()
        }
        Value::MultiPolygon(polygons) => polygons
            .iter()
            .filter_map(|lines| lines_to_display(lines))
            .flatten()
            .collect(),
        other => {
            warn!("Unsupported geometry type for perimeter: {}", value_kind(other));
            return 0.0;
        }
    };
    let multi_line = MultiLineString::new(lines.iter().map(|line| line_string(line)).collect());
    multi_line.geodesic_length() / METERS_PER_KILOMETER
}
