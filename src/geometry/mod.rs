pub mod coords;
pub mod format;
pub mod hit_testing;
pub mod measure;

pub use coords::{Bounds, LatLng, LngLat, MultiPolygon, Ring};
pub use measure::{bounding_box, path_length, point_distance, ring_area, ring_bounds, ring_perimeter};
