use egui::Pos2;

use super::measure::point_distance;
use crate::config::EditorConfig;

pub const VERTEX_MARKER_BASE_RADIUS: f64 = 50.0;
pub const VERTEX_MARKER_ZOOM_STEP: i32 = 5;
pub const VERTEX_MARKER_ZOOM_FACTOR: f64 = 1.2;

/// True when `cursor` is strictly closer than `tolerance` pixels to `anchor`.
pub fn is_within_snap(cursor: Pos2, anchor: Pos2, tolerance: f32) -> bool {
    point_distance(cursor, anchor) < tolerance
}

/// Radius in metres of the circle markers drawn on editable vertices.
///
/// Markers shrink as the map zooms in so they stay roughly the same size on
/// screen; the deepest zoom uses a fixed small radius.
pub fn vertex_marker_radius(zoom: u8, config: &EditorConfig) -> f64 {
    let zoom = i32::from(zoom);
    let min_zoom = i32::from(config.min_zoom);
    let max_zoom = i32::from(config.max_zoom);
    let default_zoom = i32::from(config.default_zoom);

    if zoom == max_zoom {
        return f64::from(VERTEX_MARKER_ZOOM_STEP);
    }

    let mut zoom_adjust = 15;
    if zoom < default_zoom {
        let reference = if zoom < max_zoom / 2 {
            default_zoom - (VERTEX_MARKER_ZOOM_STEP - 1)
        } else {
            zoom
        };
        zoom_adjust += (default_zoom - reference) * VERTEX_MARKER_ZOOM_STEP;
    }
    if zoom == min_zoom {
        zoom_adjust = 40;
    }

    VERTEX_MARKER_BASE_RADIUS / VERTEX_MARKER_ZOOM_FACTOR.powi(zoom - zoom_adjust)
}
