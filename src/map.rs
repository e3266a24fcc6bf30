//! The map rendering surface the editor drives.

use egui::{Pos2, Vec2};

use crate::geometry::{Bounds, LatLng};

/// Operations the editor needs from the hosting map widget.
pub trait MapSurface {
    /// Projects a geographic coordinate into the map's layer pixel space.
    fn project(&self, point: LatLng) -> Pos2;

    /// Current integer zoom level.
    fn zoom(&self) -> u8;

    /// Animates the view so `bounds` fills the viewport minus `padding`.
    fn fly_to_bounds(&mut self, bounds: Bounds, padding: Vec2, duration: f32);

    /// Toggles panning by dragging the map background.
    fn set_dragging(&mut self, enabled: bool);

    /// Toggles dragging, double-click zoom and scroll-wheel zoom together.
    fn set_interaction(&mut self, enabled: bool);

    /// Ground distance in metres spanned by `width` pixels across the middle of the viewport.
    fn ground_distance(&self, width: f32) -> f64;
}
