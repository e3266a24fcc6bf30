#![allow(dead_code)]

use egui::{PointerButton, Pos2, Vec2};
use parcel_editor::geometry::{Bounds, LatLng};
use parcel_editor::input::{EventPropagation, EventTarget, InputEvent, PointerInput};
use parcel_editor::{EditorConfig, EditorContext, EventLog, MapSurface, ToolKind};

/// Pixels per degree; large enough that 0.01 degree is far outside snap tolerance
pub const PIXELS_PER_DEGREE: f32 = 100_000.0;

/// A map with a flat projection that records what the editor asked of it.
#[derive(Debug, Default)]
pub struct FakeMap {
    pub zoom: u8,
    pub flights: Vec<Bounds>,
    pub dragging: Vec<bool>,
    pub interaction: Vec<bool>,
    pub meters_per_pixel: f64,
}

impl FakeMap {
    pub fn new() -> Self {
        Self {
            zoom: 13,
            meters_per_pixel: 6.4,
            ..Self::default()
        }
    }

    pub fn dragging_enabled(&self) -> bool {
        self.dragging.last().copied().unwrap_or(true)
    }
}

impl MapSurface for FakeMap {
    fn project(&self, point: LatLng) -> Pos2 {
        Pos2::new(
            point.lng as f32 * PIXELS_PER_DEGREE,
            -(point.lat as f32) * PIXELS_PER_DEGREE,
        )
    }

    fn zoom(&self) -> u8 {
        self.zoom
    }

    fn fly_to_bounds(&mut self, bounds: Bounds, _padding: Vec2, _duration: f32) {
        self.flights.push(bounds);
    }

    fn set_dragging(&mut self, enabled: bool) {
        self.dragging.push(enabled);
    }

    fn set_interaction(&mut self, enabled: bool) {
        self.interaction.push(enabled);
    }

    fn ground_distance(&self, width: f32) -> f64 {
        f64::from(width) * self.meters_per_pixel
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn editor() -> (EditorContext<FakeMap>, EventLog) {
    init_logging();
    let editor = EditorContext::new(FakeMap::new(), EditorConfig::default());
    let log = EventLog::new();
    editor.subscribe(Box::new(log.clone()));
    (editor, log)
}

pub fn pointer(editor: &EditorContext<FakeMap>, lat: f64, lng: f64, target: EventTarget) -> PointerInput {
    let latlng = LatLng::new(lat, lng);
    PointerInput::new(editor.map().project(latlng), latlng, target)
}

pub fn click_at(editor: &mut EditorContext<FakeMap>, lat: f64, lng: f64, target: EventTarget) -> EventPropagation {
    let input = pointer(editor, lat, lng, target);
    editor.handle_input(&InputEvent::Click {
        input,
        button: PointerButton::Primary,
    })
}

pub fn click(editor: &mut EditorContext<FakeMap>, lat: f64, lng: f64) -> EventPropagation {
    click_at(editor, lat, lng, EventTarget::Background)
}

pub fn move_to(editor: &mut EditorContext<FakeMap>, lat: f64, lng: f64, target: EventTarget) -> EventPropagation {
    let input = pointer(editor, lat, lng, target);
    editor.handle_input(&InputEvent::PointerMove { input })
}

/// Corners of a square with its south-west corner at `(lat, lng)`
pub fn square_corners(lat: f64, lng: f64, size: f64) -> Vec<LatLng> {
    vec![
        LatLng::new(lat, lng),
        LatLng::new(lat, lng + size),
        LatLng::new(lat + size, lng + size),
        LatLng::new(lat + size, lng),
    ]
}

/// Draws and closes a square, leaving the editor in Draw.
pub fn draw_square(editor: &mut EditorContext<FakeMap>, lat: f64, lng: f64) {
    if editor.tool_kind() != ToolKind::Draw {
        editor.select_tool(ToolKind::Draw).unwrap();
    }
    for corner in square_corners(lat, lng, 0.01) {
        click(editor, corner.lat, corner.lng);
    }
    // a couple of pixels off the first corner
    click(editor, lat + 0.000_02, lng + 0.000_02);
}
