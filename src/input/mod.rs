use egui::{PointerButton, Pos2};

use crate::geometry::LatLng;

mod gestures;
mod router;

pub use gestures::VertexDrag;
pub use router::route_event;

/// What the pointer was over when an event fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTarget {
    /// Bare map background
    Background,
    /// A rendered ring, by index into the draft
    Ring(usize),
    /// A vertex marker of the ring under edit, by vertex index
    VertexMarker(usize),
    /// An overlay control sitting above the map
    Control,
}

/// The location where a pointer event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    /// The position in layer pixel coordinates
    pub position: Pos2,
    /// The geographic coordinate under the pointer
    pub latlng: LatLng,
    pub target: EventTarget,
}

impl PointerInput {
    pub fn new(position: Pos2, latlng: LatLng, target: EventTarget) -> Self {
        Self {
            position,
            latlng,
            target,
        }
    }

    pub fn is_background(&self) -> bool {
        self.target == EventTarget::Background
    }
}

/// Raw map events delivered by the host
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Press and release without a drag
    Click {
        input: PointerInput,
        button: PointerButton,
    },
    /// Mouse button was pressed
    PointerDown {
        input: PointerInput,
        button: PointerButton,
    },
    /// Mouse moved (with or without buttons pressed)
    PointerMove { input: PointerInput },
    /// Mouse button was released
    PointerUp {
        input: PointerInput,
        button: PointerButton,
    },
    /// A zoom animation finished at `zoom`
    ZoomEnd { zoom: u8 },
}

/// Whether a handler consumed an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventPropagation {
    Propagate,
    Stop,
}
