use crate::geometry::{MultiPolygon, Ring};

/// A full copy of the session's mutable drawing fields.
///
/// Every field owns its data, so a stored snapshot can never observe later
/// edits to the live session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub vertices: Ring,
    pub preview_ring: Ring,
    pub completed: MultiPolygon,
    pub editing_vertices: Ring,
    pub draft: MultiPolygon,
    pub selected_ring: Option<usize>,
}
