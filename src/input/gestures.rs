use crate::map::MapSurface;

/// A vertex marker drag in progress.
///
/// Map panning is switched off for as long as the gesture lives. The gesture
/// must be finished with [`VertexDrag::release`], which turns panning back on;
/// tools release it on pointer up and on every exit path.
#[derive(Debug, PartialEq, Eq)]
pub struct VertexDrag {
    vertex_index: usize,
    moves: usize,
}

impl VertexDrag {
    pub fn begin(vertex_index: usize, map: &mut dyn MapSurface) -> Self {
        map.set_dragging(false);
        log::debug!("Vertex drag started on vertex {vertex_index}");
        Self {
            vertex_index,
            moves: 0,
        }
    }

    pub fn vertex_index(&self) -> usize {
        self.vertex_index
    }

    pub fn record_move(&mut self) {
        self.moves += 1;
    }

    pub fn release(self, map: &mut dyn MapSurface) {
        map.set_dragging(true);
        log::debug!(
            "Vertex drag on vertex {} released after {} moves",
            self.vertex_index,
            self.moves
        );
    }
}
