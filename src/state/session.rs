use log::{debug, info};

use crate::error::DrawingError;
use crate::geometry::coords::{close_ring, open_ring};
use crate::geometry::{LatLng, MultiPolygon, Ring};
use crate::history::{Snapshot, SnapshotHistory};

/// The geometry a user is authoring, owned by whichever tool is active.
///
/// `completed` is the authoritative set of closed rings. `draft` is the copy
/// Edit and Delete mutate until Save commits it or Cancel restores it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawingSession {
    vertices: Ring,
    preview_ring: Ring,
    completed: MultiPolygon,
    editing_vertices: Ring,
    draft: MultiPolygon,
    selected_ring: Option<usize>,
    preview_index: usize,
    history: SnapshotHistory,
}

impl DrawingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[LatLng] {
        &self.vertices
    }

    pub fn preview_ring(&self) -> &[LatLng] {
        &self.preview_ring
    }

    pub fn completed(&self) -> &[Ring] {
        &self.completed
    }

    pub fn editing_vertices(&self) -> &[LatLng] {
        &self.editing_vertices
    }

    pub fn draft(&self) -> &[Ring] {
        &self.draft
    }

    pub fn selected_ring(&self) -> Option<usize> {
        self.selected_ring
    }

    pub fn preview_index(&self) -> usize {
        self.preview_index
    }

    pub fn history(&self) -> &SnapshotHistory {
        &self.history
    }

    pub fn has_pending_vertices(&self) -> bool {
        !self.vertices.is_empty()
    }

    pub fn has_unsaved_alterations(&self) -> bool {
        self.draft != self.completed || !self.editing_vertices.is_empty()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            vertices: self.vertices.clone(),
            preview_ring: self.preview_ring.clone(),
            completed: self.completed.clone(),
            editing_vertices: self.editing_vertices.clone(),
            draft: self.draft.clone(),
            selected_ring: self.selected_ring,
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.vertices = snapshot.vertices;
        self.preview_ring = snapshot.preview_ring;
        self.completed = snapshot.completed;
        self.editing_vertices = snapshot.editing_vertices;
        self.draft = snapshot.draft;
        self.selected_ring = snapshot.selected_ring;
    }

    /// Record the current state so the next mutation can be undone.
    pub fn checkpoint(&mut self) {
        let snapshot = self.snapshot();
        self.history.record_checkpoint(snapshot);
    }

    pub fn undo(&mut self) -> bool {
        if !self.history.can_undo() {
            return false;
        }
        let current = self.snapshot();
        match self.history.undo(current) {
            Some(previous) => {
                self.restore(previous);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        if !self.history.can_redo() {
            return false;
        }
        let current = self.snapshot();
        match self.history.redo(current) {
            Some(next) => {
                self.restore(next);
                true
            }
            None => false,
        }
    }

    pub fn reset_history(&mut self) {
        self.history.reset();
    }

    /// Drop in-progress work: pending vertices, preview and selection.
    pub fn reset_progress(&mut self) {
        self.vertices.clear();
        self.preview_ring.clear();
        self.editing_vertices.clear();
        self.selected_ring = None;
    }

    /// Return to the empty session, committed geometry included.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Prepare for a freshly entered tool.
    pub fn begin_tool_session(&mut self) {
        self.reset_progress();
        self.reset_history();
        self.populate_draft();
    }

    /// Replace all geometry with rings loaded from a record preview.
    pub fn load_geometry(&mut self, rings: MultiPolygon) {
        self.reset();
        self.draft = rings.clone();
        self.completed = rings;
    }

    pub fn populate_draft(&mut self) {
        self.draft = self.completed.clone();
    }

    /// Append a vertex to the ring being authored, after a checkpoint.
    pub fn push_vertex(&mut self, vertex: LatLng) {
        self.checkpoint();
        self.vertices.push(vertex);
        self.preview_ring.clear();
    }

    /// Append a vertex without recording history.
    pub fn push_vertex_untracked(&mut self, vertex: LatLng) {
        self.vertices.push(vertex);
    }

    pub fn set_preview_ring(&mut self, ring: Ring) {
        self.preview_ring = ring;
    }

    pub fn clear_preview_ring(&mut self) {
        self.preview_ring.clear();
    }

    /// Close the pending vertices into a new completed ring.
    ///
    /// History is cleared and replaced by one checkpoint of the pre-close
    /// state, so a single undo reopens the ring for drawing.
    pub fn close_pending(&mut self) -> Result<usize, DrawingError> {
        if self.vertices.len() < 3 {
            return Err(DrawingError::TooFewVertices {
                count: self.vertices.len(),
            });
        }

        let before = self.snapshot();
        let ring = close_ring(&self.vertices);
        let vertex_count = ring.len();
        self.completed.push(ring);
        self.populate_draft();
        self.history.reset();
        self.history.record_checkpoint(before);
        self.reset_progress();

        let index = self.completed.len() - 1;
        info!("Closed ring {index} with {vertex_count} vertices");
        Ok(index)
    }

    /// Select a draft ring for vertex editing. Returns false when nothing changed.
    pub fn select_ring(&mut self, index: usize) -> bool {
        if self.selected_ring == Some(index) {
            return false;
        }
        let Some(ring) = self.draft.get(index) else {
            debug!("Ignoring selection of missing ring {index}");
            return false;
        };
        self.editing_vertices = open_ring(ring);
        self.selected_ring = Some(index);
        true
    }

    /// Move one vertex of the selected ring, in both the markers and the draft.
    pub fn move_editing_vertex(&mut self, vertex_index: usize, to: LatLng) -> Result<(), DrawingError> {
        let ring_index = self.selected_ring.ok_or(DrawingError::NothingSelected)?;
        let vertex = self
            .editing_vertices
            .get_mut(vertex_index)
            .ok_or(DrawingError::VertexOutOfRange { index: vertex_index })?;
        *vertex = to;

        // the draft ring is left open; saving closes it again
        if let Some(ring) = self.draft.get_mut(ring_index) {
            *ring = self.editing_vertices.clone();
        }
        Ok(())
    }

    /// Remove a ring from the draft by index.
    pub fn remove_ring(&mut self, index: usize) -> Option<Ring> {
        if index >= self.draft.len() {
            return None;
        }
        Some(self.draft.remove(index))
    }

    /// Close any diverged draft ring and commit the draft.
    ///
    /// Refused without touching anything when a draft ring has collapsed
    /// below three distinct vertices.
    pub fn save_alterations(&mut self) -> Result<(), DrawingError> {
        if let Some(count) = self
            .draft
            .iter()
            .map(|ring| distinct_vertex_count(ring))
            .find(|count| *count < 3)
        {
            return Err(DrawingError::TooFewVertices { count });
        }

        self.draft = self.draft.iter().map(|ring| close_ring(ring)).collect();
        self.completed = self.draft.clone();
        self.preview_index = self.preview_index.min(self.completed.len().saturating_sub(1));
        Ok(())
    }

    pub fn cancel_alterations(&mut self) {
        self.populate_draft();
    }

    /// Advance the ring preview cursor, wrapping past the last ring.
    pub fn next_preview(&mut self) -> Option<usize> {
        let count = self.completed.len();
        if count == 0 {
            return None;
        }
        self.preview_index = (self.preview_index + 1) % count;
        Some(self.preview_index)
    }

    /// Step the ring preview cursor back, wrapping before the first ring.
    pub fn previous_preview(&mut self) -> Option<usize> {
        let count = self.completed.len();
        if count == 0 {
            return None;
        }
        self.preview_index = (self.preview_index + count - 1) % count;
        Some(self.preview_index)
    }
}

fn distinct_vertex_count(ring: &[LatLng]) -> usize {
    let mut seen: Vec<LatLng> = Vec::with_capacity(ring.len());
    for vertex in ring {
        if !seen.contains(vertex) {
            seen.push(*vertex);
        }
    }
    seen.len()
}
