mod snapshot;

pub use snapshot::Snapshot;

/// Two-stack undo/redo history over drawing snapshots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnapshotHistory {
    /// Snapshots that can be restored by undo, newest last
    past: Vec<Snapshot>,
    /// Snapshots that can be restored by redo, newest last
    future: Vec<Snapshot>,
}

impl SnapshotHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push the state about to be mutated. A new mutation invalidates redo.
    pub fn record_checkpoint(&mut self, current: Snapshot) {
        self.past.push(current);
        self.future.clear();
    }

    /// Trade `current` for the most recent checkpoint, keeping `current` for redo.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let previous = self.past.pop()?;
        self.future.push(current);
        Some(previous)
    }

    /// Trade `current` for the most recently undone state, keeping `current` for undo.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.future.pop()?;
        self.past.push(current);
        Some(next)
    }

    pub fn reset(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.past.is_empty() && self.future.is_empty()
    }

    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    pub fn future_len(&self) -> usize {
        self.future.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::LatLng;

    fn with_vertices(count: usize) -> Snapshot {
        Snapshot {
            vertices: (0..count).map(|i| LatLng::new(i as f64, 0.0)).collect(),
            ..Snapshot::default()
        }
    }

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let mut history = SnapshotHistory::new();
        assert!(history.undo(with_vertices(1)).is_none());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_then_redo_swaps_stacks() {
        let mut history = SnapshotHistory::new();
        history.record_checkpoint(with_vertices(0));

        let restored = history.undo(with_vertices(1)).unwrap();
        assert_eq!(restored, with_vertices(0));
        assert_eq!((history.past_len(), history.future_len()), (0, 1));

        let restored = history.redo(with_vertices(0)).unwrap();
        assert_eq!(restored, with_vertices(1));
        assert_eq!((history.past_len(), history.future_len()), (1, 0));
    }

    #[test]
    fn test_checkpoint_clears_future() {
        let mut history = SnapshotHistory::new();
        history.record_checkpoint(with_vertices(0));
        history.undo(with_vertices(1));
        assert!(history.can_redo());

        history.record_checkpoint(with_vertices(0));
        assert!(!history.can_redo());
        assert_eq!(history.past_len(), 1);
    }
}
