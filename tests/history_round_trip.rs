mod common;

use common::{click, editor, square_corners};
use parcel_editor::geometry::LatLng;
use parcel_editor::{DrawingSession, EditorEvent, Snapshot, SnapshotHistory, ToolKind};

#[test]
fn test_n_undos_then_n_redos_round_trip() {
    let (mut editor, _log) = editor();
    editor.select_tool(ToolKind::Draw).unwrap();
    click(&mut editor, 5.0, 5.0);
    let before = editor.session().snapshot();

    let corners = square_corners(0.0, 0.0, 0.01);
    for corner in &corners {
        click(&mut editor, corner.lat, corner.lng);
    }
    let after = editor.session().snapshot();

    for _ in &corners {
        assert!(editor.undo());
    }
    assert_eq!(editor.session().snapshot(), before);

    for _ in &corners {
        assert!(editor.redo());
    }
    assert_eq!(editor.session().snapshot(), after);
    assert!(!editor.redo());
}

#[test]
fn test_new_mutation_clears_redo() {
    let (mut editor, log) = editor();
    editor.select_tool(ToolKind::Draw).unwrap();
    click(&mut editor, 0.0, 0.0);
    click(&mut editor, 0.0, 0.01);

    editor.undo();
    assert!(editor.session().history().can_redo());
    click(&mut editor, 0.01, 0.01);
    assert!(!editor.session().history().can_redo());
    assert_eq!(editor.session().history().past_len(), 2);
    assert_eq!(
        log.events().last(),
        Some(&EditorEvent::HistoryChanged {
            can_undo: true,
            can_redo: false
        })
    );
}

#[test]
fn test_undo_and_redo_keep_the_other_stack() {
    let mut session = DrawingSession::new();
    session.push_vertex(LatLng::new(0.0, 0.0));
    session.push_vertex(LatLng::new(1.0, 0.0));
    session.push_vertex(LatLng::new(1.0, 1.0));

    session.undo();
    session.undo();
    assert_eq!(session.history().future_len(), 2);
    session.redo();
    assert_eq!(session.history().future_len(), 1);
    assert_eq!(session.history().past_len(), 2);
    session.undo();
    assert_eq!(session.history().past_len(), 1);
    assert_eq!(session.history().future_len(), 2);
}

#[test]
fn test_snapshots_do_not_alias_live_state() {
    let mut session = DrawingSession::new();
    session.push_vertex(LatLng::new(0.0, 0.0));
    let recorded = session.snapshot();

    session.push_vertex(LatLng::new(1.0, 1.0));
    session.push_vertex(LatLng::new(2.0, 2.0));
    assert_eq!(recorded.vertices, vec![LatLng::new(0.0, 0.0)]);

    let mut history = SnapshotHistory::new();
    let mut live = Snapshot {
        completed: vec![vec![LatLng::new(3.0, 3.0)]],
        ..Snapshot::default()
    };
    history.record_checkpoint(live.clone());
    live.completed[0][0] = LatLng::new(9.0, 9.0);

    let restored = history.undo(live.clone()).unwrap();
    assert_eq!(restored.completed[0][0], LatLng::new(3.0, 3.0));
}

#[test]
fn test_entering_a_tool_clears_history() {
    let (mut editor, _log) = editor();
    editor.select_tool(ToolKind::Draw).unwrap();
    click(&mut editor, 0.0, 0.0);
    editor.cancel();
    assert!(editor.session().history().is_empty());

    click(&mut editor, 0.0, 0.0);
    editor.undo();
    assert!(editor.session().history().can_redo());
    editor.select_tool(ToolKind::Edit).unwrap();
    assert!(editor.session().history().is_empty());
}
