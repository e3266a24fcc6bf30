mod common;

use common::{click, click_at, draw_square, editor, move_to, pointer, square_corners};
use egui::PointerButton;
use parcel_editor::geometry::LatLng;
use parcel_editor::geometry::coords::is_closed;
use parcel_editor::input::{EventPropagation, EventTarget, InputEvent};
use parcel_editor::{Aid, AidOutcome, DrawingError, EditorEvent, Severity, ToolKind, TransitionError};

#[test]
fn test_closing_click_commits_ring() {
    let (mut editor, log) = editor();
    editor.select_tool(ToolKind::Draw).unwrap();

    for (i, corner) in square_corners(14.1, 121.2, 0.01).into_iter().enumerate() {
        assert_eq!(click(&mut editor, corner.lat, corner.lng), EventPropagation::Stop);
        assert_eq!(editor.session().vertices().len(), i + 1);
    }
    click(&mut editor, 14.100_01, 121.200_01);

    let completed = editor.session().completed();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].len(), 5);
    assert!(is_closed(&completed[0]));
    assert_eq!(editor.session().draft(), completed);
    assert!(editor.session().vertices().is_empty());
    assert!(editor.session().preview_ring().is_empty());
    assert!(log.events().contains(&EditorEvent::RingClosed {
        ring_index: 0,
        vertex_count: 5
    }));
}

#[test]
fn test_close_with_two_vertices_is_rejected() {
    let (mut editor, log) = editor();
    editor.select_tool(ToolKind::Draw).unwrap();
    click(&mut editor, 0.0, 0.0);
    click(&mut editor, 0.0, 0.01);
    click(&mut editor, 0.000_01, 0.0);

    assert!(editor.session().completed().is_empty());
    assert_eq!(editor.session().vertices().len(), 2);
    let toast = log.last_toast().unwrap();
    assert_eq!(toast.title, "Drawing Failed");
    assert_eq!(toast.message, "Polygon must have at least 3 points.");
    assert_eq!(toast.severity, Severity::Error);
}

#[test]
fn test_undo_after_close_reopens_ring() {
    let (mut editor, _log) = editor();
    draw_square(&mut editor, 0.0, 0.0);
    assert_eq!(editor.session().completed().len(), 1);

    assert!(editor.undo());
    assert!(editor.session().completed().is_empty());
    assert_eq!(editor.session().vertices(), square_corners(0.0, 0.0, 0.01).as_slice());
    assert_eq!(editor.tool_kind(), ToolKind::Draw);

    assert!(editor.redo());
    assert_eq!(editor.session().completed().len(), 1);
    assert!(editor.session().vertices().is_empty());
}

#[test]
fn test_preview_snaps_to_first_vertex() {
    let (mut editor, _log) = editor();
    editor.select_tool(ToolKind::Draw).unwrap();
    click(&mut editor, 0.0, 0.0);
    click(&mut editor, 0.0, 0.01);

    move_to(&mut editor, 0.005, 0.005, EventTarget::Background);
    let preview = editor.session().preview_ring().to_vec();
    assert_eq!(preview.len(), 4);
    assert_eq!(preview[2], LatLng::new(0.005, 0.005));
    assert_eq!(preview[3], LatLng::new(0.0, 0.0));

    move_to(&mut editor, 0.000_05, 0.0, EventTarget::Background);
    assert_eq!(editor.session().preview_ring()[2], LatLng::new(0.0, 0.0));

    editor.handle_input(&InputEvent::ZoomEnd { zoom: 14 });
    assert!(editor.session().preview_ring().is_empty());
}

#[test]
fn test_feature_and_secondary_clicks_add_nothing() {
    let (mut editor, _log) = editor();
    editor.select_tool(ToolKind::Draw).unwrap();

    assert_eq!(
        click_at(&mut editor, 0.0, 0.0, EventTarget::Control),
        EventPropagation::Propagate
    );
    assert_eq!(
        click_at(&mut editor, 0.0, 0.0, EventTarget::Ring(0)),
        EventPropagation::Propagate
    );
    let input = pointer(&editor, 0.0, 0.0, EventTarget::Background);
    let outcome = editor.handle_input(&InputEvent::Click {
        input,
        button: PointerButton::Secondary,
    });
    assert_eq!(outcome, EventPropagation::Propagate);
    assert!(editor.session().vertices().is_empty());
}

#[test]
fn test_pending_vertices_block_tool_switch() {
    let (mut editor, log) = editor();
    editor.select_tool(ToolKind::Draw).unwrap();
    click(&mut editor, 0.0, 0.0);

    let result = editor.select_tool(ToolKind::Edit);
    assert_eq!(
        result,
        Err(TransitionError::UnsavedChanges {
            active: ToolKind::Draw,
            requested: ToolKind::Edit
        })
    );
    assert_eq!(editor.tool_kind(), ToolKind::Draw);
    let toast = log.last_toast().unwrap();
    assert_eq!(toast.title, "Unsaved Changes");
    assert_eq!(toast.severity, Severity::Warning);

    editor.cancel();
    assert!(editor.select_tool(ToolKind::Edit).is_ok());
}

#[test]
fn test_save_aid_closes_pending_vertices() {
    let (mut editor, _log) = editor();
    editor.select_tool(ToolKind::Draw).unwrap();
    click(&mut editor, 0.0, 0.0);
    click(&mut editor, 0.0, 0.01);

    assert_eq!(
        editor.apply_aid(Aid::Save, None),
        AidOutcome::Rejected(DrawingError::TooFewVertices { count: 2 })
    );

    click(&mut editor, 0.01, 0.01);
    assert_eq!(editor.apply_aid(Aid::Save, None), AidOutcome::Applied);
    assert_eq!(editor.session().completed()[0].len(), 4);
    assert!(editor.session().history().is_empty());
    assert_eq!(editor.apply_aid(Aid::Save, None), AidOutcome::Ignored);
}

#[test]
fn test_edit_drag_moves_vertex_in_draft_only() {
    let (mut editor, log) = editor();
    draw_square(&mut editor, 0.0, 0.0);
    editor.select_tool(ToolKind::Edit).unwrap();

    click_at(&mut editor, 0.005, 0.005, EventTarget::Ring(0));
    assert_eq!(editor.session().selected_ring(), Some(0));
    assert_eq!(editor.session().editing_vertices().len(), 4);

    let down = pointer(&editor, 0.01, 0.01, EventTarget::VertexMarker(2));
    editor.handle_input(&InputEvent::PointerDown {
        input: down,
        button: PointerButton::Primary,
    });
    assert!(!editor.map().dragging_enabled());

    move_to(&mut editor, 0.02, 0.02, EventTarget::Background);
    let moved = LatLng::new(0.02, 0.02);
    assert_eq!(editor.session().editing_vertices()[2], moved);
    assert_eq!(editor.session().draft()[0][2], moved);
    assert_eq!(editor.session().completed()[0][2], LatLng::new(0.01, 0.01));

    let up = pointer(&editor, 0.02, 0.02, EventTarget::Background);
    editor.handle_input(&InputEvent::PointerUp {
        input: up,
        button: PointerButton::Primary,
    });
    assert!(editor.map().dragging_enabled());
    assert!(log.events().contains(&EditorEvent::VertexMoved {
        ring_index: 0,
        vertex_index: 2
    }));

    assert!(editor.select_tool(ToolKind::Delete).is_err());
    editor.save().unwrap();
    let ring = &editor.session().completed()[0];
    assert_eq!(ring.len(), 5);
    assert!(is_closed(ring));
    assert_eq!(ring[2], moved);
    assert_eq!(editor.session().draft(), editor.session().completed());
    assert!(editor.select_tool(ToolKind::Delete).is_ok());
}

#[test]
fn test_edit_save_rejects_collapsed_ring() {
    let (mut editor, log) = editor();
    editor.select_tool(ToolKind::Draw).unwrap();
    click(&mut editor, 0.0, 0.0);
    click(&mut editor, 0.0, 0.01);
    click(&mut editor, 0.01, 0.01);
    click(&mut editor, 0.000_02, 0.000_02);
    let committed = editor.session().completed()[0].clone();
    assert_eq!(committed.len(), 4);

    editor.select_tool(ToolKind::Edit).unwrap();
    click_at(&mut editor, 0.003, 0.007, EventTarget::Ring(0));
    let down = pointer(&editor, 0.01, 0.01, EventTarget::VertexMarker(2));
    editor.handle_input(&InputEvent::PointerDown {
        input: down,
        button: PointerButton::Primary,
    });
    move_to(&mut editor, 0.0, 0.0, EventTarget::Background);
    let up = pointer(&editor, 0.0, 0.0, EventTarget::Background);
    editor.handle_input(&InputEvent::PointerUp {
        input: up,
        button: PointerButton::Primary,
    });

    assert_eq!(
        editor.save(),
        Err(DrawingError::TooFewVertices { count: 2 })
    );
    assert_eq!(editor.session().completed()[0], committed);
    assert_eq!(editor.tool_kind(), ToolKind::Edit);
    let toast = log.last_toast().unwrap();
    assert_eq!(toast.message, "Polygon must have at least 3 points.");
    assert_eq!(toast.severity, Severity::Error);
    assert!(editor.select_tool(ToolKind::None).is_err());
}

#[test]
fn test_edit_background_click_deselects() {
    let (mut editor, _log) = editor();
    draw_square(&mut editor, 0.0, 0.0);
    editor.select_tool(ToolKind::Edit).unwrap();

    click_at(&mut editor, 0.005, 0.005, EventTarget::Ring(0));
    assert_eq!(click(&mut editor, 0.5, 0.5), EventPropagation::Stop);
    assert_eq!(editor.session().selected_ring(), None);
    assert!(editor.session().editing_vertices().is_empty());
    assert!(editor.select_tool(ToolKind::None).is_ok());
}

#[test]
fn test_exit_mid_drag_restores_map() {
    let (mut editor, _log) = editor();
    draw_square(&mut editor, 0.0, 0.0);
    editor.select_tool(ToolKind::Edit).unwrap();
    click_at(&mut editor, 0.005, 0.005, EventTarget::Ring(0));
    let down = pointer(&editor, 0.0, 0.0, EventTarget::VertexMarker(0));
    editor.handle_input(&InputEvent::PointerDown {
        input: down,
        button: PointerButton::Primary,
    });

    editor.exit();
    assert_eq!(editor.tool_kind(), ToolKind::None);
    assert!(editor.map().dragging_enabled());
    assert_eq!(editor.map().interaction.last(), Some(&true));
    assert!(editor.session().completed().is_empty());
}

#[test]
fn test_delete_then_cancel_restores_draft() {
    let (mut editor, _log) = editor();
    draw_square(&mut editor, 0.0, 0.0);
    draw_square(&mut editor, 1.0, 1.0);
    editor.select_tool(ToolKind::Delete).unwrap();

    click_at(&mut editor, 0.005, 0.005, EventTarget::Ring(0));
    assert_eq!(editor.session().draft().len(), 1);
    assert_eq!(editor.session().completed().len(), 2);
    assert!(editor.available_aids(None).contains(&Aid::Save));

    editor.cancel();
    assert_eq!(editor.session().draft().len(), 2);

    click_at(&mut editor, 1.005, 1.005, EventTarget::Ring(1));
    editor.save().unwrap();
    assert_eq!(editor.session().completed().len(), 1);
    assert_eq!(editor.session().completed()[0][0], LatLng::new(0.0, 0.0));
}

#[test]
fn test_meter_measures_without_committing() {
    let (mut editor, _log) = editor();
    editor.select_tool(ToolKind::Meter).unwrap();
    for corner in square_corners(0.0, 0.0, 0.01) {
        click(&mut editor, corner.lat, corner.lng);
    }

    assert_eq!(editor.session().preview_ring().len(), 5);
    assert!(editor.session().history().is_empty());
    let measurement = editor.measurement();
    assert!((measurement.area_hectares - 123.6).abs() < 1.0);
    // open path through the corners, no closing leg
    assert!((measurement.perimeter_km - 3.33).abs() < 0.05);

    // a click near the start is just another vertex here
    click(&mut editor, 0.000_01, 0.0);
    assert!(editor.session().completed().is_empty());
    assert!(editor.select_tool(ToolKind::Draw).is_err());
    assert_eq!(editor.apply_aid(Aid::Undo, None), AidOutcome::Ignored);

    editor.cancel();
    assert_eq!(editor.measurement(), Default::default());
    assert!(editor.select_tool(ToolKind::Draw).is_ok());
}

#[test]
fn test_meter_reads_distance_from_second_click() {
    let (mut editor, _log) = editor();
    editor.select_tool(ToolKind::Meter).unwrap();
    click(&mut editor, 0.0, 0.0);
    assert_eq!(editor.measurement(), Default::default());

    click(&mut editor, 0.0, 0.01);
    let measurement = editor.measurement();
    assert_eq!(measurement.area_hectares, 0.0);
    assert!((measurement.perimeter_km - 1.11).abs() < 0.01);

    click(&mut editor, 0.01, 0.01);
    let measurement = editor.measurement();
    assert!(measurement.area_hectares > 0.0);
    assert!((measurement.perimeter_km - 2.22).abs() < 0.02);
}

#[test]
fn test_ring_cycling_wraps_and_flies() {
    let (mut editor, log) = editor();
    draw_square(&mut editor, 0.0, 0.0);
    draw_square(&mut editor, 1.0, 1.0);
    draw_square(&mut editor, 2.0, 2.0);

    assert_eq!(editor.previous_ring(), Some(2));
    assert_eq!(editor.next_ring(), Some(0));
    assert_eq!(editor.next_ring(), Some(1));
    assert_eq!(editor.next_ring(), Some(2));
    assert_eq!(editor.next_ring(), Some(0));

    let flights = &editor.map().flights;
    assert_eq!(flights.len(), 5);
    assert_eq!(flights[0].south_west, LatLng::new(2.0, 2.0));
    assert!(log.events().contains(&EditorEvent::PreviewIndexChanged { index: 1 }));
}
