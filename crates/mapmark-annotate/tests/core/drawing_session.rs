use crate::common::{at, draw, new_state, square};
use mapmark_annotate::{AnnotationState, DrawingMode, RecordingSurface};
use mapmark_core::{ShapeKind, Vec3};

#[test]
fn test_point_commits_immediately_and_stays_active() {
    let mut state = new_state();
    state.enable_drawing();

    let first = state.handle_click(at(1.0, 2.0)).unwrap();
    let second = state.handle_click(at(3.0, 4.0)).unwrap();

    assert!(first.is_some());
    assert!(second.is_some());
    assert_eq!(state.session().mode(), DrawingMode::Active);
    assert_eq!(state.shapes().len(), 2);
    assert_eq!(
        state.shapes().get(first.unwrap()).unwrap().vertices(),
        &[Vec3::new(1.0, 2.0, 0.0)]
    );
}

#[test]
fn test_polygon_commit_drops_preview() {
    let mut state = new_state();
    let id = draw(&mut state, ShapeKind::Polygon, &square());

    let shape = state.shapes().get(id).unwrap();
    assert_eq!(shape.kind(), ShapeKind::Polygon);
    assert_eq!(shape.vertices().len(), 4);
    assert_eq!(shape.name(), format!("Polygon (ID:{})", id));
    assert!(state.session().pending_vertices().is_empty());
    // only the committed polygon remains on screen
    assert_eq!(state.surface().live_count(), 1);
}

#[test]
fn test_line_terminate_with_one_anchor_discards() {
    let mut state = new_state();
    state.enable_drawing();
    state.set_shape_kind(ShapeKind::Line);
    state.handle_click(at(0.0, 0.0)).unwrap();
    state.handle_pointer_move(at(5.0, 5.0));

    assert_eq!(state.terminate_shape().unwrap(), None);
    assert!(state.shapes().is_empty());
    assert!(!state.session().has_pending_shape());
    assert_eq!(state.surface().live_count(), 0);
}

#[test]
fn test_preview_uses_session_kind() {
    let mut state = new_state();
    state.enable_drawing();
    state.set_shape_kind(ShapeKind::Polygon);
    state.handle_click(at(0.0, 0.0)).unwrap();
    state.handle_pointer_move(at(4.0, 0.0));

    let polygons = state
        .surface()
        .primitives()
        .filter(|p| p.kind == ShapeKind::Polygon)
        .count();
    assert_eq!(polygons, 1);
}

#[test]
fn test_disable_cancels_pending_shape() {
    let mut state = new_state();
    state.enable_drawing();
    state.set_shape_kind(ShapeKind::Line);
    state.handle_click(at(0.0, 0.0)).unwrap();
    state.handle_click(at(1.0, 1.0)).unwrap();

    state.disable_drawing();
    assert_eq!(state.session().mode(), DrawingMode::Idle);
    assert!(!state.session().has_pending_shape());
    assert_eq!(state.surface().live_count(), 0);

    assert_eq!(state.handle_click(at(2.0, 2.0)).unwrap(), None);
    assert!(state.shapes().is_empty());
}

#[test]
fn test_click_off_globe_is_ignored() {
    let mut surface = RecordingSurface::new();
    surface.set_pointer_off_globe(true);
    let mut state = AnnotationState::new(surface);
    state.enable_drawing();

    assert_eq!(state.handle_click(at(1.0, 1.0)).unwrap(), None);
    assert!(state.shapes().is_empty());
}

#[test]
fn test_draw_settings_apply_to_new_shapes() {
    let mut state = new_state();
    state.set_draw_color("#ff0000");
    state.set_draw_opacity(140);
    let id = draw(&mut state, ShapeKind::Line, &[(0.0, 0.0), (1.0, 1.0)]);

    let shape = state.shapes().get(id).unwrap();
    assert_eq!(shape.color(), "#ff0000");
    assert_eq!(shape.opacity(), 100);
}
