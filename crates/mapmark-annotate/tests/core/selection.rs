use crate::common::{at, draw, draw_point, new_state, square};
use mapmark_core::{AnnotationError, ShapeKind};

#[test]
fn test_non_additive_replaces_selection() {
    let mut state = new_state();
    let a = draw_point(&mut state, 0.0, 0.0);
    let b = draw_point(&mut state, 1.0, 0.0);

    state.select_shape(a, false).unwrap();
    state.select_shape(b, false).unwrap();

    assert_eq!(state.selection().selected(), &[b]);
    assert!(!state.shapes().get(a).unwrap().is_highlighted());
    assert!(state.shapes().get(b).unwrap().is_highlighted());
}

#[test]
fn test_highlight_color_on_surface() {
    let mut state = new_state();
    let a = draw_point(&mut state, 0.0, 0.0);
    draw_point(&mut state, 1.0, 0.0);

    state.select_shape(a, false).unwrap();
    assert_eq!(state.surface().primitives_with_color("#fbff00").count(), 1);

    state.deselect_all_shapes();
    assert_eq!(state.surface().primitives_with_color("#fbff00").count(), 0);
    assert_eq!(state.surface().primitives_with_color("#ffffff").count(), 2);
}

#[test]
fn test_delete_selected() {
    let mut state = new_state();
    let a = draw_point(&mut state, 0.0, 0.0);
    let b = draw_point(&mut state, 1.0, 0.0);
    let c = draw_point(&mut state, 2.0, 0.0);

    state.select_shape(a, true).unwrap();
    state.select_shape(c, true).unwrap();
    assert_eq!(state.delete_selected(), 2);

    assert!(state.selection().is_empty());
    assert_eq!(state.shapes().ids().collect::<Vec<_>>(), vec![b]);
    assert_eq!(state.surface().live_count(), 1);
}

#[test]
fn test_edit_selected_single_renames() {
    let mut state = new_state();
    let id = draw(&mut state, ShapeKind::Polygon, &square());

    state.select_shape(id, false).unwrap();
    state.edit_selected("#252525", 75, Some("Field"));

    let shape = state.shapes().get(id).unwrap();
    assert_eq!(shape.color(), "#252525");
    assert_eq!(shape.opacity(), 75);
    assert_eq!(shape.name(), "Field");
    assert!(!shape.is_highlighted());
    assert!(state.selection().is_empty());
}

#[test]
fn test_edit_selected_many_keeps_names() {
    let mut state = new_state();
    let a = draw_point(&mut state, 0.0, 0.0);
    let b = draw_point(&mut state, 1.0, 0.0);

    state.select_shape(a, true).unwrap();
    state.select_shape(b, true).unwrap();
    state.edit_selected("#00ff00", -20, Some("ignored"));

    for id in [a, b] {
        let shape = state.shapes().get(id).unwrap();
        assert_eq!(shape.color(), "#00ff00");
        assert_eq!(shape.opacity(), 0);
        assert_eq!(shape.name(), format!("Point (ID:{})", id));
    }
}

#[test]
fn test_map_click_clears_selection() {
    let mut state = new_state();
    let a = draw_point(&mut state, 0.0, 0.0);
    state.disable_drawing();
    state.select_shape(a, false).unwrap();

    state.handle_click(at(5.0, 5.0)).unwrap();
    assert!(state.selection().is_empty());
    assert!(!state.shapes().get(a).unwrap().is_highlighted());
}

#[test]
fn test_select_stale_id() {
    let mut state = new_state();
    let a = draw_point(&mut state, 0.0, 0.0);
    state.delete_shape(a).unwrap();

    assert_eq!(
        state.select_shape(a, false).unwrap_err(),
        AnnotationError::shape_not_found(a)
    );
}

#[test]
fn test_set_highlight_color_keeps_order() {
    let mut state = new_state();
    let a = draw_point(&mut state, 0.0, 0.0);
    let b = draw_point(&mut state, 1.0, 0.0);
    state.select_shape(b, true).unwrap();
    state.select_shape(a, true).unwrap();

    state.set_highlight_color("#ff00ff");
    assert_eq!(state.selection().selected(), &[b, a]);
    assert_eq!(state.surface().primitives_with_color("#ff00ff").count(), 2);
}
