use crate::common::{draw_point, new_state};
use mapmark_core::AnnotationError;

#[test]
fn test_group_visibility_respects_individual_flag() {
    let mut state = new_state();
    let a = draw_point(&mut state, 0.0, 0.0);
    let b = draw_point(&mut state, 1.0, 0.0);
    let g = state.create_group();
    state.add_to_group(g, a).unwrap();
    state.add_to_group(g, b).unwrap();
    state.set_shape_visibility(b, false).unwrap();

    state.set_group_visibility(g, false).unwrap();
    assert_eq!(state.surface().live_count(), 0);
    assert!(state.shapes().get(a).unwrap().individual_visible());

    state.set_group_visibility(g, true).unwrap();
    assert!(state.shapes().get(a).unwrap().is_rendered());
    assert!(!state.shapes().get(b).unwrap().is_rendered());
}

#[test]
fn test_shape_shown_while_group_hidden_stays_hidden() {
    let mut state = new_state();
    let a = draw_point(&mut state, 0.0, 0.0);
    let g = state.create_group();
    state.add_to_group(g, a).unwrap();
    state.set_group_visibility(g, false).unwrap();

    state.set_shape_visibility(a, true).unwrap();
    assert!(!state.shapes().get(a).unwrap().is_rendered());
    assert!(!state.shapes().get(a).unwrap().effective_visible());
}

#[test]
fn test_adding_to_hidden_group_hides_shape() {
    let mut state = new_state();
    let a = draw_point(&mut state, 0.0, 0.0);
    let g = state.create_group();
    state.set_group_visibility(g, false).unwrap();

    state.add_to_group(g, a).unwrap();
    assert!(!state.shapes().get(a).unwrap().is_rendered());
}

#[test]
fn test_group_selected_shapes() {
    let mut state = new_state();
    let a = draw_point(&mut state, 0.0, 0.0);
    let b = draw_point(&mut state, 1.0, 0.0);
    assert_eq!(state.group_selected_shapes(), None);

    state.select_shape(a, true).unwrap();
    state.select_shape(b, true).unwrap();
    let g = state.group_selected_shapes().unwrap();

    let group = state.groups().get(g).unwrap();
    assert_eq!(group.members().iter().copied().collect::<Vec<_>>(), vec![a, b]);
    assert!(state.selection().is_empty());
    assert_eq!(state.shapes().get(a).unwrap().group_id(), Some(g));
}

#[test]
fn test_add_selected_to_unknown_group() {
    let mut state = new_state();
    let a = draw_point(&mut state, 0.0, 0.0);
    state.select_shape(a, false).unwrap();

    assert_eq!(
        state.add_selected_to_group(77).unwrap_err(),
        AnnotationError::group_not_found(77)
    );
    assert_eq!(state.selection().selected(), &[a]);
}

#[test]
fn test_disband_releases_members() {
    let mut state = new_state();
    let a = draw_point(&mut state, 0.0, 0.0);
    let b = draw_point(&mut state, 1.0, 0.0);
    let g = state.create_group();
    state.add_to_group(g, a).unwrap();
    state.add_to_group(g, b).unwrap();
    state.set_shape_visibility(b, false).unwrap();
    state.set_group_visibility(g, false).unwrap();
    state.select_group(g, false).unwrap();

    let group = state.disband_group(g).unwrap();
    assert_eq!(group.members().len(), 2);
    assert!(!state.groups().contains(g));
    assert_eq!(state.groups().selected_group(), None);

    let a_shape = state.shapes().get(a).unwrap();
    assert_eq!(a_shape.group_id(), None);
    assert!(a_shape.is_rendered());
    assert!(!state.shapes().get(b).unwrap().is_rendered());
}

#[test]
fn test_select_group_pointer_toggles() {
    let mut state = new_state();
    let a = draw_point(&mut state, 0.0, 0.0);
    let g = state.create_group();
    state.add_to_group(g, a).unwrap();
    state.select_shape(a, false).unwrap();

    state.select_group(g, false).unwrap();
    assert_eq!(state.groups().selected_group(), Some(g));
    assert!(state.selection().is_empty());

    state.select_group(g, false).unwrap();
    assert_eq!(state.groups().selected_group(), None);
}

#[test]
fn test_additive_group_select_expands_selection() {
    let mut state = new_state();
    let a = draw_point(&mut state, 0.0, 0.0);
    let b = draw_point(&mut state, 1.0, 0.0);
    let c = draw_point(&mut state, 2.0, 0.0);
    let g = state.create_group();
    state.add_to_group(g, a).unwrap();
    state.add_to_group(g, b).unwrap();
    state.select_group(g, false).unwrap();
    state.select_shape(c, true).unwrap();
    state.select_shape(a, true).unwrap();

    state.select_group(g, true).unwrap();
    assert_eq!(state.groups().selected_group(), None);
    assert_eq!(state.selection().selected(), &[c, a, b]);
}

#[test]
fn test_rename_and_toggle_group() {
    let mut state = new_state();
    let a = draw_point(&mut state, 0.0, 0.0);
    let g = state.create_group();
    state.add_to_group(g, a).unwrap();

    state.rename_group(g, "Convoy").unwrap();
    assert_eq!(state.groups().get(g).unwrap().name(), "Convoy");

    assert!(!state.toggle_group_visibility(g).unwrap());
    assert_eq!(state.surface().live_count(), 0);
    assert!(state.toggle_group_visibility(g).unwrap());
    assert_eq!(state.surface().live_count(), 1);
}

#[test]
fn test_grouping_selected_shape_clears_current_group() {
    let mut state = new_state();
    let a = draw_point(&mut state, 0.0, 0.0);
    let g = state.create_group();
    state.select_group(g, false).unwrap();
    state.select_shape(a, false).unwrap();
    assert_eq!(state.groups().selected_group(), Some(g));

    state.add_to_group(g, a).unwrap();
    assert_eq!(state.shapes().get(a).unwrap().group_id(), Some(g));
    assert_eq!(state.selection().selected(), &[a]);
    assert_eq!(state.groups().selected_group(), None);
}

#[test]
fn test_grouping_unselected_shape_keeps_current_group() {
    let mut state = new_state();
    let a = draw_point(&mut state, 0.0, 0.0);
    let g = state.create_group();
    state.select_group(g, false).unwrap();

    state.add_to_group(g, a).unwrap();
    assert_eq!(state.groups().selected_group(), Some(g));
}
