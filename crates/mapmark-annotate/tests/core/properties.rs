use crate::common::{at, draw_point, new_state};
use mapmark_core::ShapeKind;
use proptest::prelude::*;

proptest! {
    #[test]
    fn terminate_below_minimum_is_cancel(
        polygon in any::<bool>(),
        anchors in 0usize..3,
    ) {
        let kind = if polygon { ShapeKind::Polygon } else { ShapeKind::Line };
        prop_assume!(anchors < kind.min_vertices());

        let mut state = new_state();
        state.enable_drawing();
        state.set_shape_kind(kind);
        for i in 0..anchors {
            state.handle_click(at(i as f64, 1.0)).unwrap();
        }

        prop_assert_eq!(state.terminate_shape().unwrap(), None);
        prop_assert!(state.shapes().is_empty());
        prop_assert!(state.session().pending_vertices().is_empty());
        prop_assert_eq!(state.surface().live_count(), 0);
    }

    #[test]
    fn non_additive_select_leaves_only_target(
        count in 1usize..6,
        ops in prop::collection::vec((0usize..6, any::<bool>()), 0..12),
        target in 0usize..6,
    ) {
        let mut state = new_state();
        let ids: Vec<u64> = (0..count).map(|i| draw_point(&mut state, i as f64, 0.0)).collect();
        for (index, additive) in ops {
            state.select_shape(ids[index % count], additive).unwrap();
        }

        let target = ids[target % count];
        state.select_shape(target, false).unwrap();
        state.select_shape(target, false).unwrap();

        prop_assert_eq!(state.selection().selected(), &[target]);
        for &id in &ids {
            prop_assert_eq!(state.shapes().get(id).unwrap().is_highlighted(), id == target);
        }
    }

    #[test]
    fn disband_restores_individual_visibility(
        flags in prop::collection::vec(any::<bool>(), 1..8),
        group_visible in any::<bool>(),
    ) {
        let mut state = new_state();
        let g = state.create_group();
        let mut ids = Vec::new();
        for (i, &visible) in flags.iter().enumerate() {
            let id = draw_point(&mut state, i as f64, 0.0);
            state.add_to_group(g, id).unwrap();
            state.set_shape_visibility(id, visible).unwrap();
            ids.push(id);
        }
        state.set_group_visibility(g, group_visible).unwrap();

        state.disband_group(g).unwrap();

        prop_assert!(state.shapes().iter().all(|s| s.group_id() != Some(g)));
        for (&id, &visible) in ids.iter().zip(&flags) {
            let shape = state.shapes().get(id).unwrap();
            prop_assert_eq!(shape.effective_visible(), visible);
            prop_assert_eq!(shape.is_rendered(), visible);
        }
    }
}
