use mapmark_annotate::{AnnotationState, RecordingSurface, ScreenPosition};
use mapmark_core::{EntityId, ShapeKind};

pub fn new_state() -> AnnotationState<RecordingSurface> {
    AnnotationState::new(RecordingSurface::new())
}

pub fn at(x: f64, y: f64) -> ScreenPosition {
    ScreenPosition::new(x, y)
}

/// Draws a shape by clicking each point and terminating.
pub fn draw(
    state: &mut AnnotationState<RecordingSurface>,
    kind: ShapeKind,
    points: &[(f64, f64)],
) -> EntityId {
    state.enable_drawing();
    state.set_shape_kind(kind);
    if kind == ShapeKind::Point {
        let (x, y) = points[0];
        return state.handle_click(at(x, y)).unwrap().unwrap();
    }
    for &(x, y) in points {
        state.handle_pointer_move(at(x, y));
        state.handle_click(at(x, y)).unwrap();
    }
    state.terminate_shape().unwrap().unwrap()
}

pub fn draw_point(state: &mut AnnotationState<RecordingSurface>, x: f64, y: f64) -> EntityId {
    draw(state, ShapeKind::Point, &[(x, y)])
}

pub fn square() -> Vec<(f64, f64)> {
    vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]
}
