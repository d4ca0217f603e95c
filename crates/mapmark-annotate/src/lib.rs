//! # MapMark Annotate
//!
//! Interactive annotation engine for drawing points, lines and polygons over
//! a map surface.
//!
//! ## Core Components
//!
//! - **Drawing Session**: rubber-band state machine for the shape in progress
//! - **Shape Registry**: committed shapes, their styling and render handles
//! - **Selection Manager**: ordered multi-select with ctrl-toggle semantics
//! - **Group Registry**: named shape sets whose visibility cascades to members
//! - **Imagery Layers**: overlay layers with a visibility toggle and opacity
//!
//! ## Architecture
//!
//! ```text
//! AnnotationState (controller, owns the id counter)
//!   ├── DrawingSession ──commits──▶ ShapeRegistry
//!   ├── SelectionManager ──highlight──▶ ShapeRegistry
//!   ├── GroupRegistry ──visibility──▶ ShapeRegistry
//!   └── RenderSurface (map viewer)
//! ```
//!
//! The map viewer is reached only through the [`RenderSurface`] trait.
//! [`RecordingSurface`] is an in-memory implementation for headless use.

pub mod annotation_state;
pub mod drawing_session;
pub mod group_registry;
pub mod layers;
pub mod render;
pub mod selection_manager;
pub mod shape_registry;
pub mod shapes;

pub use annotation_state::{AnnotationState, DrawingDefaults, InputFocus, Key, KeyAction, Modifiers};
pub use drawing_session::{DrawingMode, DrawingSession};
pub use group_registry::{Group, GroupRegistry};
pub use layers::{ImageryLayer, ImageryLayers, ImagerySurface, LayerId};
pub use render::{
    Primitive, RecordingSurface, RenderHandle, RenderStyle, RenderSurface, ScreenPosition,
};
pub use selection_manager::SelectionManager;
pub use shape_registry::ShapeRegistry;
pub use shapes::{
    clamp_opacity, Shape, DEFAULT_DRAW_COLOR, DEFAULT_DRAW_OPACITY,
    DEFAULT_HIGHLIGHT_COLOR,
};
