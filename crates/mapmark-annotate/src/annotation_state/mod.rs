//! Annotation controller for input and UI integration.
//!
//! [`AnnotationState`] owns the rendering surface, the shared id counter and
//! every annotation component, and is the one object external glue talks to.
//! Operations that span components validate all ids up front and then apply
//! registry, group and selection changes together.
//!
//! Submodules:
//! - `editing`: shape deletion, visibility, restyling and selection
//! - `groups`: group creation, membership, visibility and selection
//! - `input`: pointer and keyboard dispatch

mod editing;
mod groups;
mod input;

pub use input::{InputFocus, Key, KeyAction, Modifiers};

use crate::drawing_session::DrawingSession;
use crate::group_registry::GroupRegistry;
use crate::render::RenderSurface;
use crate::selection_manager::SelectionManager;
use crate::shape_registry::ShapeRegistry;
use crate::shapes::{clamp_opacity, DEFAULT_DRAW_COLOR, DEFAULT_DRAW_OPACITY, DEFAULT_HIGHLIGHT_COLOR};
use mapmark_core::{shared_ids, ShapeKind, SharedIds};

/// Drawing defaults applied when the controller is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawingDefaults {
    pub shape_kind: ShapeKind,
    pub color: String,
    pub opacity: u8,
    pub highlight_color: String,
}

impl Default for DrawingDefaults {
    fn default() -> Self {
        Self {
            shape_kind: ShapeKind::Point,
            color: DEFAULT_DRAW_COLOR.to_string(),
            opacity: DEFAULT_DRAW_OPACITY,
            highlight_color: DEFAULT_HIGHLIGHT_COLOR.to_string(),
        }
    }
}

/// Top-level annotation controller.
#[derive(Debug)]
pub struct AnnotationState<S: RenderSurface> {
    pub(crate) surface: S,
    pub(crate) ids: SharedIds,
    pub(crate) session: DrawingSession,
    pub(crate) shapes: ShapeRegistry,
    pub(crate) selection: SelectionManager,
    pub(crate) groups: GroupRegistry,
}

impl<S: RenderSurface> AnnotationState<S> {
    pub fn new(surface: S) -> Self {
        Self::with_defaults(surface, DrawingDefaults::default())
    }

    pub fn with_defaults(surface: S, defaults: DrawingDefaults) -> Self {
        let ids = shared_ids();
        Self {
            surface,
            session: DrawingSession::new(defaults.shape_kind, defaults.color, defaults.opacity),
            shapes: ShapeRegistry::new(ids.clone()),
            selection: SelectionManager::with_highlight_color(defaults.highlight_color),
            groups: GroupRegistry::new(ids.clone()),
            ids,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn session(&self) -> &DrawingSession {
        &self.session
    }

    pub fn shapes(&self) -> &ShapeRegistry {
        &self.shapes
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn groups(&self) -> &GroupRegistry {
        &self.groups
    }

    /// The id the next shape or group will receive.
    pub fn next_id(&self) -> u64 {
        self.ids.borrow().peek()
    }

    pub fn enable_drawing(&mut self) {
        self.session.enable();
    }

    pub fn disable_drawing(&mut self) {
        self.session.disable(&mut self.surface);
    }

    pub fn set_shape_kind(&mut self, kind: ShapeKind) {
        self.session.set_shape_kind(&mut self.surface, kind);
    }

    pub fn set_draw_color(&mut self, color: &str) {
        self.session.set_color(color);
    }

    /// Sets the opacity for new shapes, clamped to `0..=100`.
    pub fn set_draw_opacity(&mut self, opacity: i64) {
        self.session.set_opacity(clamp_opacity(opacity));
    }
}
