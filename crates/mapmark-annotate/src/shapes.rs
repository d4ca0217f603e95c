//! Committed shape records.

use crate::render::{RenderHandle, RenderStyle};
use mapmark_core::{EntityId, ShapeKind, Vec3};

/// Default colour for newly drawn shapes.
pub const DEFAULT_DRAW_COLOR: &str = "#ffffff";
/// Default opacity for newly drawn shapes.
pub const DEFAULT_DRAW_OPACITY: u8 = 100;
/// Default colour selected shapes are redrawn with.
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "#fbff00";

/// Clamps a user-entered opacity into `0..=100`.
pub fn clamp_opacity(value: i64) -> u8 {
    value.clamp(0, 100) as u8
}

/// A committed annotation on the map.
///
/// A shape is on screen exactly when it is effectively visible: its own flag
/// is set and, if grouped, its group is visible. The render handle is present
/// in that case only.
#[derive(Debug)]
pub struct Shape {
    pub(crate) id: EntityId,
    pub(crate) kind: ShapeKind,
    pub(crate) vertices: Vec<Vec3>,
    pub(crate) color: String,
    pub(crate) opacity: u8,
    pub(crate) name: String,
    pub(crate) individual_visible: bool,
    pub(crate) group_id: Option<EntityId>,
    pub(crate) group_visible: bool,
    pub(crate) highlight: Option<String>,
    pub(crate) handle: Option<RenderHandle>,
}

impl Shape {
    pub(crate) fn new(
        id: EntityId,
        kind: ShapeKind,
        vertices: Vec<Vec3>,
        color: String,
        opacity: u8,
    ) -> Self {
        Self {
            id,
            kind,
            vertices,
            color,
            opacity,
            name: format!("{} (ID:{})", kind.label(), id),
            individual_visible: true,
            group_id: None,
            group_visible: true,
            highlight: None,
            handle: None,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// The shape's own colour, regardless of highlighting.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Stored opacity. Kept for points too, where the surface ignores it.
    pub fn opacity(&self) -> u8 {
        self.opacity
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn individual_visible(&self) -> bool {
        self.individual_visible
    }

    pub fn group_id(&self) -> Option<EntityId> {
        self.group_id
    }

    /// Individual flag AND the owning group's flag.
    pub fn effective_visible(&self) -> bool {
        self.individual_visible && self.group_visible
    }

    /// Whether the shape is currently drawn in a highlight colour.
    pub fn is_highlighted(&self) -> bool {
        self.highlight.is_some()
    }

    /// Whether a primitive for this shape is currently on the surface.
    pub fn is_rendered(&self) -> bool {
        self.handle.is_some()
    }

    pub fn render_handle(&self) -> Option<&RenderHandle> {
        self.handle.as_ref()
    }

    /// Style the surface should draw this shape with right now.
    pub(crate) fn display_style(&self) -> RenderStyle {
        let color = self.highlight.as_deref().unwrap_or(&self.color);
        RenderStyle::new(color, self.opacity)
    }
}
