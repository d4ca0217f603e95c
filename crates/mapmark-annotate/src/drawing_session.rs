//! Rubber-band drawing of one in-progress shape.
//!
//! While a line or polygon is being drawn the pending vertex list always
//! ends with a live preview vertex that follows the pointer; every other
//! element is a committed anchor. The surface shows one marker per anchor,
//! a floating marker at the pointer, and a preview of the whole list.

use crate::render::{RenderHandle, RenderStyle, RenderSurface};
use crate::shape_registry::ShapeRegistry;
use crate::shapes::{DEFAULT_DRAW_COLOR, DEFAULT_DRAW_OPACITY};
use mapmark_core::{AnnotationError, EntityId, ShapeKind, Vec3};

/// Whether clicks on the map place vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingMode {
    #[default]
    Idle,
    Active,
}

/// State machine for the shape currently being drawn.
#[derive(Debug)]
pub struct DrawingSession {
    mode: DrawingMode,
    shape_kind: ShapeKind,
    color: String,
    opacity: u8,
    pending: Vec<Vec3>,
    preview: Option<RenderHandle>,
    floating: Option<RenderHandle>,
    anchor_markers: Vec<RenderHandle>,
}

impl DrawingSession {
    pub fn new(shape_kind: ShapeKind, color: impl Into<String>, opacity: u8) -> Self {
        Self {
            mode: DrawingMode::Idle,
            shape_kind,
            color: color.into(),
            opacity: opacity.min(100),
            pending: Vec::new(),
            preview: None,
            floating: None,
            anchor_markers: Vec::new(),
        }
    }

    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    pub fn is_active(&self) -> bool {
        self.mode == DrawingMode::Active
    }

    /// Starts accepting clicks. No vertex is placed yet.
    pub fn enable(&mut self) {
        if self.mode == DrawingMode::Idle {
            tracing::info!("Drawing mode enabled ({})", self.shape_kind);
        }
        self.mode = DrawingMode::Active;
    }

    /// Stops accepting clicks and cancels any in-progress shape.
    pub fn disable(&mut self, surface: &mut dyn RenderSurface) {
        self.cancel_shape(surface);
        if self.mode == DrawingMode::Active {
            tracing::info!("Drawing mode disabled");
        }
        self.mode = DrawingMode::Idle;
    }

    pub fn shape_kind(&self) -> ShapeKind {
        self.shape_kind
    }

    /// Changes the kind of the next shape, cancelling the current one.
    pub fn set_shape_kind(&mut self, surface: &mut dyn RenderSurface, kind: ShapeKind) {
        if kind != self.shape_kind {
            self.cancel_shape(surface);
            self.shape_kind = kind;
            tracing::debug!("Shape kind set to {}", kind);
        }
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Colour used for the next committed shape.
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    pub fn opacity(&self) -> u8 {
        self.opacity
    }

    pub fn set_opacity(&mut self, opacity: u8) {
        self.opacity = opacity.min(100);
    }

    /// Pending vertices, live preview last.
    pub fn pending_vertices(&self) -> &[Vec3] {
        &self.pending
    }

    /// Committed anchors, excluding the live preview.
    pub fn anchor_count(&self) -> usize {
        self.pending.len().saturating_sub(1)
    }

    /// Whether a line or polygon is in progress.
    pub fn has_pending_shape(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Handles a click at a resolved world position.
    ///
    /// Points are committed straight away and their id returned. For lines
    /// and polygons the click adds an anchor and `None` is returned. Clicks
    /// while idle are ignored.
    pub fn click(
        &mut self,
        surface: &mut dyn RenderSurface,
        shapes: &mut ShapeRegistry,
        position: Vec3,
    ) -> Result<Option<EntityId>, AnnotationError> {
        if !self.is_active() {
            return Ok(None);
        }

        if self.shape_kind == ShapeKind::Point {
            let id = shapes.create_from_vertices(
                surface,
                ShapeKind::Point,
                vec![position],
                &self.color,
                self.opacity,
            )?;
            return Ok(Some(id));
        }

        if self.pending.is_empty() {
            self.pending.push(position);
            self.pending.push(position);
            self.floating = Some(self.draw_marker(surface, position));
        } else {
            let preview_slot = self.pending.len() - 1;
            self.pending.insert(preview_slot, position);
            self.pending[preview_slot + 1] = position;
            self.move_floating(surface, position);
        }
        let marker = self.draw_marker(surface, position);
        self.anchor_markers.push(marker);
        self.refresh_preview(surface);
        Ok(None)
    }

    /// Moves the live preview vertex to the pointer.
    pub fn pointer_moved(&mut self, surface: &mut dyn RenderSurface, position: Vec3) {
        if !self.is_active() || self.preview.is_none() {
            return;
        }
        if let Some(last) = self.pending.last_mut() {
            *last = position;
        }
        self.move_floating(surface, position);
        self.refresh_preview(surface);
    }

    /// Commits the in-progress shape if it has enough anchors.
    ///
    /// Below the kind's minimum this behaves exactly like
    /// [`cancel_shape`](Self::cancel_shape) and returns `None`.
    pub fn terminate(
        &mut self,
        surface: &mut dyn RenderSurface,
        shapes: &mut ShapeRegistry,
    ) -> Result<Option<EntityId>, AnnotationError> {
        if self.pending.is_empty() {
            return Ok(None);
        }
        if self.anchor_count() < self.shape_kind.min_vertices() {
            tracing::debug!(
                "Discarding {} with {} anchors",
                self.shape_kind,
                self.anchor_count()
            );
            self.cancel_shape(surface);
            return Ok(None);
        }

        let mut vertices = std::mem::take(&mut self.pending);
        vertices.pop();
        self.clear_render_state(surface);
        shapes
            .create_from_vertices(surface, self.shape_kind, vertices, &self.color, self.opacity)
            .map(Some)
    }

    /// Discards the in-progress shape and its preview primitives.
    pub fn cancel_shape(&mut self, surface: &mut dyn RenderSurface) {
        if !self.pending.is_empty() {
            tracing::debug!("Cancelled {} in progress", self.shape_kind);
        }
        self.pending.clear();
        self.clear_render_state(surface);
    }

    /// Removes the most recent anchor and its marker.
    ///
    /// With one anchor or fewer left the whole shape is cancelled instead.
    /// Returns false if nothing was in progress.
    pub fn cancel_last_vertex(&mut self, surface: &mut dyn RenderSurface) -> bool {
        if self.pending.is_empty() {
            return false;
        }
        if self.anchor_count() <= 1 {
            self.cancel_shape(surface);
            return true;
        }

        let last_anchor = self.pending.len() - 2;
        self.pending.remove(last_anchor);
        if let Some(marker) = self.anchor_markers.pop() {
            surface.dematerialize(marker);
        }
        self.refresh_preview(surface);
        true
    }

    fn style(&self) -> RenderStyle {
        RenderStyle::new(self.color.as_str(), self.opacity)
    }

    fn draw_marker(&self, surface: &mut dyn RenderSurface, position: Vec3) -> RenderHandle {
        surface.materialize(ShapeKind::Point, &[position], &self.style())
    }

    fn move_floating(&mut self, surface: &mut dyn RenderSurface, position: Vec3) {
        if let Some(old) = self.floating.take() {
            surface.dematerialize(old);
            self.floating = Some(self.draw_marker(surface, position));
        }
    }

    fn refresh_preview(&mut self, surface: &mut dyn RenderSurface) {
        if let Some(old) = self.preview.take() {
            surface.dematerialize(old);
        }
        if !self.pending.is_empty() {
            let style = self.style();
            self.preview = Some(surface.materialize(self.shape_kind, &self.pending, &style));
        }
    }

    fn clear_render_state(&mut self, surface: &mut dyn RenderSurface) {
        if let Some(handle) = self.preview.take() {
            surface.dematerialize(handle);
        }
        if let Some(handle) = self.floating.take() {
            surface.dematerialize(handle);
        }
        for marker in self.anchor_markers.drain(..) {
            surface.dematerialize(marker);
        }
    }
}

impl Default for DrawingSession {
    fn default() -> Self {
        Self::new(ShapeKind::default(), DEFAULT_DRAW_COLOR, DEFAULT_DRAW_OPACITY)
    }
}
