use crate::render::RenderSurface;
use crate::shape_registry::ShapeRegistry;
use crate::shapes::DEFAULT_HIGHLIGHT_COLOR;
use mapmark_core::{AnnotationError, EntityId};

/// Tracks the selected shapes and keeps their highlight in step.
///
/// Selection is an ordered list without duplicates. Every id in it is drawn
/// in the highlight colour; everything else is drawn in its own colour.
#[derive(Debug, Clone)]
pub struct SelectionManager {
    selected: Vec<EntityId>,
    highlight_color: String,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::with_highlight_color(DEFAULT_HIGHLIGHT_COLOR)
    }

    pub fn with_highlight_color(color: impl Into<String>) -> Self {
        Self {
            selected: Vec::new(),
            highlight_color: color.into(),
        }
    }

    /// Selects a shape with click/ctrl-click semantics.
    ///
    /// Without `additive` the selection always ends as exactly `[id]`. With
    /// `additive` the id is toggled in or out of the current selection.
    pub fn select(
        &mut self,
        shapes: &mut ShapeRegistry,
        surface: &mut dyn RenderSurface,
        id: EntityId,
        additive: bool,
    ) -> Result<(), AnnotationError> {
        shapes.get_or_err(id)?;

        if self.is_selected(id) && additive {
            self.deselect(shapes, surface, id)?;
            return Ok(());
        }

        if !additive {
            self.deselect_all(shapes, surface);
        }
        shapes.highlight(surface, id, &self.highlight_color)?;
        self.selected.push(id);
        tracing::debug!("Selected shape {}", id);
        Ok(())
    }

    /// Removes `id` from the selection and restores its own colour.
    ///
    /// Returns false if it was not selected.
    pub fn deselect(
        &mut self,
        shapes: &mut ShapeRegistry,
        surface: &mut dyn RenderSurface,
        id: EntityId,
    ) -> Result<bool, AnnotationError> {
        if !self.is_selected(id) {
            return Ok(false);
        }
        shapes.unhighlight(surface, id)?;
        self.selected.retain(|&s| s != id);
        tracing::debug!("Deselected shape {}", id);
        Ok(true)
    }

    /// Drops `id` from the bookkeeping without touching its rendering.
    ///
    /// Used when the shape itself is about to disappear.
    pub fn forget(&mut self, id: EntityId) -> bool {
        let before = self.selected.len();
        self.selected.retain(|&s| s != id);
        before != self.selected.len()
    }

    /// Restores every selected shape's colour and clears the selection.
    pub fn deselect_all(&mut self, shapes: &mut ShapeRegistry, surface: &mut dyn RenderSurface) {
        for id in std::mem::take(&mut self.selected) {
            if let Err(e) = shapes.unhighlight(surface, id) {
                tracing::warn!("Selected shape vanished before deselect: {}", e);
            }
        }
    }

    /// Changes the highlight colour and re-highlights the current selection.
    pub fn set_highlight_color(
        &mut self,
        shapes: &mut ShapeRegistry,
        surface: &mut dyn RenderSurface,
        color: &str,
    ) {
        self.highlight_color = color.to_string();
        for &id in &self.selected {
            if let Err(e) = shapes.highlight(surface, id, color) {
                tracing::warn!("Selected shape vanished before re-highlight: {}", e);
            }
        }
    }

    pub fn highlight_color(&self) -> &str {
        &self.highlight_color
    }

    /// Selected ids in insertion order.
    pub fn selected(&self) -> &[EntityId] {
        &self.selected
    }

    pub fn first_selected(&self) -> Option<EntityId> {
        self.selected.first().copied()
    }

    pub fn is_selected(&self, id: EntityId) -> bool {
        self.selected.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

impl Default for SelectionManager {
    fn default() -> Self {
        Self::new()
    }
}
