//! Shape operations (delete, visibility, restyle, select) for the annotation controller.

use super::AnnotationState;
use crate::render::RenderSurface;
use crate::shapes::clamp_opacity;
use mapmark_core::{AnnotationError, EntityId};

impl<S: RenderSurface> AnnotationState<S> {
    /// Deletes a shape, dropping it from the selection and its group.
    pub fn delete_shape(&mut self, id: EntityId) -> Result<(), AnnotationError> {
        let group_id = self.shapes.get_or_err(id)?.group_id();

        self.selection.forget(id);
        if let Some(group_id) = group_id {
            self.groups.remove_member(group_id, id);
        }
        self.shapes.remove(&mut self.surface, id)?;
        Ok(())
    }

    /// Deletes every selected shape. Returns how many were removed.
    pub fn delete_selected(&mut self) -> usize {
        let selected = self.selection.selected().to_vec();
        let mut deleted = 0;
        for id in selected {
            match self.delete_shape(id) {
                Ok(()) => deleted += 1,
                Err(e) => tracing::warn!("Skipping selected shape: {}", e),
            }
        }
        deleted
    }

    pub fn set_shape_visibility(&mut self, id: EntityId, visible: bool) -> Result<(), AnnotationError> {
        self.shapes.set_visibility(&mut self.surface, id, visible)
    }

    /// Flips a shape's own visibility, returning the new value.
    pub fn toggle_shape_visibility(&mut self, id: EntityId) -> Result<bool, AnnotationError> {
        self.shapes.toggle_visibility(&mut self.surface, id)
    }

    /// Restyles and renames one shape.
    pub fn redraw_shape(
        &mut self,
        id: EntityId,
        color: &str,
        opacity: i64,
        name: &str,
    ) -> Result<(), AnnotationError> {
        self.shapes
            .redraw(&mut self.surface, id, color, clamp_opacity(opacity), name)
    }

    /// Applies colour and opacity to every selected shape, then clears the
    /// selection.
    ///
    /// `name` is applied only when exactly one shape is selected; otherwise
    /// each shape keeps its current name.
    pub fn edit_selected(&mut self, color: &str, opacity: i64, name: Option<&str>) {
        let opacity = clamp_opacity(opacity);
        let selected = self.selection.selected().to_vec();
        let single = selected.len() == 1;

        for id in selected {
            let Some(shape) = self.shapes.get(id) else {
                continue;
            };
            let new_name = match name {
                Some(name) if single => name.to_string(),
                _ => shape.name().to_string(),
            };
            if let Err(e) = self
                .shapes
                .redraw(&mut self.surface, id, color, opacity, &new_name)
            {
                tracing::warn!("Could not edit shape {}: {}", id, e);
            }
        }
        self.selection.deselect_all(&mut self.shapes, &mut self.surface);
    }

    /// Selects a shape, clearing the current group pointer if the shape
    /// belongs to that group.
    pub fn select_shape(&mut self, id: EntityId, additive: bool) -> Result<(), AnnotationError> {
        let group_id = self.shapes.get_or_err(id)?.group_id();
        self.selection
            .select(&mut self.shapes, &mut self.surface, id, additive)?;
        if group_id.is_some() && group_id == self.groups.selected_group() {
            self.groups.deselect_group();
        }
        Ok(())
    }

    pub fn deselect_shape(&mut self, id: EntityId) -> Result<bool, AnnotationError> {
        self.selection.deselect(&mut self.shapes, &mut self.surface, id)
    }

    pub fn deselect_all_shapes(&mut self) {
        self.selection.deselect_all(&mut self.shapes, &mut self.surface);
    }

    /// Changes the highlight colour, re-highlighting the selection.
    pub fn set_highlight_color(&mut self, color: &str) {
        self.selection
            .set_highlight_color(&mut self.shapes, &mut self.surface, color);
    }
}
