//! Group operations for the annotation controller.

use super::AnnotationState;
use crate::group_registry::Group;
use crate::render::RenderSurface;
use mapmark_core::{AnnotationError, EntityId};

impl<S: RenderSurface> AnnotationState<S> {
    pub fn create_group(&mut self) -> EntityId {
        self.groups.create_group()
    }

    /// Moves a shape into a group.
    ///
    /// A selected shape joining the current group clears the group pointer,
    /// as selecting a member of that group would.
    pub fn add_to_group(&mut self, group_id: EntityId, shape_id: EntityId) -> Result<(), AnnotationError> {
        self.groups
            .add_to_group(&mut self.shapes, &mut self.surface, group_id, shape_id)?;
        if self.groups.selected_group() == Some(group_id) && self.selection.is_selected(shape_id) {
            self.groups.deselect_group();
        }
        Ok(())
    }

    /// Puts every selected shape into a new group and clears the selection.
    ///
    /// Returns `None` when nothing is selected.
    pub fn group_selected_shapes(&mut self) -> Option<EntityId> {
        if self.selection.is_empty() {
            return None;
        }
        let group_id = self.groups.create_group();
        self.move_selection_into(group_id);
        Some(group_id)
    }

    /// Moves every selected shape into an existing group and clears the
    /// selection. Returns how many shapes were added.
    pub fn add_selected_to_group(&mut self, group_id: EntityId) -> Result<usize, AnnotationError> {
        self.groups.get_or_err(group_id)?;
        Ok(self.move_selection_into(group_id))
    }

    fn move_selection_into(&mut self, group_id: EntityId) -> usize {
        let selected = self.selection.selected().to_vec();
        let mut added = 0;
        for shape_id in selected {
            let already_member = self
                .groups
                .get(group_id)
                .is_some_and(|g| g.contains(shape_id));
            if already_member {
                continue;
            }
            match self
                .groups
                .add_to_group(&mut self.shapes, &mut self.surface, group_id, shape_id)
            {
                Ok(()) => added += 1,
                Err(e) => tracing::warn!("Could not group shape {}: {}", shape_id, e),
            }
        }
        self.selection.deselect_all(&mut self.shapes, &mut self.surface);
        added
    }

    pub fn set_group_visibility(&mut self, group_id: EntityId, visible: bool) -> Result<(), AnnotationError> {
        self.groups
            .set_group_visibility(&mut self.shapes, &mut self.surface, group_id, visible)
    }

    /// Flips a group's visibility, returning the new value.
    pub fn toggle_group_visibility(&mut self, group_id: EntityId) -> Result<bool, AnnotationError> {
        self.groups
            .toggle_group_visibility(&mut self.shapes, &mut self.surface, group_id)
    }

    /// Releases every member of a group and discards it.
    pub fn disband_group(&mut self, group_id: EntityId) -> Result<Group, AnnotationError> {
        self.groups
            .disband(&mut self.shapes, &mut self.surface, group_id)
    }

    pub fn select_group(&mut self, group_id: EntityId, additive: bool) -> Result<(), AnnotationError> {
        self.groups.select_group(
            &mut self.selection,
            &mut self.shapes,
            &mut self.surface,
            group_id,
            additive,
        )
    }

    pub fn deselect_group(&mut self) {
        self.groups.deselect_group();
    }

    pub fn rename_group(&mut self, group_id: EntityId, name: &str) -> Result<(), AnnotationError> {
        self.groups.rename_group(group_id, name)
    }
}
