use crate::render::RenderSurface;
use crate::selection_manager::SelectionManager;
use crate::shape_registry::ShapeRegistry;
use mapmark_core::{AnnotationError, EntityId, SharedIds};
use std::collections::{BTreeMap, BTreeSet};

type Result<T> = std::result::Result<T, AnnotationError>;

/// A named set of shapes sharing a visibility switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    id: EntityId,
    name: String,
    members: BTreeSet<EntityId>,
    visible: bool,
}

impl Group {
    fn new(id: EntityId) -> Self {
        Self {
            id,
            name: format!("Group (ID:{})", id),
            members: BTreeSet::new(),
            visible: true,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &BTreeSet<EntityId> {
        &self.members
    }

    pub fn contains(&self, shape_id: EntityId) -> bool {
        self.members.contains(&shape_id)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Owns groups and cascades their visibility into member shapes.
///
/// Also holds the "current group" pointer. Selecting a group is mutually
/// exclusive with having its members in the shape selection.
#[derive(Debug)]
pub struct GroupRegistry {
    groups: BTreeMap<EntityId, Group>,
    ids: SharedIds,
    selected_group: Option<EntityId>,
}

impl GroupRegistry {
    /// Creates an empty registry allocating from the counter shared with shapes.
    pub fn new(ids: SharedIds) -> Self {
        Self {
            groups: BTreeMap::new(),
            ids,
            selected_group: None,
        }
    }

    /// Creates an empty, visible group.
    pub fn create_group(&mut self) -> EntityId {
        let id = self.ids.borrow_mut().next_id();
        self.groups.insert(id, Group::new(id));
        tracing::info!("Created Group {}", id);
        id
    }

    /// Moves a shape into `group_id`, leaving its previous group if any.
    pub fn add_to_group(
        &mut self,
        shapes: &mut ShapeRegistry,
        surface: &mut dyn RenderSurface,
        group_id: EntityId,
        shape_id: EntityId,
    ) -> Result<()> {
        let previous = shapes.get_or_err(shape_id)?.group_id();
        let visible = self.get_or_err(group_id)?.visible;

        if let Some(old) = previous.filter(|&old| old != group_id) {
            if let Some(group) = self.groups.get_mut(&old) {
                group.members.remove(&shape_id);
            }
        }
        if let Some(group) = self.groups.get_mut(&group_id) {
            group.members.insert(shape_id);
        }
        shapes.set_group(surface, shape_id, Some((group_id, visible)))?;

        tracing::info!("Added Shape {} to Group {}", shape_id, group_id);
        Ok(())
    }

    /// Drops a shape from its group's member set. Rendering is untouched.
    pub(crate) fn remove_member(&mut self, group_id: EntityId, shape_id: EntityId) {
        if let Some(group) = self.groups.get_mut(&group_id) {
            group.members.remove(&shape_id);
        }
    }

    /// Shows or hides every member without altering their own flags.
    pub fn set_group_visibility(
        &mut self,
        shapes: &mut ShapeRegistry,
        surface: &mut dyn RenderSurface,
        group_id: EntityId,
        visible: bool,
    ) -> Result<()> {
        let group = self
            .groups
            .get_mut(&group_id)
            .ok_or_else(|| AnnotationError::group_not_found(group_id))?;
        group.visible = visible;
        for &member in &group.members {
            shapes.set_group_visible(surface, member, visible)?;
        }
        tracing::info!(
            "Made Group {} {}",
            group_id,
            if visible { "visible" } else { "invisible" }
        );
        Ok(())
    }

    /// Flips a group's visibility, returning the new value.
    pub fn toggle_group_visibility(
        &mut self,
        shapes: &mut ShapeRegistry,
        surface: &mut dyn RenderSurface,
        group_id: EntityId,
    ) -> Result<bool> {
        let visible = !self.get_or_err(group_id)?.visible;
        self.set_group_visibility(shapes, surface, group_id, visible)?;
        Ok(visible)
    }

    /// Releases every member and discards the group.
    ///
    /// Former members keep their own visibility flag, which alone now decides
    /// whether they are drawn.
    pub fn disband(
        &mut self,
        shapes: &mut ShapeRegistry,
        surface: &mut dyn RenderSurface,
        group_id: EntityId,
    ) -> Result<Group> {
        let group = self
            .groups
            .remove(&group_id)
            .ok_or_else(|| AnnotationError::group_not_found(group_id))?;
        for &member in &group.members {
            shapes.set_group(surface, member, None)?;
        }
        if self.selected_group == Some(group_id) {
            self.selected_group = None;
        }
        tracing::info!("Disbanded Group {}", group_id);
        Ok(group)
    }

    /// Selects a group.
    ///
    /// Without `additive` this sets the current-group pointer (or clears it
    /// when `group_id` already is the current group) and drops the group's
    /// members from the shape selection. With `additive` the members are added
    /// to the shape selection instead and the pointer is not set.
    pub fn select_group(
        &mut self,
        selection: &mut SelectionManager,
        shapes: &mut ShapeRegistry,
        surface: &mut dyn RenderSurface,
        group_id: EntityId,
        additive: bool,
    ) -> Result<()> {
        let members: Vec<EntityId> = self.get_or_err(group_id)?.members.iter().copied().collect();

        if additive {
            if self.selected_group == Some(group_id) {
                self.selected_group = None;
            }
            for member in members {
                if !selection.is_selected(member) {
                    selection.select(shapes, surface, member, true)?;
                }
            }
            return Ok(());
        }

        if self.selected_group == Some(group_id) {
            self.selected_group = None;
            tracing::debug!("Deselected Group {}", group_id);
            return Ok(());
        }

        for member in members {
            selection.deselect(shapes, surface, member)?;
        }
        self.selected_group = Some(group_id);
        tracing::debug!("Selected Group {}", group_id);
        Ok(())
    }

    /// Clears the current-group pointer.
    pub fn deselect_group(&mut self) {
        self.selected_group = None;
    }

    pub fn selected_group(&self) -> Option<EntityId> {
        self.selected_group
    }

    pub fn rename_group(&mut self, group_id: EntityId, name: &str) -> Result<()> {
        let group = self
            .groups
            .get_mut(&group_id)
            .ok_or_else(|| AnnotationError::group_not_found(group_id))?;
        group.name = name.to_string();
        Ok(())
    }

    pub fn get(&self, group_id: EntityId) -> Option<&Group> {
        self.groups.get(&group_id)
    }

    pub fn contains(&self, group_id: EntityId) -> bool {
        self.groups.contains_key(&group_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Group> {
        self.groups.values()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub(crate) fn get_or_err(&self, group_id: EntityId) -> Result<&Group> {
        self.groups
            .get(&group_id)
            .ok_or_else(|| AnnotationError::group_not_found(group_id))
    }
}
