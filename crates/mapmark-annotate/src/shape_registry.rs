use crate::render::RenderSurface;
use crate::shapes::Shape;
use mapmark_core::{AnnotationError, EntityId, ShapeKind, SharedIds, Vec3};
use std::collections::BTreeMap;

type Result<T> = std::result::Result<T, AnnotationError>;

/// Owns committed shapes and their render handles.
///
/// `ShapeRegistry` is responsible for:
/// - Allocating shape ids from the counter it shares with the group registry
/// - Keeping each shape's render handle in step with its effective visibility
/// - Restyling shapes (own colour, highlight colour, opacity, name)
///
/// # Rendering Model
///
/// A shape has a live primitive on the surface if and only if it is
/// effectively visible. Every restyle drops the old primitive and, when the
/// shape is visible, materializes a new one; hidden shapes only have their
/// stored styling updated.
///
/// Group membership and selection live elsewhere. Cross-component operations
/// such as deleting a grouped, selected shape are coordinated by
/// [`AnnotationState`](crate::AnnotationState).
#[derive(Debug)]
pub struct ShapeRegistry {
    shapes: BTreeMap<EntityId, Shape>,
    ids: SharedIds,
}

impl ShapeRegistry {
    /// Creates an empty registry allocating from `ids`.
    pub fn new(ids: SharedIds) -> Self {
        Self {
            shapes: BTreeMap::new(),
            ids,
        }
    }

    /// Commits a new shape and materializes it.
    ///
    /// # Errors
    ///
    /// `InvalidGeometry` if `vertices` is shorter than the kind's minimum. No id
    /// is consumed in that case.
    pub fn create_from_vertices(
        &mut self,
        surface: &mut dyn RenderSurface,
        kind: ShapeKind,
        vertices: Vec<Vec3>,
        color: &str,
        opacity: u8,
    ) -> Result<EntityId> {
        kind.validate_vertex_count(vertices.len())?;

        let id = self.ids.borrow_mut().next_id();
        let mut shape = Shape::new(id, kind, vertices, color.to_string(), opacity.min(100));
        Self::sync_render(surface, &mut shape);
        self.shapes.insert(id, shape);

        tracing::info!("Drew {} with ID {}", kind, id);
        Ok(id)
    }

    /// Removes a shape and its primitive, returning the record.
    ///
    /// Selection and group bookkeeping are not touched here.
    pub fn remove(&mut self, surface: &mut dyn RenderSurface, id: EntityId) -> Result<Shape> {
        let mut shape = self
            .shapes
            .remove(&id)
            .ok_or_else(|| AnnotationError::shape_not_found(id))?;
        if let Some(handle) = shape.handle.take() {
            surface.dematerialize(handle);
        }
        tracing::info!("Deleted Shape {}", id);
        Ok(shape)
    }

    /// Sets the shape's own visibility flag.
    ///
    /// The primitive is added or removed only when the effective visibility
    /// changes; a hidden group keeps its members off screen either way.
    pub fn set_visibility(
        &mut self,
        surface: &mut dyn RenderSurface,
        id: EntityId,
        visible: bool,
    ) -> Result<()> {
        let shape = self.get_mut_or_err(id)?;
        shape.individual_visible = visible;
        Self::sync_render(surface, shape);
        tracing::debug!(
            "Made shape {} {}",
            id,
            if visible { "visible" } else { "invisible" }
        );
        Ok(())
    }

    /// Flips the shape's own visibility flag, returning the new value.
    pub fn toggle_visibility(
        &mut self,
        surface: &mut dyn RenderSurface,
        id: EntityId,
    ) -> Result<bool> {
        let visible = !self.get_or_err(id)?.individual_visible;
        self.set_visibility(surface, id, visible)?;
        Ok(visible)
    }

    /// Updates colour, opacity and name, then re-materializes.
    pub fn redraw(
        &mut self,
        surface: &mut dyn RenderSurface,
        id: EntityId,
        color: &str,
        opacity: u8,
        name: &str,
    ) -> Result<()> {
        let shape = self.get_mut_or_err(id)?;
        shape.color = color.to_string();
        shape.opacity = opacity.min(100);
        shape.name = name.to_string();
        Self::rematerialize(surface, shape);
        Ok(())
    }

    /// Redraws the shape in `highlight_color` instead of its own colour.
    pub fn highlight(
        &mut self,
        surface: &mut dyn RenderSurface,
        id: EntityId,
        highlight_color: &str,
    ) -> Result<()> {
        let shape = self.get_mut_or_err(id)?;
        shape.highlight = Some(highlight_color.to_string());
        Self::rematerialize(surface, shape);
        Ok(())
    }

    /// Redraws the shape in its own colour.
    pub fn unhighlight(&mut self, surface: &mut dyn RenderSurface, id: EntityId) -> Result<()> {
        let shape = self.get_mut_or_err(id)?;
        shape.highlight = None;
        Self::rematerialize(surface, shape);
        Ok(())
    }

    /// Records group membership and the owning group's visibility.
    pub(crate) fn set_group(
        &mut self,
        surface: &mut dyn RenderSurface,
        id: EntityId,
        group: Option<(EntityId, bool)>,
    ) -> Result<()> {
        let shape = self.get_mut_or_err(id)?;
        match group {
            Some((group_id, group_visible)) => {
                shape.group_id = Some(group_id);
                shape.group_visible = group_visible;
            }
            None => {
                shape.group_id = None;
                shape.group_visible = true;
            }
        }
        Self::sync_render(surface, shape);
        Ok(())
    }

    /// Applies a group visibility change to one member.
    pub(crate) fn set_group_visible(
        &mut self,
        surface: &mut dyn RenderSurface,
        id: EntityId,
        group_visible: bool,
    ) -> Result<()> {
        let shape = self.get_mut_or_err(id)?;
        shape.group_visible = group_visible;
        Self::sync_render(surface, shape);
        Ok(())
    }

    pub fn get(&self, id: EntityId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.shapes.contains_key(&id)
    }

    /// Iterates shapes in id (creation) order.
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.shapes.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Number of shapes that currently have a primitive on the surface.
    pub fn rendered_count(&self) -> usize {
        self.shapes.values().filter(|s| s.is_rendered()).count()
    }

    pub(crate) fn get_or_err(&self, id: EntityId) -> Result<&Shape> {
        self.shapes
            .get(&id)
            .ok_or_else(|| AnnotationError::shape_not_found(id))
    }

    fn get_mut_or_err(&mut self, id: EntityId) -> Result<&mut Shape> {
        self.shapes
            .get_mut(&id)
            .ok_or_else(|| AnnotationError::shape_not_found(id))
    }

    /// Adds or removes the primitive so that it exists iff the shape is
    /// effectively visible. An existing primitive is left untouched.
    fn sync_render(surface: &mut dyn RenderSurface, shape: &mut Shape) {
        let visible = shape.effective_visible();
        match (visible, shape.handle.is_some()) {
            (true, false) => {
                let style = shape.display_style();
                shape.handle = Some(surface.materialize(shape.kind, &shape.vertices, &style));
            }
            (false, true) => {
                if let Some(handle) = shape.handle.take() {
                    surface.dematerialize(handle);
                }
            }
            _ => {}
        }
    }

    /// Drops the current primitive and draws a fresh one with the current style.
    fn rematerialize(surface: &mut dyn RenderSurface, shape: &mut Shape) {
        if let Some(handle) = shape.handle.take() {
            surface.dematerialize(handle);
        }
        Self::sync_render(surface, shape);
    }
}
