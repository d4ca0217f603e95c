//! Pointer and keyboard dispatch.

use super::AnnotationState;
use crate::render::{RenderSurface, ScreenPosition};
use mapmark_core::{AnnotationError, EntityId};

/// Keys the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Backspace,
    Delete,
    Character(char),
}

/// Where keyboard focus currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFocus {
    /// The map canvas, so editing keys act on annotations
    #[default]
    Canvas,
    /// A text field such as the shape-name input
    TextField,
}

/// Modifier key state delivered with pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { ctrl: false };
    pub const CTRL: Modifiers = Modifiers { ctrl: true };

    /// Whether selection should add to rather than replace the current one.
    pub fn additive(self) -> bool {
        self.ctrl
    }
}

/// What a key press ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Ignored,
    CancelledVertex,
    CancelledShape,
    DeletedSelection(usize),
    DisbandedGroup(EntityId),
}

impl<S: RenderSurface> AnnotationState<S> {
    /// Handles a click on the map.
    ///
    /// Any shape selection is cleared first. The click then goes to the
    /// drawing session if the pointer is over the globe. Returns the id of a
    /// shape committed by the click (points only).
    pub fn handle_click(&mut self, screen: ScreenPosition) -> Result<Option<EntityId>, AnnotationError> {
        self.selection.deselect_all(&mut self.shapes, &mut self.surface);

        let Some(position) = self.surface.resolve_world_position(screen) else {
            return Ok(None);
        };
        self.session.click(&mut self.surface, &mut self.shapes, position)
    }

    /// Handles a click on a shape's entry, ctrl adding to the selection.
    pub fn handle_shape_click(&mut self, id: EntityId, modifiers: Modifiers) -> Result<(), AnnotationError> {
        self.select_shape(id, modifiers.additive())
    }

    /// Handles a click on a group's entry, ctrl selecting its members.
    pub fn handle_group_click(
        &mut self,
        group_id: EntityId,
        modifiers: Modifiers,
    ) -> Result<(), AnnotationError> {
        self.select_group(group_id, modifiers.additive())
    }

    /// Moves the live preview vertex, if any, to the pointer.
    pub fn handle_pointer_move(&mut self, screen: ScreenPosition) {
        if let Some(position) = self.surface.resolve_world_position(screen) {
            self.session.pointer_moved(&mut self.surface, position);
        }
    }

    /// Finishes the in-progress line or polygon.
    pub fn terminate_shape(&mut self) -> Result<Option<EntityId>, AnnotationError> {
        self.session.terminate(&mut self.surface, &mut self.shapes)
    }

    pub fn cancel_shape(&mut self) {
        self.session.cancel_shape(&mut self.surface);
    }

    pub fn cancel_last_vertex(&mut self) -> bool {
        self.session.cancel_last_vertex(&mut self.surface)
    }

    /// Dispatches Backspace/Delete.
    ///
    /// Nothing happens while a text field has focus. Otherwise the first
    /// applicable action wins: undo drawing progress, delete the selected
    /// shapes, disband the current group.
    pub fn handle_key(&mut self, key: Key, focus: InputFocus) -> Result<KeyAction, AnnotationError> {
        if !matches!(key, Key::Backspace | Key::Delete) || focus == InputFocus::TextField {
            return Ok(KeyAction::Ignored);
        }

        if self.session.has_pending_shape() {
            let whole_shape = self.session.anchor_count() <= 1;
            self.session.cancel_last_vertex(&mut self.surface);
            return Ok(if whole_shape {
                KeyAction::CancelledShape
            } else {
                KeyAction::CancelledVertex
            });
        }

        if !self.selection.is_empty() {
            return Ok(KeyAction::DeletedSelection(self.delete_selected()));
        }

        if let Some(group_id) = self.groups.selected_group() {
            self.disband_group(group_id)?;
            return Ok(KeyAction::DisbandedGroup(group_id));
        }

        Ok(KeyAction::Ignored)
    }
}
