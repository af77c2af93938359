// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::{ModifierKeysMask, Pos, convert_key_modifiers, pos};

/// A mouse button press or release in the terminal: where, what, and which modifier keys
/// were held. Moves, drags and scrolls don't convert.
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
pub struct MouseInput {
    pub pos: Pos,
    pub kind: MouseInputKind,
    pub maybe_modifier_keys: Option<ModifierKeysMask>,
}

#[derive(Clone, Debug, Eq, PartialEq, Copy)]
pub enum MouseInputKind {
    MouseDown(Button),
    MouseUp(Button),
}

#[derive(Clone, Debug, Eq, PartialEq, Copy)]
pub enum Button {
    Left,
    Right,
    Middle,
}

impl TryFrom<MouseEvent> for MouseInput {
    type Error = ();

    fn try_from(mouse_event: MouseEvent) -> Result<Self, Self::Error> {
        Ok(MouseInput {
            pos: pos(mouse_event.column, mouse_event.row),
            kind: mouse_event.kind.try_into()?,
            maybe_modifier_keys: convert_key_modifiers(&mouse_event.modifiers),
        })
    }
}

impl TryFrom<MouseEventKind> for MouseInputKind {
    type Error = ();

    fn try_from(mouse_event_kind: MouseEventKind) -> Result<Self, Self::Error> {
        match mouse_event_kind {
            MouseEventKind::Down(button) => Ok(MouseInputKind::MouseDown(button.into())),
            MouseEventKind::Up(button) => Ok(MouseInputKind::MouseUp(button.into())),
            _ => Err(()),
        }
    }
}

impl From<MouseButton> for Button {
    fn from(mouse_button: MouseButton) -> Self {
        match mouse_button {
            MouseButton::Left => Button::Left,
            MouseButton::Right => Button::Right,
            MouseButton::Middle => Button::Middle,
        }
    }
}
