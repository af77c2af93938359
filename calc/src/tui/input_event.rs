// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use crossterm::event::{Event, KeyEvent, MouseEvent};

use super::{KeyPress, MouseInput, Size, size};

/// Every input the calculator reacts to. Crossterm events that don't map to one of these
/// (focus changes, bracketed paste, key releases, mouse moves and scrolls) fail to
/// convert and are skipped by the input device.
///
/// ```text
/// crossterm::Event
///     ├─→ Event::Key(KeyEvent)     → KeyPress   → InputEvent::Keyboard
///     ├─→ Event::Mouse(MouseEvent) → MouseInput → InputEvent::Mouse
///     └─→ Event::Resize(w, h)      → Size       → InputEvent::Resize
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Keyboard(KeyPress),
    Resize(Size),
    Mouse(MouseInput),
}

mod helpers {
    use super::InputEvent;

    impl InputEvent {
        /// Checks to see whether the `input_event` matches any of the `exit_keys`.
        #[must_use]
        pub fn matches(&self, exit_keys: &[InputEvent]) -> bool {
            exit_keys.iter().any(|exit_key| self == exit_key)
        }
    }
}

pub(crate) mod converters {
    use super::{Event, InputEvent, KeyEvent, MouseEvent, size};

    impl TryFrom<Event> for InputEvent {
        type Error = ();

        fn try_from(event: Event) -> Result<Self, Self::Error> {
            match event {
                Event::Key(key_event) => key_event.try_into(),
                Event::Mouse(mouse_event) => mouse_event.try_into(),
                Event::Resize(columns, rows) => Ok(InputEvent::Resize(size(columns, rows))),
                Event::FocusGained | Event::FocusLost | Event::Paste(_) => Err(()),
            }
        }
    }

    impl TryFrom<MouseEvent> for InputEvent {
        type Error = ();

        fn try_from(mouse_event: MouseEvent) -> Result<Self, Self::Error> {
            Ok(InputEvent::Mouse(mouse_event.try_into()?))
        }
    }

    impl TryFrom<KeyEvent> for InputEvent {
        type Error = ();

        fn try_from(key_event: KeyEvent) -> Result<Self, Self::Error> {
            Ok(InputEvent::Keyboard(key_event.try_into()?))
        }
    }
}

impl Display for InputEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InputEvent::Keyboard(keypress) => write!(f, "Keyboard({keypress:?})"),
            InputEvent::Resize(new_size) => write!(f, "Resize({new_size})"),
            InputEvent::Mouse(mouse_input) => {
                write!(f, "Mouse({:?} @ {})", mouse_input.kind, mouse_input.pos)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ModifierKeysMask, keypress};

    #[test]
    fn test_resize_converts_to_size() {
        assert_eq!(
            InputEvent::try_from(Event::Resize(80, 24)),
            Ok(InputEvent::Resize(size(80, 24)))
        );
    }

    #[test]
    fn test_focus_and_paste_are_skipped() {
        assert_eq!(InputEvent::try_from(Event::FocusGained), Err(()));
        assert_eq!(InputEvent::try_from(Event::Paste("12".into())), Err(()));
    }

    #[test]
    fn test_matches_exit_keys() {
        let exit_keys = [InputEvent::Keyboard(
            keypress!(@char ModifierKeysMask::new().with_ctrl(), 'q'),
        )];
        let ctrl_q = InputEvent::try_from(Event::Key(KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::CONTROL,
        )))
        .unwrap();
        let plain_q = InputEvent::Keyboard(keypress!(@char 'q'));

        assert!(ctrl_q.matches(&exit_keys));
        assert!(!plain_q.matches(&exit_keys));
    }
}
