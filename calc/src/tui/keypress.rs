// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{ModifierKeysMask, convert_key_modifiers};

/// Shorthand to build a [`KeyPress`].
///
/// ```
/// use tui_calc::{Key, KeyPress, ModifierKeysMask, SpecialKey, keypress};
///
/// assert_eq!(keypress!(@char '7'), KeyPress::Plain { key: Key::Character('7') });
/// assert_eq!(
///     keypress!(@special SpecialKey::Enter),
///     KeyPress::Plain { key: Key::SpecialKey(SpecialKey::Enter) }
/// );
/// let ctrl_q = keypress!(@char ModifierKeysMask::new().with_ctrl(), 'q');
/// assert!(matches!(ctrl_q, KeyPress::WithModifiers { .. }));
/// ```
#[macro_export]
macro_rules! keypress {
    // @char
    (@char $arg_char : expr) => {
        $crate::KeyPress::Plain {
            key: $crate::Key::Character($arg_char),
        }
    };

    (@char $arg_modifiers : expr, $arg_char : expr) => {
        $crate::KeyPress::WithModifiers {
            mask: $arg_modifiers,
            key: $crate::Key::Character($arg_char),
        }
    };

    // @special
    (@special $arg_special : expr) => {
        $crate::KeyPress::Plain {
            key: $crate::Key::SpecialKey($arg_special),
        }
    };

    (@special $arg_modifiers : expr, $arg_special : expr) => {
        $crate::KeyPress::WithModifiers {
            mask: $arg_modifiers,
            key: $crate::Key::SpecialKey($arg_special),
        }
    };
}

/// A key press, normalized from crossterm's [`KeyEvent`]:
/// - Only [`KeyEventKind::Press`] events become a [`KeyPress`]. Release and repeat are
///   dropped.
/// - <kbd>Shift</kbd> is ignored for character keys, since the character already
///   reflects it (`%` arrives as `Shift+5` on most layouts).
/// - Keys the calculator has no use for (arrows, paging, most function keys) don't
///   convert at all.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Copy)]
pub enum KeyPress {
    Plain { key: Key },
    WithModifiers { key: Key, mask: ModifierKeysMask },
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, Copy)]
pub enum Key {
    Character(char),
    SpecialKey(SpecialKey),
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, Copy)]
pub enum SpecialKey {
    Backspace,
    Enter,
    Delete,
    Esc,
    F9,
}

pub mod convert_key_event {
    use super::*;

    impl TryFrom<KeyEvent> for KeyPress {
        type Error = ();

        fn try_from(key_event: KeyEvent) -> Result<Self, Self::Error> {
            if key_event.kind != KeyEventKind::Press {
                return Err(());
            }

            match key_event {
                // If character keys, then ignore SHIFT or NONE modifiers.
                KeyEvent {
                    code: KeyCode::Char(character),
                    modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
                    ..
                } => Ok(KeyPress::Plain {
                    key: Key::Character(character),
                }),
                // Non character keys, or character keys w/ Ctrl or Alt.
                _ => {
                    let key = copy_code_from_key_event(&key_event).ok_or(())?;
                    Ok(match convert_key_modifiers(&key_event.modifiers) {
                        Some(mask) => KeyPress::WithModifiers { key, mask },
                        None => KeyPress::Plain { key },
                    })
                }
            }
        }
    }

    #[must_use]
    pub fn copy_code_from_key_event(key_event: &KeyEvent) -> Option<Key> {
        // Make the code easier to read below using this alias.
        type KC = KeyCode;
        match key_event.code {
            KC::Backspace => Key::SpecialKey(SpecialKey::Backspace).into(),
            KC::Enter => Key::SpecialKey(SpecialKey::Enter).into(),
            KC::Delete => Key::SpecialKey(SpecialKey::Delete).into(),
            KC::Esc => Key::SpecialKey(SpecialKey::Esc).into(),
            KC::F(9) => Key::SpecialKey(SpecialKey::F9).into(),
            KC::Char(character) => Key::Character(character).into(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    fn key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test_case(KeyCode::Char('5'), KeyModifiers::NONE, keypress!(@char '5'))]
    #[test_case(KeyCode::Char('%'), KeyModifiers::SHIFT, keypress!(@char '%'))]
    #[test_case(KeyCode::Enter, KeyModifiers::NONE, keypress!(@special SpecialKey::Enter))]
    #[test_case(KeyCode::F(9), KeyModifiers::NONE, keypress!(@special SpecialKey::F9))]
    #[test_case(
        KeyCode::Char('q'),
        KeyModifiers::CONTROL,
        keypress!(@char ModifierKeysMask::new().with_ctrl(), 'q')
    )]
    #[test_case(
        KeyCode::Delete,
        KeyModifiers::SHIFT,
        keypress!(@special ModifierKeysMask::new().with_shift(), SpecialKey::Delete)
    )]
    fn test_convert_key_event(code: KeyCode, modifiers: KeyModifiers, expected: KeyPress) {
        let it = KeyPress::try_from(key_event(code, modifiers));
        assert_eq!(it, Ok(expected));
    }

    #[test]
    fn test_release_and_repeat_are_dropped() {
        let release = KeyEvent {
            code: KeyCode::Char('1'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(KeyPress::try_from(release), Err(()));

        let repeat = KeyEvent {
            kind: KeyEventKind::Repeat,
            ..release
        };
        assert_eq!(KeyPress::try_from(repeat), Err(()));
    }

    #[test]
    fn test_unsupported_codes_are_dropped() {
        assert_eq!(
            KeyPress::try_from(key_event(KeyCode::F(1), KeyModifiers::NONE)),
            Err(())
        );
        assert_eq!(
            KeyPress::try_from(key_event(KeyCode::Up, KeyModifiers::NONE)),
            Err(())
        );
        assert_eq!(
            KeyPress::try_from(key_event(KeyCode::CapsLock, KeyModifiers::NONE)),
            Err(())
        );
    }
}
