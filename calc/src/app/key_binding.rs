// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CalcAction, CalculatorState, Digit, InputEvent, Key, KeyPress, ModifierKeysMask,
            OperatorSymbol, SpecialKey, keypress};

/// Keys that end the app. They are left to the main event loop (the app propagates
/// them).
#[must_use]
pub fn get_exit_keys() -> Vec<InputEvent> {
    vec![
        InputEvent::Keyboard(keypress!(@char ModifierKeysMask::new().with_ctrl(), 'q')),
        InputEvent::Keyboard(keypress!(@char ModifierKeysMask::new().with_ctrl(), 'c')),
    ]
}

/// Maps a key press to what the calculator should do. The clear key depends on the
/// display, which is why `state` is needed. Returns [`None`] for keys that aren't bound,
/// so they propagate.
///
/// | Key                          | Action                          |
/// | ---------------------------- | ------------------------------- |
/// | `0` - `9`                    | [`CalcAction::Digit`]           |
/// | `+` `-` `*` `/` `=`, `Enter` | [`CalcAction::Operate`]         |
/// | `.`                          | [`CalcAction::Dot`]             |
/// | `%`                          | [`CalcAction::Percent`]         |
/// | `Backspace`                  | [`CalcAction::DeleteLastChar`]  |
/// | `Esc`, `Delete`, `c`         | [`CalcAction::clear_key`]       |
/// | `F9`                         | [`CalcAction::Sign`]            |
#[must_use]
pub fn action_for_keypress(keypress: KeyPress, state: &CalculatorState) -> Option<CalcAction> {
    // Bindings are all unmodified. Ctrl+C in particular must not reach the 'c' binding.
    let KeyPress::Plain { key } = keypress else {
        return None;
    };

    match key {
        Key::Character(typed_char) => action_for_char(typed_char, state),
        Key::SpecialKey(special_key) => match special_key {
            SpecialKey::Enter => Some(CalcAction::Operate(OperatorSymbol::Equals)),
            SpecialKey::Backspace => Some(CalcAction::DeleteLastChar),
            SpecialKey::Esc | SpecialKey::Delete => Some(CalcAction::clear_key(state)),
            SpecialKey::F9 => Some(CalcAction::Sign),
        },
    }
}

fn action_for_char(typed_char: char, state: &CalculatorState) -> Option<CalcAction> {
    if let Some(digit) = Digit::try_from_char(typed_char) {
        return Some(CalcAction::Digit(digit));
    }
    if let Some(operator) = OperatorSymbol::try_from_char(typed_char) {
        return Some(CalcAction::Operate(operator));
    }
    match typed_char {
        '.' => Some(CalcAction::Dot),
        '%' => Some(CalcAction::Percent),
        'c' | 'C' => Some(CalcAction::clear_key(state)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::reduce;

    fn d(it: u8) -> CalcAction { CalcAction::Digit(Digit::try_new(it).unwrap()) }

    #[test_case(keypress!(@char '0'), Some(d(0)))]
    #[test_case(keypress!(@char '9'), Some(d(9)))]
    #[test_case(keypress!(@char '+'), Some(CalcAction::Operate(OperatorSymbol::Add)))]
    #[test_case(keypress!(@char '-'), Some(CalcAction::Operate(OperatorSymbol::Subtract)))]
    #[test_case(keypress!(@char '*'), Some(CalcAction::Operate(OperatorSymbol::Multiply)))]
    #[test_case(keypress!(@char '/'), Some(CalcAction::Operate(OperatorSymbol::Divide)))]
    #[test_case(keypress!(@char '='), Some(CalcAction::Operate(OperatorSymbol::Equals)))]
    #[test_case(keypress!(@special SpecialKey::Enter), Some(CalcAction::Operate(OperatorSymbol::Equals)))]
    #[test_case(keypress!(@char '.'), Some(CalcAction::Dot))]
    #[test_case(keypress!(@char '%'), Some(CalcAction::Percent))]
    #[test_case(keypress!(@special SpecialKey::Backspace), Some(CalcAction::DeleteLastChar))]
    #[test_case(keypress!(@special SpecialKey::F9), Some(CalcAction::Sign))]
    #[test_case(keypress!(@char 'x'), None)]
    #[test_case(keypress!(@char ' '), None)]
    #[test_case(keypress!(@special ModifierKeysMask::new().with_shift(), SpecialKey::Enter), None)]
    #[test_case(keypress!(@char ModifierKeysMask::new().with_ctrl(), 'c'), None)]
    #[test_case(keypress!(@char ModifierKeysMask::new().with_alt(), '5'), None)]
    fn test_action_for_keypress(keypress: KeyPress, expected: Option<CalcAction>) {
        assert_eq!(action_for_keypress(keypress, &CalculatorState::default()), expected);
    }

    #[test_case(keypress!(@char 'c'))]
    #[test_case(keypress!(@char 'C'))]
    #[test_case(keypress!(@special SpecialKey::Esc))]
    #[test_case(keypress!(@special SpecialKey::Delete))]
    fn test_clear_keys_are_smart(keypress: KeyPress) {
        let fresh = CalculatorState::default();
        assert_eq!(action_for_keypress(keypress, &fresh), Some(CalcAction::ClearAll));

        let typed = reduce(&fresh, &d(7));
        assert_eq!(action_for_keypress(keypress, &typed), Some(CalcAction::Clear));
    }

    #[test]
    fn test_exit_keys_are_not_bound() {
        let state = CalculatorState::default();
        for exit_key in get_exit_keys() {
            let InputEvent::Keyboard(keypress) = exit_key else {
                panic!("exit keys are keyboard events");
            };
            assert_eq!(action_for_keypress(keypress, &state), None);
        }
    }
}
