// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Where everything goes on screen, and which key is under a given cell.
//!
//! ```text
//! ┌────────────────────┐
//! │                    │ ← display (DISPLAY_ROW_COUNT rows)
//! │            1,234.5 │
//! │                    │
//! │ AC   ±    %    ÷   │ ← keypad (KEYPAD_ROW_COUNT rows of keys)
//! │ 7    8    9    ×   │
//! │ 4    5    6    −   │
//! │ 1    2    3    +   │
//! │ 0         .    =   │
//! │ status bar         │ ← last row
//! └────────────────────┘
//! ```

use crate::{CalcAction, CalculatorState, Digit, Locale, OperatorSymbol, Pos, Rect, Size,
            pos, size};

pub const DISPLAY_ROW_COUNT: u16 = 3;
pub const STATUS_BAR_ROW_COUNT: u16 = 1;
pub const KEYPAD_ROW_COUNT: u16 = 5;
pub const KEYPAD_COL_COUNT: u16 = 4;

/// A key on the keypad. What it does can depend on the state (see
/// [`KeypadKey::action`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeypadKey {
    Clear,
    Sign,
    Percent,
    Operator(OperatorSymbol),
    Digit(Digit),
    Dot,
}

/// How a key is colored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyKind {
    Function,
    Operator,
    Input,
}

/// Grid placement of one key: column, row, and how many columns it spans.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct GridCell {
    key: KeypadKey,
    grid_col: u16,
    grid_row: u16,
    col_span: u16,
}

const fn digit_key(value: u8) -> KeypadKey { KeypadKey::Digit(Digit::new_const(value)) }

const fn cell(key: KeypadKey, grid_col: u16, grid_row: u16, col_span: u16) -> GridCell {
    GridCell {
        key,
        grid_col,
        grid_row,
        col_span,
    }
}

const KEYPAD_GRID: [GridCell; 19] = [
    cell(KeypadKey::Clear, 0, 0, 1),
    cell(KeypadKey::Sign, 1, 0, 1),
    cell(KeypadKey::Percent, 2, 0, 1),
    cell(KeypadKey::Operator(OperatorSymbol::Divide), 3, 0, 1),
    cell(digit_key(7), 0, 1, 1),
    cell(digit_key(8), 1, 1, 1),
    cell(digit_key(9), 2, 1, 1),
    cell(KeypadKey::Operator(OperatorSymbol::Multiply), 3, 1, 1),
    cell(digit_key(4), 0, 2, 1),
    cell(digit_key(5), 1, 2, 1),
    cell(digit_key(6), 2, 2, 1),
    cell(KeypadKey::Operator(OperatorSymbol::Subtract), 3, 2, 1),
    cell(digit_key(1), 0, 3, 1),
    cell(digit_key(2), 1, 3, 1),
    cell(digit_key(3), 2, 3, 1),
    cell(KeypadKey::Operator(OperatorSymbol::Add), 3, 3, 1),
    cell(digit_key(0), 0, 4, 2),
    cell(KeypadKey::Dot, 2, 4, 1),
    cell(KeypadKey::Operator(OperatorSymbol::Equals), 3, 4, 1),
];

mod keypad_key_impl {
    use super::*;

    impl KeypadKey {
        /// Same action as the keyboard binding for this key.
        #[must_use]
        pub fn action(self, state: &CalculatorState) -> CalcAction {
            match self {
                KeypadKey::Clear => CalcAction::clear_key(state),
                KeypadKey::Sign => CalcAction::Sign,
                KeypadKey::Percent => CalcAction::Percent,
                KeypadKey::Operator(operator) => CalcAction::Operate(operator),
                KeypadKey::Digit(digit) => CalcAction::Digit(digit),
                KeypadKey::Dot => CalcAction::Dot,
            }
        }

        #[must_use]
        pub fn label(self, state: &CalculatorState, locale: &Locale) -> String {
            match self {
                KeypadKey::Clear => state.clear_key_mode().label().to_string(),
                KeypadKey::Sign => "±".to_string(),
                KeypadKey::Percent => "%".to_string(),
                KeypadKey::Operator(operator) => operator.key_label().to_string(),
                KeypadKey::Digit(digit) => digit.to_string(),
                KeypadKey::Dot => locale.decimal_separator.to_string(),
            }
        }

        #[must_use]
        pub fn kind(self) -> KeyKind {
            match self {
                KeypadKey::Clear | KeypadKey::Sign | KeypadKey::Percent => KeyKind::Function,
                KeypadKey::Operator(_) => KeyKind::Operator,
                KeypadKey::Digit(_) | KeypadKey::Dot => KeyKind::Input,
            }
        }
    }
}

/// Screen geometry for one window size. Recomputed on every render, and on every mouse
/// event, so it always matches what was painted last.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeypadLayout {
    pub window_size: Size,
    pub display_rect: Rect,
    pub keys: Vec<(KeypadKey, Rect)>,
    pub status_bar_row_index: u16,
}

mod layout_impl {
    use super::*;

    impl KeypadLayout {
        /// Keys share the width evenly and whatever is left over becomes a left margin.
        /// The keypad takes all the rows between the display and the status bar.
        #[must_use]
        pub fn new(window_size: Size) -> Self {
            let key_width = window_size.col_count / KEYPAD_COL_COUNT;
            let keypad_row_count = window_size
                .row_count
                .saturating_sub(DISPLAY_ROW_COUNT + STATUS_BAR_ROW_COUNT);
            let key_height = keypad_row_count / KEYPAD_ROW_COUNT;
            let margin_left =
                window_size.col_count.saturating_sub(key_width * KEYPAD_COL_COUNT) / 2;

            let keys = KEYPAD_GRID
                .iter()
                .map(|it| {
                    let origin = pos(
                        margin_left + it.grid_col * key_width,
                        DISPLAY_ROW_COUNT + it.grid_row * key_height,
                    );
                    (it.key, Rect::new(origin, size(it.col_span * key_width, key_height)))
                })
                .collect();

            Self {
                window_size,
                display_rect: Rect::new(
                    pos(0, 0),
                    size(window_size.col_count, DISPLAY_ROW_COUNT),
                ),
                keys,
                status_bar_row_index: window_size.row_count.saturating_sub(1),
            }
        }

        /// The key painted at `at`, if any.
        #[must_use]
        pub fn key_at(&self, at: Pos) -> Option<KeypadKey> {
            self.keys
                .iter()
                .find(|(_, rect)| rect.contains(at))
                .map(|(key, _)| *key)
        }

        #[must_use]
        pub fn rect_of(&self, key: KeypadKey) -> Option<Rect> {
            self.keys
                .iter()
                .find(|(it, _)| *it == key)
                .map(|(_, rect)| *rect)
        }
    }
}
