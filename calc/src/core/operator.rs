// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The binary operators on the keypad. Each one folds the accumulator (left) and the
/// operand that was just entered (right) into a new accumulator.
///
/// [`OperatorSymbol::Equals`] is the identity on the right operand, which is what makes
/// `5 + 3 = 2 =` show `2` rather than carrying the `8` forward.
///
/// The string form is the key that is typed on the keyboard:
///
/// ```
/// use std::str::FromStr;
/// use tui_calc::OperatorSymbol;
///
/// assert_eq!(OperatorSymbol::from_str("*").unwrap(), OperatorSymbol::Multiply);
/// assert_eq!(OperatorSymbol::Divide.to_string(), "/");
/// ```
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
pub enum OperatorSymbol {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Subtract,
    #[strum(serialize = "*")]
    Multiply,
    #[strum(serialize = "/")]
    Divide,
    #[strum(serialize = "=")]
    Equals,
}

impl OperatorSymbol {
    /// IEEE-754 semantics, so `x / 0` is `Infinity` (or `NaN` for `0 / 0`).
    #[must_use]
    pub fn apply(self, prev_value: f64, next_value: f64) -> f64 {
        match self {
            OperatorSymbol::Add => prev_value + next_value,
            OperatorSymbol::Subtract => prev_value - next_value,
            OperatorSymbol::Multiply => prev_value * next_value,
            OperatorSymbol::Divide => prev_value / next_value,
            OperatorSymbol::Equals => next_value,
        }
    }

    /// Maps a typed character to an operator, if it is one.
    #[must_use]
    pub fn try_from_char(typed_char: char) -> Option<Self> {
        match typed_char {
            '+' => Some(OperatorSymbol::Add),
            '-' => Some(OperatorSymbol::Subtract),
            '*' => Some(OperatorSymbol::Multiply),
            '/' => Some(OperatorSymbol::Divide),
            '=' => Some(OperatorSymbol::Equals),
            _ => None,
        }
    }

    /// Glyph painted on the keypad.
    #[must_use]
    pub fn key_label(self) -> &'static str {
        match self {
            OperatorSymbol::Add => "+",
            OperatorSymbol::Subtract => "−",
            OperatorSymbol::Multiply => "×",
            OperatorSymbol::Divide => "÷",
            OperatorSymbol::Equals => "=",
        }
    }
}
