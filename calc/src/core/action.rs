// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use super::{CalculatorState, ClearKeyMode, OperatorSymbol};
use crate::DEBUG_CALC_MOD;

/// A single decimal digit, `0..=9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    #[must_use]
    pub fn try_new(value: u8) -> Option<Self> { (value <= 9).then_some(Self(value)) }

    /// For tables built at compile time, where a bad value fails the build.
    #[must_use]
    pub const fn new_const(value: u8) -> Self {
        assert!(value <= 9);
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> u8 { self.0 }

    #[must_use]
    pub fn try_from_char(typed_char: char) -> Option<Self> {
        typed_char
            .to_digit(10)
            .and_then(|it| u8::try_from(it).ok())
            .and_then(Self::try_new)
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
}

/// Everything the calculator can be asked to do. Keyboard and pointer handlers both
/// produce these, and [`reduce`] is the only way they touch the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalcAction {
    Digit(Digit),
    Dot,
    Sign,
    Percent,
    Clear,
    ClearAll,
    Operate(OperatorSymbol),
    DeleteLastChar,
}

impl CalcAction {
    /// The clear key: `Clear` while there is something on the display, otherwise
    /// `ClearAll`.
    #[must_use]
    pub fn clear_key(state: &CalculatorState) -> Self {
        match state.clear_key_mode() {
            ClearKeyMode::ClearDisplay => CalcAction::Clear,
            ClearKeyMode::ClearAll => CalcAction::ClearAll,
        }
    }
}

/// `(state, action) → state`.
#[must_use]
pub fn reduce(state: &CalculatorState, action: &CalcAction) -> CalculatorState {
    let new_state = match action {
        CalcAction::Digit(digit) => state.input_digit(*digit),
        CalcAction::Dot => state.input_dot(),
        CalcAction::Sign => state.toggle_sign(),
        CalcAction::Percent => state.input_percent(),
        CalcAction::Clear => state.clear_display(),
        CalcAction::ClearAll => state.clear_all(),
        CalcAction::Operate(operator) => state.perform_operation(*operator),
        CalcAction::DeleteLastChar => state.delete_last_char(),
    };

    DEBUG_CALC_MOD.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "reduce",
            action = ?action,
            from = %state,
            to = %new_state
        );
    });

    new_state
}

/// Folds a sequence of actions over `state`, left to right.
#[must_use]
pub fn reduce_all<'a>(
    state: &CalculatorState,
    actions: impl IntoIterator<Item = &'a CalcAction>,
) -> CalculatorState {
    actions
        .into_iter()
        .fold(state.clone(), |acc, action| reduce(&acc, action))
}
