// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Formatter};

use crate::{CalcAction, CalculatorState, Locale};

/// Everything the calculator app renders from.
#[derive(Clone, Default, PartialEq)]
pub struct State {
    pub calculator: CalculatorState,
    pub locale: Locale,
}

/// Sent from the input handler to the main event loop, which hands it back to
/// [`crate::App::app_handle_signal`] where the state is actually changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppSignal {
    Apply(CalcAction),
}

mod constructor {
    use super::*;

    impl State {
        #[must_use]
        pub fn new(locale: Locale) -> Self {
            Self {
                calculator: CalculatorState::default(),
                locale,
            }
        }
    }
}

impl Debug for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "State [{} | locale: {}]", self.calculator, self.locale)
    }
}
