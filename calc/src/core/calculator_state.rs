// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Display, Formatter};

use super::{Digit, OperatorSymbol,
            number_fmt::{number_to_string, parse_float, to_fixed, typed_fraction_len}};

/// What the display shows on a fresh calculator, and after any clear.
pub const DEFAULT_DISPLAY_VALUE: &str = "0";

/// The whole calculator. Every transition is a `&self → Self` function, so the caller
/// decides when the new state replaces the old one. See [`crate::reduce`] for the
/// action based entry point.
///
/// `display_value` is text, not a number, because it has to hold partial input like
/// `"12."` or `"0.00"`. Results of invalid arithmetic (`"Infinity"`, `"NaN"`) land in it
/// unchanged.
#[derive(Clone, PartialEq)]
pub struct CalculatorState {
    /// Left operand of the pending operation.
    pub accumulator: Option<f64>,
    pub display_value: String,
    pub operator: Option<OperatorSymbol>,
    /// When set, the next digit starts a new number instead of extending the display.
    pub awaiting_operand: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            accumulator: None,
            display_value: DEFAULT_DISPLAY_VALUE.into(),
            operator: None,
            awaiting_operand: false,
        }
    }
}

mod transitions {
    use super::*;

    impl CalculatorState {
        #[must_use]
        pub fn input_digit(&self, digit: Digit) -> Self {
            let display_value = if self.awaiting_operand
                || self.display_value == DEFAULT_DISPLAY_VALUE
            {
                digit.to_string()
            } else {
                format!("{}{digit}", self.display_value)
            };

            Self {
                display_value,
                awaiting_operand: false,
                ..self.clone()
            }
        }

        /// Only the first point is accepted. Appending it also ends the wait for a new
        /// operand, so `5 + .` reads `5.` and continues the old number.
        #[must_use]
        pub fn input_dot(&self) -> Self {
            if self.display_value.contains('.') {
                return self.clone();
            }

            Self {
                display_value: format!("{}.", self.display_value),
                awaiting_operand: false,
                ..self.clone()
            }
        }

        #[must_use]
        pub fn toggle_sign(&self) -> Self {
            let new_value = parse_float(&self.display_value) * -1.0;
            Self {
                display_value: number_to_string(new_value),
                ..self.clone()
            }
        }

        /// Divides by 100, keeping every digit the user typed: the fraction grows by
        /// exactly two digits, eg: `"12.5"` → `"0.125"`, `"50"` → `"0.50"`.
        #[must_use]
        pub fn input_percent(&self) -> Self {
            let current_value = parse_float(&self.display_value);
            if current_value == 0.0 {
                return self.clone();
            }

            let fraction_digits = typed_fraction_len(&self.display_value) + 2;
            let new_value = current_value / 100.0;

            Self {
                display_value: to_fixed(new_value, fraction_digits),
                ..self.clone()
            }
        }

        #[must_use]
        pub fn clear_display(&self) -> Self {
            Self {
                display_value: DEFAULT_DISPLAY_VALUE.into(),
                ..self.clone()
            }
        }

        #[must_use]
        pub fn clear_all(&self) -> Self { Self::default() }

        /// Backspace. Removing the last character resets the display to
        /// [`DEFAULT_DISPLAY_VALUE`].
        #[must_use]
        pub fn delete_last_char(&self) -> Self {
            let mut display_value = self.display_value.clone();
            display_value.pop();
            if display_value.is_empty() {
                display_value = DEFAULT_DISPLAY_VALUE.into();
            }

            Self {
                display_value,
                ..self.clone()
            }
        }

        /// Folds the display into the accumulator using the pending operator (strictly
        /// left to right, no precedence), then makes `next_operator` the pending one.
        #[must_use]
        pub fn perform_operation(&self, next_operator: OperatorSymbol) -> Self {
            let input_value = parse_float(&self.display_value);

            let (accumulator, display_value) = match (self.accumulator, self.operator) {
                (None, _) => (Some(input_value), self.display_value.clone()),
                (Some(prev_value), Some(pending_operator)) => {
                    // A NaN accumulator restarts from zero.
                    let prev_value = if prev_value.is_nan() { 0.0 } else { prev_value };
                    let new_value = pending_operator.apply(prev_value, input_value);
                    (Some(new_value), number_to_string(new_value))
                }
                (Some(_), None) => (self.accumulator, self.display_value.clone()),
            };

            Self {
                accumulator,
                display_value,
                operator: Some(next_operator),
                awaiting_operand: true,
            }
        }
    }
}

mod clear_key {
    use super::*;

    /// The clear key does one of two things depending on the display.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum ClearKeyMode {
        /// `C`: only the display is reset.
        ClearDisplay,
        /// `AC`: everything is reset.
        ClearAll,
    }

    impl ClearKeyMode {
        #[must_use]
        pub fn label(self) -> &'static str {
            match self {
                ClearKeyMode::ClearDisplay => "C",
                ClearKeyMode::ClearAll => "AC",
            }
        }
    }

    impl CalculatorState {
        #[must_use]
        pub fn can_clear_display(&self) -> bool {
            self.display_value != DEFAULT_DISPLAY_VALUE
        }

        #[must_use]
        pub fn clear_key_mode(&self) -> ClearKeyMode {
            if self.can_clear_display() {
                ClearKeyMode::ClearDisplay
            } else {
                ClearKeyMode::ClearAll
            }
        }
    }
}
pub use clear_key::*;

mod impl_debug {
    use super::*;

    impl Debug for CalculatorState {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(
                f,
                "CalculatorState {{ accumulator: {:?}, display_value: {:?}, operator: {:?}, awaiting_operand: {:?} }}",
                self.accumulator, self.display_value, self.operator, self.awaiting_operand
            )
        }
    }
}

/// Compact form for logging, eg: `State[12 + | 3]`.
mod impl_display {
    use super::*;

    impl Display for CalculatorState {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            let accumulator = self
                .accumulator
                .map_or_else(|| "_".to_string(), number_to_string);
            let operator = self
                .operator
                .map_or_else(|| "_".to_string(), |it| it.to_string());
            let awaiting = if self.awaiting_operand { "…" } else { "" };
            write!(
                f,
                "State[{accumulator} {operator} | {}{awaiting}]",
                self.display_value
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    fn digit(it: u8) -> Digit { Digit::try_new(it).unwrap() }

    fn with_display(display_value: &str) -> CalculatorState {
        CalculatorState {
            display_value: display_value.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_initial_state() {
        let it = CalculatorState::default();
        assert_eq!(it.accumulator, None);
        assert_eq!(it.display_value, "0");
        assert_eq!(it.operator, None);
        assert!(!it.awaiting_operand);
    }

    #[test]
    fn test_input_digit_replaces_default_display() {
        let it = CalculatorState::default().input_digit(digit(5));
        assert_eq!(it.display_value, "5");
    }

    #[test]
    fn test_input_digit_appends() {
        let it = with_display("12").input_digit(digit(3));
        assert_eq!(it.display_value, "123");

        let it = with_display("0.").input_digit(digit(0));
        assert_eq!(it.display_value, "0.0");
    }

    #[test]
    fn test_input_digit_starts_new_operand() {
        let it = CalculatorState {
            display_value: "42".into(),
            awaiting_operand: true,
            ..Default::default()
        }
        .input_digit(digit(7));
        assert_eq!(it.display_value, "7");
        assert!(!it.awaiting_operand);
    }

    #[test]
    fn test_input_dot_twice_has_one_point() {
        let it = CalculatorState::default().input_dot().input_dot();
        assert_eq!(it.display_value, "0.");
        assert_eq!(it.display_value.matches('.').count(), 1);
    }

    #[test]
    fn test_input_dot_ends_awaiting_operand() {
        let it = CalculatorState {
            display_value: "5".into(),
            awaiting_operand: true,
            ..Default::default()
        }
        .input_dot();
        assert_eq!(it.display_value, "5.");
        assert!(!it.awaiting_operand);
    }

    #[test]
    fn test_input_dot_ignored_when_present() {
        let before = CalculatorState {
            display_value: "1.5".into(),
            awaiting_operand: true,
            ..Default::default()
        };
        assert_eq!(before.input_dot(), before);
    }

    #[test_case("4", "-4")]
    #[test_case("-4", "4")]
    #[test_case("0", "0")]
    #[test_case("12.", "-12")]
    #[test_case("0.50", "-0.5")]
    #[test_case("NaN", "NaN")]
    #[test_case("Infinity", "-Infinity")]
    fn test_toggle_sign(display_value: &str, expected: &str) {
        assert_eq!(with_display(display_value).toggle_sign().display_value, expected);
    }

    #[test]
    fn test_toggle_sign_twice_round_trips() {
        let it = with_display("4").toggle_sign().toggle_sign();
        assert_eq!(it.display_value, "4");
    }

    #[test_case("50", "0.50")]
    #[test_case("5", "0.05")]
    #[test_case("12.5", "0.125")]
    #[test_case("-3", "-0.03")]
    #[test_case("0.1", "0.001")]
    #[test_case("NaN", "NaN")]
    fn test_input_percent(display_value: &str, expected: &str) {
        assert_eq!(with_display(display_value).input_percent().display_value, expected);
    }

    #[test_case("0")]
    #[test_case("0.")]
    #[test_case("0.000")]
    #[test_case("-0")]
    fn test_input_percent_zero_is_noop(display_value: &str) {
        let before = CalculatorState {
            accumulator: Some(3.0),
            display_value: display_value.into(),
            operator: Some(OperatorSymbol::Add),
            awaiting_operand: true,
        };
        assert_eq!(before.input_percent(), before);
    }

    #[test]
    fn test_clear_display_keeps_pending_operation() {
        let before = CalculatorState {
            accumulator: Some(2.0),
            display_value: "3".into(),
            operator: Some(OperatorSymbol::Add),
            awaiting_operand: false,
        };
        let it = before.clear_display();
        assert_eq!(it.display_value, "0");
        assert_eq!(it.accumulator, Some(2.0));
        assert_eq!(it.operator, Some(OperatorSymbol::Add));
    }

    #[test]
    fn test_clear_all() {
        let before = CalculatorState {
            accumulator: Some(2.0),
            display_value: "3".into(),
            operator: Some(OperatorSymbol::Add),
            awaiting_operand: true,
        };
        assert_eq!(before.clear_all(), CalculatorState::default());
    }

    #[test_case("123", "12")]
    #[test_case("7", "0")]
    #[test_case("-7", "-")]
    #[test_case("0", "0")]
    #[test_case("1.", "1")]
    fn test_delete_last_char(display_value: &str, expected: &str) {
        assert_eq!(with_display(display_value).delete_last_char().display_value, expected);
    }

    #[test]
    fn test_perform_operation_first_operand() {
        let it = with_display("5").perform_operation(OperatorSymbol::Add);
        assert_eq!(it.accumulator, Some(5.0));
        assert_eq!(it.display_value, "5");
        assert_eq!(it.operator, Some(OperatorSymbol::Add));
        assert!(it.awaiting_operand);
    }

    #[test]
    fn test_perform_operation_folds_pending_operator() {
        let before = CalculatorState {
            accumulator: Some(2.0),
            display_value: "3".into(),
            operator: Some(OperatorSymbol::Add),
            awaiting_operand: false,
        };
        let it = before.perform_operation(OperatorSymbol::Equals);
        assert_eq!(it.display_value, "5");
        assert_eq!(it.accumulator, Some(5.0));
        assert_eq!(it.operator, Some(OperatorSymbol::Equals));
    }

    #[test]
    fn test_perform_operation_without_pending_operator_keeps_accumulator() {
        let before = CalculatorState {
            accumulator: Some(2.0),
            display_value: "3".into(),
            operator: None,
            awaiting_operand: false,
        };
        let it = before.perform_operation(OperatorSymbol::Add);
        assert_eq!(it.accumulator, Some(2.0));
        assert_eq!(it.display_value, "3");
        assert_eq!(it.operator, Some(OperatorSymbol::Add));
        assert!(it.awaiting_operand);

        let it = it.perform_operation(OperatorSymbol::Equals);
        assert_eq!(it.display_value, "5");
        assert_eq!(it.accumulator, Some(5.0));
    }

    #[test]
    fn test_perform_operation_no_precedence() {
        // 2 + 3 * 4 = is (2 + 3) * 4.
        let it = with_display("2")
            .perform_operation(OperatorSymbol::Add)
            .input_digit(digit(3))
            .perform_operation(OperatorSymbol::Multiply);
        assert_eq!(it.display_value, "5");
        let it = it.input_digit(digit(4)).perform_operation(OperatorSymbol::Equals);
        assert_eq!(it.display_value, "20");
    }

    #[test]
    fn test_perform_operation_nan_accumulator_restarts_from_zero() {
        let before = CalculatorState {
            accumulator: Some(f64::NAN),
            display_value: "4".into(),
            operator: Some(OperatorSymbol::Add),
            awaiting_operand: false,
        };
        assert_eq!(before.perform_operation(OperatorSymbol::Equals).display_value, "4");
    }

    #[test]
    fn test_clear_key_mode() {
        assert_eq!(CalculatorState::default().clear_key_mode(), ClearKeyMode::ClearAll);
        assert_eq!(with_display("9").clear_key_mode(), ClearKeyMode::ClearDisplay);
        assert_eq!(ClearKeyMode::ClearAll.label(), "AC");
        assert_eq!(ClearKeyMode::ClearDisplay.label(), "C");
    }

    #[test]
    fn test_display_impl() {
        let it = CalculatorState {
            accumulator: Some(12.0),
            display_value: "3".into(),
            operator: Some(OperatorSymbol::Add),
            awaiting_operand: true,
        };
        assert_eq!(it.to_string(), "State[12 + | 3…]");
    }
}
