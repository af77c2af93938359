// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The numeric text rules the calculator runs on.
//!
//! The display holds text, not a number, so every transition goes through a parse and
//! a stringify. These are the lenient rules the keypad relies on:
//!
//! | Function              | `"5."` | `"1e+21"` | `"-"` | `"Infinity"` |
//! |-----------------------|--------|-----------|-------|--------------|
//! | [`parse_float`]       | `5.0`  | `1e21`    | `NaN` | `inf`        |
//!
//! | Function               | `5.0` | `1e21`    | `1e-7`   | `-0.0` | `inf`        |
//! |------------------------|-------|-----------|----------|--------|--------------|
//! | [`number_to_string`]   | `"5"` | `"1e+21"` | `"1e-7"` | `"0"`  | `"Infinity"` |
//!
//! Both work off the shortest round-trip decimal digits of an [`f64`], see
//! [`ShortestDecimal`].

use std::fmt::Write as _;

pub const INFINITY_STR: &str = "Infinity";
pub const NAN_STR: &str = "NaN";

/// Fixed notation is used while the decimal point position stays below this.
const MAX_FIXED_POINT_POS: i32 = 21;

/// Fixed notation is used while the decimal point position stays above this.
const MIN_FIXED_POINT_POS: i32 = -6;

/// Upper bound on the fraction digits [`to_fixed`] will produce.
pub const MAX_TO_FIXED_DIGITS: usize = 100;

/// Shortest decimal digits that round-trip to the same [`f64`], plus the position of the
/// decimal point: the value is `0.{digits} × 10^point_pos`.
///
/// - `1234.5` → `digits: "12345", point_pos: 4`
/// - `0.05` → `digits: "5", point_pos: -1`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestDecimal {
    pub is_negative: bool,
    pub digits: String,
    pub point_pos: i32,
}

impl ShortestDecimal {
    /// Returns [`None`] for `NaN` and infinities. Zero is `digits: "0", point_pos: 1`.
    #[must_use]
    pub fn try_new(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }

        let is_negative = value.is_sign_negative();

        if value == 0.0 {
            return Some(Self {
                is_negative,
                digits: "0".into(),
                point_pos: 1,
            });
        }

        // `{:e}` emits the shortest round-trip mantissa, eg: `1.2345e3`, `5e-7`.
        let sci = format!("{:e}", value.abs());
        let (mantissa, exponent) = sci.split_once('e')?;
        let exponent: i32 = exponent.parse().ok()?;
        let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();

        Some(Self {
            is_negative,
            digits,
            point_pos: exponent + 1,
        })
    }
}

/// Parses the longest numeric prefix of `input`, ignoring leading whitespace and whatever
/// trails the number. Returns [`f64::NAN`] when there is no numeric prefix at all.
#[must_use]
pub fn parse_float(input: &str) -> f64 {
    let text = input.trim_start();
    let bytes = text.as_bytes();
    let mut idx = 0;

    let is_negative = match bytes.first() {
        Some(b'-') => {
            idx += 1;
            true
        }
        Some(b'+') => {
            idx += 1;
            false
        }
        _ => false,
    };

    if text[idx..].starts_with(INFINITY_STR) {
        return if is_negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = idx;
    while idx < bytes.len() && bytes[idx].is_ascii_digit() {
        idx += 1;
    }
    let int_digits = &text[int_start..idx];

    let mut frac_digits = "";
    if idx < bytes.len() && bytes[idx] == b'.' {
        let frac_start = idx + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_digits = &text[frac_start..end];
        idx = end;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return f64::NAN;
    }

    // Exponent only counts if at least one digit follows the optional sign.
    let mut exponent = "";
    if idx < bytes.len() && (bytes[idx] == b'e' || bytes[idx] == b'E') {
        let exp_start = idx + 1;
        let mut end = exp_start;
        if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
            end += 1;
        }
        let digits_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end > digits_start {
            exponent = &text[exp_start..end];
        }
    }

    let mut literal = String::with_capacity(text.len() + 2);
    if is_negative {
        literal.push('-');
    }
    literal.push_str(if int_digits.is_empty() { "0" } else { int_digits });
    if !frac_digits.is_empty() {
        literal.push('.');
        literal.push_str(frac_digits);
    }
    if !exponent.is_empty() {
        literal.push('e');
        literal.push_str(exponent);
    }

    literal.parse().unwrap_or(f64::NAN)
}

/// Plain-number form of `value`: shortest round-trip digits, fixed notation for
/// magnitudes in `[1e-7, 1e21)`, exponent notation (`1.5e+21`) outside that range.
#[must_use]
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return NAN_STR.into();
    }
    if value.is_infinite() {
        return if value > 0.0 {
            INFINITY_STR.into()
        } else {
            format!("-{INFINITY_STR}")
        };
    }
    // Covers `-0.0` too.
    if value == 0.0 {
        return "0".into();
    }

    let Some(ShortestDecimal {
        is_negative,
        digits,
        point_pos,
    }) = ShortestDecimal::try_new(value)
    else {
        return NAN_STR.into();
    };

    let mut acc = String::new();
    if is_negative {
        acc.push('-');
    }

    let num_digits = i32::try_from(digits.len()).unwrap_or(i32::MAX);

    if num_digits <= point_pos && point_pos <= MAX_FIXED_POINT_POS {
        // 1200 → "12" followed by 2 zeros.
        acc.push_str(&digits);
        push_zeros(&mut acc, point_pos - num_digits);
    } else if 0 < point_pos && point_pos <= MAX_FIXED_POINT_POS {
        // 12.34 → "12" "." "34".
        let (int_part, frac_part) = digits.split_at(point_pos.unsigned_abs() as usize);
        acc.push_str(int_part);
        acc.push('.');
        acc.push_str(frac_part);
    } else if MIN_FIXED_POINT_POS < point_pos && point_pos <= 0 {
        // 0.0012 → "0." then 2 zeros then "12".
        acc.push_str("0.");
        push_zeros(&mut acc, -point_pos);
        acc.push_str(&digits);
    } else {
        let exponent = point_pos - 1;
        let (first, rest) = digits.split_at(1);
        acc.push_str(first);
        if !rest.is_empty() {
            acc.push('.');
            acc.push_str(rest);
        }
        let sign = if exponent < 0 { '-' } else { '+' };
        _ = write!(acc, "e{sign}{}", exponent.unsigned_abs());
    }

    acc
}

/// Formats `value` with exactly `fraction_digits` digits after the point (capped at
/// [`MAX_TO_FIXED_DIGITS`]). Values that [`number_to_string`] would put in exponent
/// form, and non-finite values, are returned in that form instead.
#[must_use]
pub fn to_fixed(value: f64, fraction_digits: usize) -> String {
    if !value.is_finite() || value.abs() >= 1e21 {
        return number_to_string(value);
    }

    let fraction_digits = fraction_digits.min(MAX_TO_FIXED_DIGITS);

    // Negative zero prints without a sign.
    let value = if value == 0.0 { 0.0 } else { value };

    format!("{value:.fraction_digits$}")
}

/// Number of characters that follow the integer part and the decimal point of a display
/// string, eg: `"-12.340"` → `3`, `"5"` → `0`, `"5."` → `0`.
///
/// Artifacts like `"1e+21"` count their exponent suffix too, which only ever widens the
/// fixed fraction [`to_fixed`] is asked for.
#[must_use]
pub fn typed_fraction_len(display_value: &str) -> usize {
    let rest = display_value.strip_prefix('-').unwrap_or(display_value);
    let rest = rest.trim_start_matches(|it: char| it.is_ascii_digit());
    let rest = rest.strip_prefix('.').unwrap_or(rest);
    rest.chars().count()
}

fn push_zeros(acc: &mut String, count: i32) {
    for _ in 0..count.max(0) {
        acc.push('0');
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("0", 0.0)]
    #[test_case("5", 5.0)]
    #[test_case("5.", 5.0)]
    #[test_case(".5", 0.5)]
    #[test_case("-12.25", -12.25)]
    #[test_case("  42abc", 42.0)]
    #[test_case("1e+21", 1e21)]
    #[test_case("1.5e-7", 1.5e-7)]
    #[test_case("3e", 3.0)]
    #[test_case("3e+", 3.0)]
    #[test_case("Infinity", f64::INFINITY)]
    #[test_case("-Infinity", f64::NEG_INFINITY)]
    #[test_case("Infinit", f64::NAN)]
    #[test_case("-", f64::NAN)]
    #[test_case("", f64::NAN)]
    #[test_case("NaN", f64::NAN)]
    fn test_parse_float(input: &str, expected: f64) {
        let actual = parse_float(input);
        if expected.is_nan() {
            assert!(actual.is_nan(), "{input:?} parsed to {actual}");
        } else {
            assert_eq!(actual, expected);
        }
    }

    #[test_case(0.0, "0")]
    #[test_case(-0.0, "0")]
    #[test_case(8.0, "8")]
    #[test_case(-4.0, "-4")]
    #[test_case(0.1 + 0.2, "0.30000000000000004")]
    #[test_case(1234.5, "1234.5")]
    #[test_case(0.000_001, "0.000001")]
    #[test_case(1e-7, "1e-7")]
    #[test_case(1.5e-10, "1.5e-10")]
    #[test_case(1e20, "100000000000000000000")]
    #[test_case(1e21, "1e+21")]
    #[test_case(-2.5e22, "-2.5e+22")]
    #[test_case(f64::INFINITY, "Infinity")]
    #[test_case(f64::NEG_INFINITY, "-Infinity")]
    #[test_case(f64::NAN, "NaN")]
    fn test_number_to_string(value: f64, expected: &str) {
        assert_eq!(number_to_string(value), expected);
    }

    #[test_case(0.05, 2, "0.05")]
    #[test_case(0.123, 5, "0.12300")]
    #[test_case(-0.04, 3, "-0.040")]
    #[test_case(-0.0, 2, "0.00")]
    #[test_case(1e21, 2, "1e+21")]
    #[test_case(f64::INFINITY, 4, "Infinity")]
    #[test_case(f64::NAN, 2, "NaN")]
    fn test_to_fixed(value: f64, digits: usize, expected: &str) {
        assert_eq!(to_fixed(value, digits), expected);
    }

    #[test]
    fn test_to_fixed_caps_digits() {
        let it = to_fixed(1.0, 500);
        assert_eq!(it.len(), "1.".len() + MAX_TO_FIXED_DIGITS);
    }

    #[test_case("5", 0)]
    #[test_case("5.", 0)]
    #[test_case("-12.340", 3)]
    #[test_case(".25", 2)]
    #[test_case("1e+21", 4)]
    fn test_typed_fraction_len(display_value: &str, expected: usize) {
        assert_eq!(typed_fraction_len(display_value), expected);
    }

    #[test]
    fn test_shortest_decimal() {
        assert_eq!(
            ShortestDecimal::try_new(1234.5),
            Some(ShortestDecimal {
                is_negative: false,
                digits: "12345".into(),
                point_pos: 4,
            })
        );
        assert_eq!(
            ShortestDecimal::try_new(-0.05),
            Some(ShortestDecimal {
                is_negative: true,
                digits: "5".into(),
                point_pos: -1,
            })
        );
        assert_eq!(ShortestDecimal::try_new(f64::NAN), None);
    }
}
