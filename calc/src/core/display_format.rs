// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{Locale,
            number_fmt::{INFINITY_STR, NAN_STR, parse_float}};

/// The display never shows more fraction digits than this, unless the user typed
/// trailing zeros beyond it.
pub const MAX_FRACTION_DIGITS: usize = 6;

/// Turns the raw display string into what is painted on screen: locale grouping, at most
/// [`MAX_FRACTION_DIGITS`] fraction digits, and any trailing zeros the user has typed so
/// far (so `12.0` shows up while typing `12.05`).
///
/// The trailing zero handling compares the fraction that was typed with the fraction that
/// the locale formatter produced. Only when the formatted fraction is a prefix of the
/// typed one, and the remainder is all zeros, is that remainder appended. This means a
/// fraction that got rounded (`1.99999990` → `2`) never has zeros glued onto it.
///
/// ```
/// use tui_calc::{Locale, format_display_value};
///
/// let en_us = Locale::default();
/// assert_eq!(format_display_value("1234.50", &en_us), "1,234.50");
/// assert_eq!(format_display_value("12.", &en_us), "12.");
///
/// let de_de = Locale::try_from_tag("de-DE").unwrap();
/// assert_eq!(format_display_value("1234.50", &de_de), "1.234,50");
/// ```
#[must_use]
pub fn format_display_value(raw_value: &str, locale: &Locale) -> String {
    let value = parse_float(raw_value);

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

    let mut formatted = locale.format_number(value, MAX_FRACTION_DIGITS);

    if let Some(missing_zeros) = typed_zeros_dropped_by_formatter(raw_value, &formatted, locale)
    {
        if !formatted.contains(locale.decimal_separator) {
            formatted.push(locale.decimal_separator);
        }
        formatted.push_str(missing_zeros);
    }

    formatted
}

/// Returns the typed trailing fraction that needs to be appended to `formatted`, which
/// can be empty (a bare trailing point, eg: `"12."`). Returns [`None`] when nothing
/// should be appended, including when there is no point in the raw value at all.
fn typed_zeros_dropped_by_formatter<'a>(
    raw_value: &'a str,
    formatted: &str,
    locale: &Locale,
) -> Option<&'a str> {
    let (_, typed_fraction) = raw_value.split_once('.')?;

    // Exponent forms like "1.5e-7" are not something the user typed.
    if !typed_fraction.bytes().all(|it| it.is_ascii_digit()) {
        return None;
    }

    let formatted_fraction = formatted
        .split_once(locale.decimal_separator)
        .map_or("", |(_, fraction)| fraction);

    let remainder = typed_fraction.strip_prefix(formatted_fraction)?;

    remainder.bytes().all(|it| it == b'0').then_some(remainder)
}
