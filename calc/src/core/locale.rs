// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use super::number_fmt::{ShortestDecimal, number_to_string};
use crate::{CalcAppError, CommonResult, DEBUG_CALC_MOD};

/// Used when neither the command line nor the environment names a supported locale.
pub const DEFAULT_LOCALE_TAG: &str = "en-US";

/// Environment variables consulted (in order) for the number formatting locale.
pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_NUMERIC", "LANG"];

/// How digits of the integer part are bunched together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupingStyle {
    /// `1,234,567`.
    Thousands,
    /// `12,34,567`: the last 3 digits, then groups of 2.
    Indian,
}

/// Number formatting conventions of one locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Locale {
    pub tag: &'static str,
    pub group_separator: &'static str,
    pub decimal_separator: char,
    /// Integer parts shorter than `3 + min_grouping_digits` digits are not grouped.
    pub min_grouping_digits: usize,
    pub grouping_style: GroupingStyle,
}

const fn locale(
    tag: &'static str,
    group_separator: &'static str,
    decimal_separator: char,
) -> Locale {
    Locale {
        tag,
        group_separator,
        decimal_separator,
        min_grouping_digits: 1,
        grouping_style: GroupingStyle::Thousands,
    }
}

pub const SUPPORTED_LOCALES: [Locale; 11] = [
    locale("en-US", ",", '.'),
    locale("en-GB", ",", '.'),
    Locale {
        grouping_style: GroupingStyle::Indian,
        ..locale("en-IN", ",", '.')
    },
    locale("de-DE", ".", ','),
    locale("de-CH", "\u{2019}", '.'),
    locale("fr-FR", "\u{202F}", ','),
    Locale {
        min_grouping_digits: 2,
        ..locale("es-ES", ".", ',')
    },
    locale("it-IT", ".", ','),
    locale("pt-BR", ".", ','),
    locale("ja-JP", ",", '.'),
    locale("zh-CN", ",", '.'),
];

impl Default for Locale {
    fn default() -> Self { SUPPORTED_LOCALES[0] }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.tag) }
}

mod resolve {
    use super::*;

    impl Locale {
        /// Accepts BCP-47 tags (`de-DE`) and POSIX locale names (`de_DE.UTF-8`,
        /// `fr_FR@euro`). An exact region match wins; otherwise the first supported
        /// locale for the same language is used (`de-AT` → `de-DE`).
        pub fn try_from_tag(tag: &str) -> CommonResult<Self> {
            let normalized = normalize_tag(tag);

            let exact_match = SUPPORTED_LOCALES
                .iter()
                .find(|it| it.tag.eq_ignore_ascii_case(&normalized));

            let language = normalized.split('-').next().unwrap_or_default();
            let language_match = || {
                SUPPORTED_LOCALES.iter().find(|it| {
                    it.tag
                        .split('-')
                        .next()
                        .is_some_and(|lang| lang.eq_ignore_ascii_case(language))
                })
            };

            match exact_match.or_else(language_match) {
                Some(it) => Ok(*it),
                None => Err(CalcAppError::UnknownLocale {
                    tag: tag.to_string(),
                    supported: supported_tags(),
                }
                .into()),
            }
        }

        /// An explicitly requested locale must be supported. Otherwise the first of
        /// [`LOCALE_ENV_VARS`] that is set decides, falling back to the default locale
        /// when it is unsupported (eg: `C`, `POSIX`).
        pub fn resolve(
            maybe_requested: Option<&str>,
            env_lookup: impl Fn(&str) -> Option<String>,
        ) -> CommonResult<Self> {
            if let Some(requested) = maybe_requested {
                return Self::try_from_tag(requested);
            }

            let maybe_env_value = LOCALE_ENV_VARS
                .iter()
                .find_map(|name| env_lookup(name).filter(|it| !it.is_empty()));

            let Some(env_value) = maybe_env_value else {
                return Ok(Self::default());
            };

            match Self::try_from_tag(&env_value) {
                Ok(it) => Ok(it),
                Err(error) => {
                    // % is Display, ? is Debug.
                    tracing::warn!(
                        message = "Unsupported locale in environment, using default",
                        env_value = %env_value,
                        error = %error,
                        default = DEFAULT_LOCALE_TAG
                    );
                    Ok(Self::default())
                }
            }
        }

        /// [`Locale::resolve`] against the process environment.
        pub fn resolve_from_process_env(maybe_requested: Option<&str>) -> CommonResult<Self> {
            let it = Self::resolve(maybe_requested, |name| std::env::var(name).ok())?;
            DEBUG_CALC_MOD.then(|| {
                tracing::debug!(message = "Resolved locale", locale = %it);
            });
            Ok(it)
        }
    }

    fn normalize_tag(tag: &str) -> String {
        let tag = tag.split(['.', '@']).next().unwrap_or_default();
        tag.trim().replace('_', "-")
    }

    fn supported_tags() -> String {
        SUPPORTED_LOCALES
            .iter()
            .map(|it| it.tag)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

mod format {
    use super::*;

    impl Locale {
        /// Groups the integer part, rounds the fraction to at most
        /// `max_fraction_digits` (half away from zero, on the shortest decimal digits)
        /// and drops trailing fraction zeros. Non-finite values are not handled here.
        #[must_use]
        pub fn format_number(&self, value: f64, max_fraction_digits: usize) -> String {
            let Some(decimal) = ShortestDecimal::try_new(value) else {
                return number_to_string(value);
            };

            let (int_digits, frac_digits) =
                round_to_fraction_digits(&decimal, max_fraction_digits);

            let mut acc = String::new();
            if decimal.is_negative {
                acc.push('-');
            }
            acc.push_str(&self.group_integer_digits(&int_digits));
            if !frac_digits.is_empty() {
                acc.push(self.decimal_separator);
                acc.push_str(&frac_digits);
            }
            acc
        }

        /// `"1234567"` → `"1,234,567"` (en-US), `"12,34,567"` (en-IN).
        #[must_use]
        pub fn group_integer_digits(&self, int_digits: &str) -> String {
            let len = int_digits.len();
            if len < 3 + self.min_grouping_digits {
                return int_digits.to_string();
            }

            let (head, last_three) = int_digits.split_at(len - 3);
            let head_group_len = match self.grouping_style {
                GroupingStyle::Thousands => 3,
                GroupingStyle::Indian => 2,
            };

            let mut groups: Vec<&str> = vec![last_three];
            let mut rest = head;
            while !rest.is_empty() {
                let split_at = rest.len().saturating_sub(head_group_len);
                let (next_rest, group) = rest.split_at(split_at);
                groups.push(group);
                rest = next_rest;
            }
            groups.reverse();
            groups.join(self.group_separator)
        }
    }

    /// Splits `decimal` into integer and fraction digit strings, rounding the fraction to
    /// `max_fraction_digits`. Trailing zeros of the fraction are removed, and the integer
    /// part is at least `"0"`.
    pub(super) fn round_to_fraction_digits(
        decimal: &ShortestDecimal,
        max_fraction_digits: usize,
    ) -> (String, String) {
        let digits = decimal.digits.as_str();
        let num_digits = digits.len();

        let (mut int_part, mut frac_part): (Vec<u8>, Vec<u8>) = if decimal.point_pos <= 0
        {
            let leading_zeros = decimal.point_pos.unsigned_abs() as usize;
            let mut frac = vec![b'0'; leading_zeros];
            frac.extend_from_slice(digits.as_bytes());
            (vec![], frac)
        } else {
            let point_pos = decimal.point_pos.unsigned_abs() as usize;
            if point_pos >= num_digits {
                let mut int = digits.as_bytes().to_vec();
                int.resize(point_pos, b'0');
                (int, vec![])
            } else {
                let (int, frac) = digits.as_bytes().split_at(point_pos);
                (int.to_vec(), frac.to_vec())
            }
        };

        if frac_part.len() > max_fraction_digits {
            let round_up = frac_part[max_fraction_digits] >= b'5';
            frac_part.truncate(max_fraction_digits);
            if round_up {
                increment_decimal(&mut int_part, &mut frac_part);
            }
        }

        while frac_part.last() == Some(&b'0') {
            frac_part.pop();
        }

        let int_str: String = {
            let it = String::from_utf8_lossy(&int_part);
            let it = it.trim_start_matches('0');
            if it.is_empty() { "0".into() } else { it.into() }
        };
        let frac_str = String::from_utf8_lossy(&frac_part).into_owned();

        (int_str, frac_str)
    }

    /// Adds one unit in the last place of `int_part.frac_part`, carrying leftwards.
    fn increment_decimal(int_part: &mut Vec<u8>, frac_part: &mut [u8]) {
        for digit in frac_part.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                return;
            }
        }
        for digit in int_part.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                return;
            }
        }
        int_part.insert(0, b'1');
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;
    use serial_test::serial;
    use test_case::test_case;

    use super::*;

    #[test_case("en-US", "en-US")]
    #[test_case("EN-us", "en-US")]
    #[test_case("de_DE.UTF-8", "de-DE")]
    #[test_case("fr_FR@euro", "fr-FR")]
    #[test_case("de-AT", "de-DE")]
    #[test_case("es", "es-ES")]
    #[test_case("en-AU", "en-US")]
    fn test_try_from_tag(tag: &str, expected: &str) {
        assert_eq!(Locale::try_from_tag(tag).unwrap().tag, expected);
    }

    #[test]
    fn test_try_from_tag_unknown() {
        let error = Locale::try_from_tag("xx-YY").unwrap_err();
        let message = format!("{error}");
        assert!(message.contains("xx-YY"), "{message}");
    }

    #[test]
    fn test_resolve_precedence() {
        let env: HashMap<&str, &str> =
            HashMap::from([("LC_NUMERIC", "de_DE.UTF-8"), ("LANG", "fr_FR.UTF-8")]);
        let lookup = |name: &str| env.get(name).map(ToString::to_string);

        // CLI wins.
        assert_eq!(Locale::resolve(Some("it-IT"), lookup).unwrap().tag, "it-IT");
        // Then LC_ALL (unset here), LC_NUMERIC, LANG.
        assert_eq!(Locale::resolve(None, lookup).unwrap().tag, "de-DE");
        // Nothing set.
        assert_eq!(Locale::resolve(None, |_| None).unwrap().tag, DEFAULT_LOCALE_TAG);
    }

    #[test]
    fn test_resolve_unsupported_env_falls_back() {
        let lookup = |name: &str| (name == "LANG").then(|| "C".to_string());
        assert_eq!(Locale::resolve(None, lookup).unwrap().tag, DEFAULT_LOCALE_TAG);
    }

    #[test]
    fn test_resolve_unsupported_cli_is_an_error() {
        assert!(Locale::resolve(Some("tlh"), |_| None).is_err());
    }

    #[serial]
    #[test]
    fn test_resolve_from_process_env() {
        // SAFETY: Tests touching the environment are serialized.
        unsafe {
            std::env::set_var("LC_ALL", "pt_BR.UTF-8");
        }
        let it = Locale::resolve_from_process_env(None);
        unsafe {
            std::env::remove_var("LC_ALL");
        }
        assert_eq!(it.unwrap().tag, "pt-BR");
    }

    #[test_case("en-US", 1_234_567.891, "1,234,567.891")]
    #[test_case("en-US", 999.0, "999")]
    #[test_case("en-US", -1234.5, "-1,234.5")]
    #[test_case("en-US", 0.123_456_78, "0.123457")]
    #[test_case("en-US", 0.999_999_9, "1")]
    #[test_case("en-US", 99_999.999_999_9, "100,000")]
    #[test_case("en-US", 1e-7, "0")]
    #[test_case("en-US", 1e21, "1,000,000,000,000,000,000,000")]
    #[test_case("en-IN", 12_345_678.0, "1,23,45,678")]
    #[test_case("de-DE", 1234.5, "1.234,5")]
    #[test_case("de-CH", 1234.5, "1\u{2019}234.5")]
    #[test_case("fr-FR", 1234.5, "1\u{202F}234,5")]
    #[test_case("es-ES", 1234.0, "1234")]
    #[test_case("es-ES", 12345.0, "12.345")]
    fn test_format_number(tag: &str, value: f64, expected: &str) {
        let locale = Locale::try_from_tag(tag).unwrap();
        assert_eq!(locale.format_number(value, 6), expected);
    }
}
