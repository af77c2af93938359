// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DEFAULT_LOG_FILE_NAME, Locale};

pub const STATUS_BAR_HINTS: &str = "Ctrl+Q quit · Esc clear · ⌫ delete · F9 ±";

#[must_use]
pub fn status_bar_locale(locale: &Locale) -> String { format!("{locale} ") }

#[must_use]
pub fn goodbye_msg(display_value: &str) -> String {
    format!("Last result: {display_value}")
}

/// Footer of the error report printed when `calc` exits with an error.
#[must_use]
pub fn error_report_footer() -> String {
    format!(
        "To capture more detail, run `calc -l --log-level trace` again and look in \
         `{DEFAULT_LOG_FILE_NAME}`."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_report_footer_names_the_log_file() {
        let it = error_report_footer();
        assert!(it.contains("calc -l"));
        assert!(it.contains(DEFAULT_LOG_FILE_NAME));
        assert!(!it.contains("http"));
    }
}
