// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::MietteHandlerOpts;

pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Registers the global report handler used when `main()` returns an error.
///
/// The [`miette::ErrorHook`] is lazily evaluated. The terminal width is calculated just
/// at the time of the global error handler being used. So if an error never occurs, then
/// the terminal width will never be calculated.
pub fn setup_default_miette_global_report_handler(footer: String) {
    miette::set_hook(Box::new(move |_report| {
        let terminal_width = crossterm::terminal::size()
            .map_or(DEFAULT_TERMINAL_WIDTH, |(columns, _rows)| usize::from(columns));
        tracing::debug!(message = "miette::set_hook", terminal_width);
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .footer(footer.clone())
                .build(),
        )
    }))
    .ok();
}
