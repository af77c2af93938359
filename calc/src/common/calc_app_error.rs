// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Failures of the application plumbing. Arithmetic never produces one of these, since
/// `Infinity` and `NaN` are just shown on the display.
///
/// | Variant                | Cause                                             |
/// | :--------------------- | :------------------------------------------------ |
/// | [`NotInteractive`]     | stdin or stdout is not a terminal                 |
/// | [`UnknownLocale`]      | `--locale` named a locale that is not supported   |
/// | [`InvalidLogFilePath`] | `--log-file` has no file name component           |
/// | [`TerminalIo`]         | crossterm could not change modes or write output  |
///
/// [`NotInteractive`]: Self::NotInteractive
/// [`UnknownLocale`]: Self::UnknownLocale
/// [`InvalidLogFilePath`]: Self::InvalidLogFilePath
/// [`TerminalIo`]: Self::TerminalIo
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum CalcAppError {
    #[error("🖥️ The calculator needs an interactive terminal")]
    #[diagnostic(
        code(tui_calc::not_interactive),
        help("Run `calc` directly in a terminal, without piping stdin or stdout.")
    )]
    NotInteractive,

    #[error("🌐 Unknown locale: '{tag}'")]
    #[diagnostic(
        code(tui_calc::unknown_locale),
        help("Supported locales are: {supported}")
    )]
    UnknownLocale { tag: String, supported: String },

    #[error("📑 Invalid log file path: '{path}'")]
    #[diagnostic(
        code(tui_calc::invalid_log_file_path),
        help("Pass a path that ends in a file name, eg: `--log-file /tmp/calc.log`.")
    )]
    InvalidLogFilePath { path: String },

    #[error("⚡ Terminal I/O failed while trying to {action}")]
    #[diagnostic(code(tui_calc::terminal_io))]
    TerminalIo {
        action: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl CalcAppError {
    /// Use with [`Result::map_err`] to tag a crossterm failure with what was being done.
    pub fn terminal_io(action: &'static str) -> impl FnOnce(std::io::Error) -> Self {
        move |source| Self::TerminalIo { action, source }
    }
}
