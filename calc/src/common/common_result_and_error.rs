// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

/// Type alias to make it easy to work with:
/// 1. [`std::result::Result`]
/// 2. [`miette::Result`] and [`miette::Report`], which are [`std::error::Error`]
///    wrappers.
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Works hand in hand w/ [`crate::CalcAppError`] and any other type of error.
///
/// # Example
///
/// ```
/// use tui_calc::{CommonResult, Locale};
///
/// fn pick_locale(tag: &str) -> CommonResult<Locale> {
///     let it = Locale::try_from_tag(tag)?;
///     Ok(it)
/// }
///
/// assert!(pick_locale("de-DE").is_ok());
/// assert!(pick_locale("xx-YY").is_err());
/// ```
pub type CommonResult<T> = miette::Result<T>;
