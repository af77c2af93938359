// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap the given block or stmt so that it returns a `Result<()>`. It is just syntactic
/// sugar that helps having to write `Ok(())` repeatedly at the end of each block.
///
/// ```
/// use tui_calc::{CommonResult, Locale, throws};
///
/// fn check() -> CommonResult<()> {
///     throws!({
///         let _it = Locale::try_from_tag("fr-FR")?;
///     });
/// }
/// assert!(check().is_ok());
/// ```
#[macro_export]
macro_rules! throws {
    ($it: block) => {{
        $it
        return Ok(())
    }};
    ($it: stmt) => {{
        $it
        return Ok(())
    }};
}

/// Wrap the given block or stmt so that it returns a `Result<$it>`. It is just
/// syntactic sugar that helps having to write `Ok($it)` repeatedly.
#[macro_export]
macro_rules! throws_with_return {
    ($it: block) => {{
        return Ok($it);
    }};
    ($it: stmt) => {{
        return Ok($it);
    }};
}

/// A wrapper for `pretty_assertions::assert_eq!` macro.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Send a signal to the main event loop. The two things to pass in this macro are
/// 1. Sender
/// 2. Signal (sent to the MPSC channel)
///
/// The main event loop drains its channel right after each input event is handled, so
/// the signal is queued with `try_send` rather than from a spawned task. This keeps
/// signals in the same order as the input events that caused them.
#[macro_export]
macro_rules! send_signal {
    (
        $main_thread_channel_sender : expr,
        $signal : expr
    ) => {{
        if let Err(error) = $main_thread_channel_sender.try_send($signal) {
            // % is Display, ? is Debug.
            tracing::error!(message = "send_signal! could not queue signal", error = %error);
        }
    }};
}

/// Simple macro to create a [`Result`] with an [`Ok`] variant. It is just syntactic sugar
/// that helps having to write `Ok(())`.
/// - If no arg is passed in then it will return `Ok(())`.
/// - If an arg is passed in then it will return `Ok($arg)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}
