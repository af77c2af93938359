// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{AppMain, State, get_exit_keys};
use crate::{CommonResult, Locale, TerminalWindow, ok};

/// Runs the calculator full screen until an exit key is pressed, and returns the final
/// state.
pub async fn run_app(locale: Locale) -> CommonResult<State> {
    // Create a new state w/ the locale.
    let state = State::new(locale);

    // Create a new app.
    let app = AppMain::new_boxed();

    // Exit if these keys are pressed.
    let exit_keys = get_exit_keys();

    // Create a window.
    let global_data = TerminalWindow::main_event_loop(app, exit_keys, state).await?;

    ok!(global_data.state)
}
