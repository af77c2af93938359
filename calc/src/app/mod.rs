// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The calculator app: plugs the calculator state into the terminal framework, and
//! defines the command line.

// Attach sources.
pub mod app_main;
pub mod clap_config;
pub mod key_binding;
pub mod keypad;
pub mod launcher;
pub mod state;
pub mod ui_str;

// Re-export.
pub use app_main::*;
pub use clap_config::*;
pub use key_binding::*;
pub use keypad::*;
pub use launcher::*;
pub use state::*;
