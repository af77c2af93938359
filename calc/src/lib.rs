// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A keypad calculator for the terminal.
//!
//! The crate is split in layers:
//! - [`crate::core`]: the calculator state machine, number formatting, locales, and the
//!   auto-fit logic for the display. No terminal code lives here.
//! - [`tui`]: a small full-screen terminal framework (input events, render ops, the main
//!   event loop, raw mode).
//! - [`app`]: the calculator app that plugs [`crate::core`] into [`tui`], plus its CLI.
//! - [`log`] and [`common`]: ambient plumbing (tracing setup, errors, macros).
//!
//! ```
//! use tui_calc::{CalcAction, CalculatorState, Digit, OperatorSymbol, reduce_all};
//!
//! let five = CalcAction::Digit(Digit::try_new(5).unwrap());
//! let three = CalcAction::Digit(Digit::try_new(3).unwrap());
//! let plus = CalcAction::Operate(OperatorSymbol::Add);
//! let equals = CalcAction::Operate(OperatorSymbol::Equals);
//!
//! let state = reduce_all(&CalculatorState::default(), &[five, plus, three, equals]);
//! assert_eq!(state.display_value, "8");
//! ```

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(clippy::unwrap_in_result)]
#![warn(rust_2018_idioms)]
#![warn(clippy::doc_markdown)]
#![warn(clippy::redundant_closure)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::cast_sign_loss)]
#![warn(clippy::cast_lossless)]
#![warn(clippy::cast_possible_truncation)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(clippy::must_use_candidate)]
#![warn(clippy::items_after_statements)]
#![warn(clippy::needless_return)]
#![warn(clippy::redundant_else)]
#![warn(clippy::explicit_iter_loop)]
#![warn(clippy::ignored_unit_patterns)]
#![warn(clippy::match_wildcard_for_single_variants)]
#![warn(clippy::default_trait_access)]
#![warn(clippy::map_unwrap_or)]
#![warn(clippy::unused_self)]
#![warn(clippy::manual_let_else)]
#![warn(clippy::if_not_else)]
#![warn(clippy::return_self_not_must_use)]
#![warn(clippy::needless_pass_by_value)]

pub const DEBUG_CALC_MOD: bool = true;

// Attach sources.
pub mod app;
pub mod common;
pub mod core;
pub mod log;
pub mod tui;

// Re-export.
pub use app::*;
pub use common::*;
pub use self::core::*;
pub use log::*;
pub use tui::*;
