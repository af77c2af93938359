// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The calculator itself, with no knowledge of terminals. Everything here is plain data
//! and pure functions, except the debug logging.

// Attach sources.
pub mod action;
pub mod auto_fit;
pub mod calculator_state;
pub mod display_format;
pub mod locale;
pub mod number_fmt;
pub mod operator;

// Re-export.
pub use action::*;
pub use auto_fit::*;
pub use calculator_state::*;
pub use display_format::*;
pub use locale::*;
pub use number_fmt::*;
pub use operator::*;
