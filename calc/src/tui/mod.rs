// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A small full-screen terminal framework: an [`App`] receives [`InputEvent`]s and
//! signals, returns a [`RenderPipeline`], and [`TerminalWindow::main_event_loop`]
//! drives it all while the terminal is in raw mode.

// Attach sources.
pub mod app;
pub mod global_data;
pub mod input_device;
pub mod input_event;
pub mod keypress;
pub mod main_event_loop;
pub mod modifier_keys_mask;
pub mod mouse_input;
pub mod output_device;
pub mod paint;
pub mod raw_mode;
pub mod render_op;
pub mod render_pipeline;
pub mod units;

// Re-export.
pub use app::*;
pub use global_data::*;
pub use input_device::*;
pub use input_event::*;
pub use keypress::*;
pub use main_event_loop::*;
pub use modifier_keys_mask::*;
pub use mouse_input::*;
pub use output_device::*;
pub use paint::*;
pub use raw_mode::*;
pub use render_op::*;
pub use render_pipeline::*;
pub use units::*;
