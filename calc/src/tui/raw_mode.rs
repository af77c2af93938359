// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Write as _;

use crossterm::{QueueableCommand,
                cursor::{Hide, Show},
                event::{DisableMouseCapture, EnableMouseCapture},
                terminal::{self, EnterAlternateScreen, LeaveAlternateScreen}};

use super::{LockedOutputDevice, OutputDevice};
use crate::{CalcAppError, CommonResult, DEBUG_CALC_MOD, lock_output_device_as_mut};

/// Puts the terminal in raw mode, switches to the alternate screen, captures the mouse,
/// and hides the cursor. Everything is undone when the guard is dropped, including when
/// the event loop exits early with an error.
///
/// Nothing happens for a mock [`OutputDevice`].
#[derive(Debug)]
pub struct RawModeGuard {
    output_device: OutputDevice,
    is_active: bool,
}

impl RawModeGuard {
    pub fn try_start(output_device: &OutputDevice) -> CommonResult<Self> {
        let mut it = Self {
            output_device: output_device.clone(),
            is_active: false,
        };

        if output_device.is_mock {
            return Ok(it);
        }

        terminal::enable_raw_mode().map_err(CalcAppError::terminal_io("enable raw mode"))?;
        // From here on, drop restores the terminal even if the rest fails.
        it.is_active = true;

        enter_alternate_screen(lock_output_device_as_mut!(output_device))
            .map_err(CalcAppError::terminal_io("enter the alternate screen"))?;

        DEBUG_CALC_MOD.then(|| tracing::debug!(message = "RawModeGuard -> start"));

        Ok(it)
    }

    #[must_use]
    pub fn is_active(&self) -> bool { self.is_active }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if !self.is_active {
            return;
        }

        let result = leave_alternate_screen(lock_output_device_as_mut!(self.output_device));
        if let Err(error) = result {
            tracing::error!(message = "RawModeGuard -> restore screen", error = %error);
        }

        if let Err(error) = terminal::disable_raw_mode() {
            tracing::error!(message = "RawModeGuard -> disable raw mode", error = %error);
        }

        DEBUG_CALC_MOD.then(|| tracing::debug!(message = "RawModeGuard -> end"));
    }
}

fn enter_alternate_screen(locked_output_device: LockedOutputDevice<'_>) -> std::io::Result<()> {
    locked_output_device
        .queue(EnterAlternateScreen)?
        .queue(EnableMouseCapture)?
        .queue(Hide)?
        .flush()
}

fn leave_alternate_screen(locked_output_device: LockedOutputDevice<'_>) -> std::io::Result<()> {
    locked_output_device
        .queue(Show)?
        .queue(DisableMouseCapture)?
        .queue(LeaveAlternateScreen)?
        .flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_device_never_enters_raw_mode() {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let guard = RawModeGuard::try_start(&output_device).unwrap();
        assert!(!guard.is_active());
        drop(guard);
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "");
    }
}
