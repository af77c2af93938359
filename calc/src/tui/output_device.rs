// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::Write,
          sync::{Arc, Mutex, MutexGuard, PoisonError}};

pub type SendRawTerminal = dyn Write + Send;
pub type SafeRawTerminal = Arc<Mutex<SendRawTerminal>>;
pub type LockedOutputDevice<'a> = &'a mut dyn Write;

/// Macro to simplify locking and getting a mutable reference to the output device.
/// Don't call this again in the same scope, it will deadlock! A safe approach is to use
/// this macro in a separate block scope.
#[macro_export]
macro_rules! lock_output_device_as_mut {
    ($device:expr) => {
        &mut *$device.lock()
    };
}

/// Where frames are painted. It is safe to clone, all clones share the same writer.
#[derive(Clone)]
pub struct OutputDevice {
    pub resource: SafeRawTerminal,
    /// A mock device is never put into raw mode.
    pub is_mock: bool,
}

impl OutputDevice {
    #[must_use]
    pub fn new_stdout() -> Self {
        Self {
            resource: Arc::new(Mutex::new(std::io::stdout())),
            is_mock: false,
        }
    }

    /// Returns a device that writes into memory, and a handle to read back what was
    /// written.
    #[must_use]
    pub fn new_mock() -> (Self, StdoutMock) {
        let stdout_mock = StdoutMock::default();
        let it = Self {
            resource: Arc::new(Mutex::new(stdout_mock.clone())),
            is_mock: true,
        };
        (it, stdout_mock)
    }

    /// Locks the output device for writing. A poisoned lock is recovered, since the
    /// writer holds no invariants of its own.
    pub fn lock(&self) -> MutexGuard<'_, SendRawTerminal> {
        self.resource.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for OutputDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OutputDevice {{ is_mock: {} }}", self.is_mock)
    }
}

/// In memory stand in for stdout.
#[derive(Clone, Debug, Default)]
pub struct StdoutMock {
    pub buffer: Arc<Mutex<Vec<u8>>>,
}

impl StdoutMock {
    #[must_use]
    pub fn get_copy_of_buffer_as_string(&self) -> String {
        let buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buffer).to_string()
    }

    /// Everything written so far, with ANSI escape sequences removed.
    #[must_use]
    pub fn get_copy_of_buffer_as_string_strip_ansi(&self) -> String {
        strip_ansi_escapes::strip_str(self.get_copy_of_buffer_as_string())
    }
}

impl Write for StdoutMock {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
}
