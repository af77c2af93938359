// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::{Path, PathBuf};

use tracing_appender::rolling::RollingFileAppender;

use crate::{CalcAppError, CommonResult};

/// Opens (creating if needed) a log file that never rolls over.
///
/// Note that if you wrap this up in a non blocking writer, log lines written just before
/// the process exits can be lost, so the blocking appender is returned as is.
///
/// # Errors
///
/// Returns [`CalcAppError::InvalidLogFilePath`] if the path has no file name.
pub fn try_create(path_str: &str) -> CommonResult<RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let Some(file_name) = path.file_name() else {
        return Err(CalcAppError::InvalidLogFilePath {
            path: path_str.to_string(),
        }
        .into());
    };

    // A bare file name has an empty parent, which means the current directory.
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    Ok(tracing_appender::rolling::never(parent, file_name))
}
