// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::IsTerminal as _;

use clap::Parser;
use mimalloc::MiMalloc;
use tui_calc::{CLIArg, CalcAppError, CommonResult, Locale, TracingConfig, app::ui_str,
               format_display_value, run_app, setup_default_miette_global_report_handler,
               try_initialize_logging_global};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> CommonResult<()> {
    setup_default_miette_global_report_handler(ui_str::error_report_footer());

    let cli_arg = CLIArg::parse();
    let global_options = &cli_arg.global_options;

    let tracing_config = if global_options.enable_logging {
        TracingConfig::new_file(
            Some(global_options.log_file.clone()),
            global_options.log_level.into(),
        )
    } else {
        TracingConfig::disabled()
    };
    try_initialize_logging_global(tracing_config)?;

    // % is Display, ? is Debug.
    tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);

    if !(std::io::stdin().is_terminal() && std::io::stdout().is_terminal()) {
        return Err(CalcAppError::NotInteractive.into());
    }

    let locale = Locale::resolve_from_process_env(global_options.locale.as_deref())?;

    let final_state = run_app(locale).await?;

    println!(
        "{}",
        ui_str::goodbye_msg(&format_display_value(
            &final_state.calculator.display_value,
            &final_state.locale
        ))
    );

    tracing::debug!(message = "Stop logging...");

    Ok(())
}
