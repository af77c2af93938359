// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug, marker::PhantomData};

use tokio::sync::mpsc;

use super::{BoxedSafeApp, EventPropagation, GlobalData, InputDevice, InputEvent,
            OutputDevice, RawModeGuard, RenderOp, RenderPipeline, Size,
            TooSmallToDisplayResult, TuiStyle, ZOrder, pos, size, truncate_to_fit_width};
use crate::{CalcAppError, CommonResult, DEBUG_CALC_MOD, ok, render_pipeline, throws};

pub const CHANNEL_WIDTH: usize = 1_000;

/// Below this size the app is not rendered, and a message is shown instead.
pub const MIN_SIZE: Size = size(20, 9);

/// Signals that can be sent to the main event loop over its channel, using
/// [`crate::send_signal!`].
#[derive(Debug, Clone, PartialEq)]
pub enum TerminalWindowMainThreadSignal<AS>
where
    AS: Debug + Clone + Sync + Send,
{
    /// Exit the main event loop.
    Exit,
    /// Handed to [`super::App::app_handle_signal`].
    ApplyAppSignal(AS),
}

#[derive(Debug)]
pub struct TerminalWindow;

impl TerminalWindow {
    /// This is the main event loop for the entire application. It is responsible for
    /// handling all input events, and dispatching them to the [`super::App`] for
    /// processing. It is also responsible for rendering the app after each input event.
    /// It is also responsible for handling all signals sent from the app to the main
    /// event loop (eg: exit, apply app signal).
    ///
    /// The terminal is restored when this returns, whether it returns an error or not.
    pub async fn main_event_loop<S, AS>(
        app: BoxedSafeApp<S, AS>,
        exit_keys: Vec<InputEvent>,
        state: S,
    ) -> CommonResult<GlobalData<S, AS>>
    where
        S: Debug + Default + Clone + Sync + Send,
        AS: Debug + Clone + Sync + Send,
    {
        let (col_count, row_count) = crossterm::terminal::size()
            .map_err(CalcAppError::terminal_io("query the terminal size"))?;
        let initial_size = size(col_count, row_count);

        let (global_data, _input_device, _output_device) = main_event_loop_impl(
            app,
            exit_keys,
            state,
            initial_size,
            InputDevice::new_event_stream(),
            OutputDevice::new_stdout(),
        )
        .await?;

        ok!(global_data)
    }
}

/// Does the work of [`TerminalWindow::main_event_loop`], with the devices passed in so
/// tests can drive it with [`InputDevice::new_mock`] and [`OutputDevice::new_mock`].
///
/// The loop ends when an exit signal arrives, or when the input device runs out of
/// events.
pub async fn main_event_loop_impl<S, AS>(
    mut app: BoxedSafeApp<S, AS>,
    exit_keys: Vec<InputEvent>,
    state: S,
    initial_size: Size,
    mut input_device: InputDevice,
    output_device: OutputDevice,
) -> CommonResult<(
    /* global_data */ GlobalData<S, AS>,
    /* event stream */ InputDevice,
    /* stdout */ OutputDevice,
)>
where
    S: Debug + Default + Clone + Sync + Send,
    AS: Debug + Clone + Sync + Send,
{
    // mpsc channel to send signals from the app to the main event loop (eg: for exit,
    // apply app signal).
    let (main_thread_channel_sender, mut main_thread_channel_receiver) =
        mpsc::channel::<TerminalWindowMainThreadSignal<AS>>(CHANNEL_WIDTH);

    let mut global_data = GlobalData::new(
        main_thread_channel_sender,
        state,
        initial_size,
        output_device.clone(),
    );
    let global_data_ref = &mut global_data;
    let app = &mut app;

    // Restored on drop, including when `?` returns early below.
    let raw_mode_guard = RawModeGuard::try_start(&output_device)?;

    AppManager::render_app(app, global_data_ref)?;

    global_data_ref.dump_to_log("main_event_loop -> Startup 🚀");

    loop {
        tokio::select! {
            // Signals queued while handling the last input event are drained before the
            // next input event is read.
            biased;

            // This branch is cancel safe since recv is cancel safe.
            Some(signal) = main_thread_channel_receiver.recv() => {
                match signal {
                    TerminalWindowMainThreadSignal::Exit => break,
                    TerminalWindowMainThreadSignal::ApplyAppSignal(app_signal) => {
                        let result = app.app_handle_signal(&app_signal, global_data_ref);
                        handle_result_generated_by_app(
                            result,
                            None,
                            &exit_keys,
                            app,
                            global_data_ref,
                        );
                    }
                }
            }

            maybe_input_event = input_device.next_input_event() => {
                let Some(input_event) = maybe_input_event else {
                    DEBUG_CALC_MOD.then(|| {
                        tracing::debug!(message = "main_event_loop -> input stream ended");
                    });
                    break;
                };

                DEBUG_CALC_MOD.then(|| {
                    // % is Display, ? is Debug.
                    tracing::debug!(message = "main_event_loop -> Tick: ⏰", input_event = %input_event);
                });

                handle_resize_if_applicable(&input_event, app, global_data_ref);

                let result = app.app_handle_input_event(input_event.clone(), global_data_ref);
                handle_result_generated_by_app(
                    result,
                    Some(input_event),
                    &exit_keys,
                    app,
                    global_data_ref,
                );
            }
        }
    }

    drop(raw_mode_guard);

    DEBUG_CALC_MOD.then(|| tracing::debug!(message = "main_event_loop -> Shutdown 🛑"));

    ok!((global_data, input_device, output_device))
}

/// Before any app gets to process the `input_event`, perform special handling in case
/// it is a resize event.
fn handle_resize_if_applicable<S, AS>(
    input_event: &InputEvent,
    app: &mut BoxedSafeApp<S, AS>,
    global_data: &mut GlobalData<S, AS>,
) where
    S: Debug + Default + Clone + Sync + Send,
    AS: Debug + Clone + Sync + Send,
{
    if let InputEvent::Resize(new_size) = input_event {
        global_data.set_size(*new_size);
        if let Err(error) = AppManager::render_app(app, global_data) {
            // % is Display, ? is Debug.
            tracing::error!(message = "main_event_loop -> Resize", error = %error);
        }
    }
}

fn handle_result_generated_by_app<S, AS>(
    result: CommonResult<EventPropagation>,
    maybe_input_event: Option<InputEvent>,
    exit_keys: &[InputEvent],
    app: &mut BoxedSafeApp<S, AS>,
    global_data: &mut GlobalData<S, AS>,
) where
    S: Debug + Default + Clone + Sync + Send,
    AS: Debug + Clone + Sync + Send,
{
    match result {
        Ok(event_propagation) => match event_propagation {
            EventPropagation::Propagate => {
                if let Some(input_event) = maybe_input_event
                    && input_event.matches(exit_keys)
                {
                    request_exit_by_sending_signal(global_data);
                }
            }

            EventPropagation::ConsumedRender => {
                if let Err(error) = AppManager::render_app(app, global_data) {
                    // % is Display, ? is Debug.
                    tracing::error!(message = "main_event_loop -> render", error = %error);
                }
            }

            EventPropagation::Consumed => {}
        },
        Err(error) => {
            // % is Display, ? is Debug.
            tracing::error!(
                message = "main_event_loop -> handle_result_generated_by_app",
                error = %error
            );
        }
    }
}

fn request_exit_by_sending_signal<S, AS>(global_data: &GlobalData<S, AS>)
where
    S: Debug + Default + Clone + Sync + Send,
    AS: Debug + Clone + Sync + Send,
{
    crate::send_signal!(
        global_data.main_thread_channel_sender,
        TerminalWindowMainThreadSignal::Exit
    );
}

struct AppManager<S, AS>
where
    S: Debug + Default + Clone + Sync + Send,
    AS: Debug + Clone + Sync + Send,
{
    _phantom: PhantomData<(S, AS)>,
}

impl<S, AS> AppManager<S, AS>
where
    S: Debug + Default + Clone + Sync + Send,
    AS: Debug + Clone + Sync + Send,
{
    /// Errors from the app's render are logged and the frame is skipped. Errors from
    /// painting are returned, since the terminal itself is broken.
    pub fn render_app(
        app: &mut BoxedSafeApp<S, AS>,
        global_data: &mut GlobalData<S, AS>,
    ) -> CommonResult<()> {
        throws!({
            let window_size = global_data.window_size;

            let render_result = match window_size.fits_min_size(MIN_SIZE) {
                TooSmallToDisplayResult::IsLargeEnough => app.app_render(global_data),
                TooSmallToDisplayResult::IsTooSmall => {
                    Ok(render_window_too_small_error(window_size))
                }
            };

            match render_result {
                Err(error) => {
                    // % is Display, ? is Debug.
                    tracing::error!(message = "AppManager::render_app", error = %error);
                }
                Ok(render_pipeline) => {
                    render_pipeline.paint(window_size, &global_data.output_device)?;

                    DEBUG_CALC_MOD.then(|| {
                        // % is Display, ? is Debug.
                        tracing::debug!(
                            message = "AppManager::render_app -> paint ok ✅",
                            window_size = %window_size,
                            state = ?global_data.state
                        );
                    });
                }
            }
        });
    }
}

fn render_window_too_small_error(window_size: Size) -> RenderPipeline {
    let display_msg = format!(
        "Window size is too small. Minimum size is {} cols x {} rows",
        MIN_SIZE.col_count, MIN_SIZE.row_count
    );
    let (trunc_display_msg, trunc_display_msg_width) =
        truncate_to_fit_width(&display_msg, usize::from(window_size.col_count));
    let trunc_display_msg_len =
        u16::try_from(trunc_display_msg_width).unwrap_or(window_size.col_count);

    let row_pos = window_size.row_count / 2;
    let col_pos = window_size.col_count.saturating_sub(trunc_display_msg_len) / 2;

    let style_bold = TuiStyle {
        bold: true,
        ..Default::default()
    };

    let mut pipeline = render_pipeline!(@new_empty);
    render_pipeline! {
        @push_into pipeline
        at ZOrder::Normal
        =>
            RenderOp::ResetColor,
            RenderOp::MoveCursorPositionAbs(pos(col_pos, row_pos)),
            RenderOp::PaintTextWithAttributes(trunc_display_msg.to_string(), Some(style_bold))
    }

    pipeline
}
