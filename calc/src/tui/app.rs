// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Debug;

use super::{GlobalData, InputEvent, RenderPipeline};
use crate::CommonResult;

/// An app owns no state of its own that matters for rendering; the state lives in
/// [`GlobalData`], and the main event loop decides when to render.
pub trait App {
    type S: Debug + Default + Clone + Sync + Send;
    type AS: Debug + Clone + Sync + Send;

    /// Use the `input_event` to send signals, or change state directly.
    fn app_handle_input_event(
        &mut self,
        input_event: InputEvent,
        global_data: &mut GlobalData<Self::S, Self::AS>,
    ) -> CommonResult<EventPropagation>;

    /// Handle a signal sent via [`crate::send_signal!`].
    fn app_handle_signal(
        &mut self,
        signal: &Self::AS,
        global_data: &mut GlobalData<Self::S, Self::AS>,
    ) -> CommonResult<EventPropagation>;

    /// Use the state to produce the frame. Painting happens elsewhere.
    fn app_render(
        &mut self,
        global_data: &mut GlobalData<Self::S, Self::AS>,
    ) -> CommonResult<RenderPipeline>;
}

pub type SafeApp<S, AS> = dyn App<S = S, AS = AS> + Send + Sync;
pub type BoxedSafeApp<S, AS> = Box<SafeApp<S, AS>>;

/// This works w/ the input event routing system to provide the caller w/ information
/// about whether an event has been consumed or not. If it has been consumed, is a render
/// necessary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventPropagation {
    ConsumedRender,
    Consumed,
    Propagate,
}
