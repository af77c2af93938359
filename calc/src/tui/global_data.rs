// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Formatter};

use tokio::sync::mpsc::Sender;

use super::{OutputDevice, Size, TerminalWindowMainThreadSignal};
use crate::DEBUG_CALC_MOD;

/// Everything an [`super::App`] can reach while handling an event or rendering.
pub struct GlobalData<S, AS>
where
    S: Debug + Default + Clone + Sync + Send,
    AS: Debug + Clone + Sync + Send,
{
    pub state: S,
    pub window_size: Size,
    pub main_thread_channel_sender: Sender<TerminalWindowMainThreadSignal<AS>>,
    pub output_device: OutputDevice,
}

mod constructor {
    use super::*;

    impl<S, AS> GlobalData<S, AS>
    where
        S: Debug + Default + Clone + Sync + Send,
        AS: Debug + Clone + Sync + Send,
    {
        pub fn new(
            main_thread_channel_sender: Sender<TerminalWindowMainThreadSignal<AS>>,
            state: S,
            initial_size: Size,
            output_device: OutputDevice,
        ) -> Self {
            let it = Self {
                state,
                window_size: initial_size,
                main_thread_channel_sender,
                output_device,
            };
            it.dump_to_log("GlobalData -> new");
            it
        }
    }
}

mod global_data_impl {
    use super::*;

    impl<S, AS> GlobalData<S, AS>
    where
        S: Debug + Default + Clone + Sync + Send,
        AS: Debug + Clone + Sync + Send,
    {
        pub fn set_size(&mut self, new_size: Size) {
            self.window_size = new_size;
            self.dump_to_log("main_event_loop -> Resize");
        }

        pub fn dump_to_log(&self, msg: &str) {
            DEBUG_CALC_MOD.then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(message = %msg, global_data = ?self);
            });
        }
    }

    impl<S, AS> Debug for GlobalData<S, AS>
    where
        S: Debug + Default + Clone + Sync + Send,
        AS: Debug + Clone + Sync + Send,
    {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("GlobalData")
                .field("window_size", &self.window_size)
                .field("state", &self.state)
                .field("output_device", &self.output_device)
                .finish_non_exhaustive()
        }
    }
}
