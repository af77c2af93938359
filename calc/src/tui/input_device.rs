// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::pin::Pin;

use crossterm::event::{Event, EventStream};
use futures_util::{Stream, StreamExt};

use super::InputEvent;

pub type CrosstermEventResult = Result<Event, std::io::Error>;
/// Type alias for a pinned stream. `T` is usually [`CrosstermEventResult`].
pub type PinnedInputStream<T> = Pin<Box<dyn Stream<Item = T>>>;

/// Reads input from the terminal, or from a canned list of events in tests.
pub struct InputDevice {
    pub resource: PinnedInputStream<CrosstermEventResult>,
}

impl InputDevice {
    #[must_use]
    pub fn new_event_stream() -> InputDevice {
        InputDevice {
            resource: Box::pin(EventStream::new()),
        }
    }

    /// The stream ends after the last event, which ends the main event loop.
    #[must_use]
    pub fn new_mock(events: Vec<Event>) -> InputDevice {
        InputDevice {
            resource: Box::pin(futures_util::stream::iter(
                events.into_iter().map(Ok::<Event, std::io::Error>),
            )),
        }
    }

    /// Returns the next event that converts to an [`InputEvent`], skipping the rest.
    /// Returns [`None`] when the stream ends or fails.
    pub async fn next_input_event(&mut self) -> Option<InputEvent> {
        loop {
            match self.resource.next().await? {
                Ok(event) => {
                    if let Ok(input_event) = InputEvent::try_from(event) {
                        return Some(input_event);
                    }
                }
                Err(error) => {
                    // % is Display, ? is Debug.
                    tracing::error!(message = "InputDevice::next_input_event", error = %error);
                    return None;
                }
            }
        }
    }
}

impl std::fmt::Debug for InputDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InputDevice")
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{keypress, size};

    #[tokio::test]
    async fn test_mock_skips_unconvertible_events_then_ends() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('1'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        let mut it = InputDevice::new_mock(vec![
            Event::FocusGained,
            release,
            Event::Key(KeyEvent::new(KeyCode::Char('7'), KeyModifiers::NONE)),
            Event::Resize(40, 20),
        ]);

        assert_eq!(
            it.next_input_event().await,
            Some(InputEvent::Keyboard(keypress!(@char '7')))
        );
        assert_eq!(it.next_input_event().await, Some(InputEvent::Resize(size(40, 20))));
        assert_eq!(it.next_input_event().await, None);
    }
}
