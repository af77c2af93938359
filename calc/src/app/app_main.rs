// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use unicode_width::UnicodeWidthStr;

use super::{AppSignal, KeyKind, KeypadKey, KeypadLayout, State, action_for_keypress, ui_str};
use crate::{App, AutoScalingText, BoxedSafeApp, Button, CalcAction, CommonResult, DEBUG_CALC_MOD,
            EventPropagation, GlobalData, InputEvent, MIN_SIZE, MeasureWidth, MouseInput,
            MouseInputKind, Rect, RenderOps, RenderPipeline, TerminalWindowMainThreadSignal,
            TooSmallToDisplayResult, TuiColor, TuiStyle, ZOrder, format_display_value, pos,
            reduce, render_ops, render_pipeline, shrink_text_to_scale, throws_with_return,
            truncate_to_fit_width};

/// Columns kept blank on each side of the display text.
pub const DISPLAY_PADDING_COLS: u16 = 1;

/// Row of the display text, relative to the top of the display area.
pub const DISPLAY_TEXT_ROW_OFFSET: u16 = 1;

#[derive(Debug, Default)]
pub struct AppMain {
    pub data: AppData,
}

/// View state that isn't part of the calculator itself.
#[derive(Debug, Default)]
pub struct AppData {
    pub auto_scaling_text: AutoScalingText,
    /// Set on left mouse down over a key, and cleared on the next left mouse up.
    pub maybe_pressed_key: Option<KeypadKey>,
}

mod constructor {
    use super::*;

    impl AppMain {
        #[must_use]
        pub fn new_boxed() -> BoxedSafeApp<State, AppSignal> {
            let it = Self::default();
            Box::new(it)
        }
    }
}

/// Measures the formatted number in terminal columns.
#[derive(Debug)]
pub struct TerminalTextMeasure<'a> {
    pub text: &'a str,
    pub container_col_count: u16,
}

impl MeasureWidth for TerminalTextMeasure<'_> {
    #[allow(clippy::cast_precision_loss)]
    fn measure_content_width(&self) -> f64 { self.text.width() as f64 }

    fn measure_container_width(&self) -> f64 { f64::from(self.container_col_count) }
}

mod app_main_impl_app_trait {
    use super::*;

    impl App for AppMain {
        type S = State;
        type AS = AppSignal;

        fn app_handle_input_event(
            &mut self,
            input_event: InputEvent,
            global_data: &mut GlobalData<State, AppSignal>,
        ) -> CommonResult<EventPropagation> {
            throws_with_return!({
                match input_event {
                    InputEvent::Keyboard(keypress) => {
                        match action_for_keypress(keypress, &global_data.state.calculator) {
                            Some(action) => {
                                apply_action_by_sending_signal(global_data, action);
                                EventPropagation::Consumed
                            }
                            None => EventPropagation::Propagate,
                        }
                    }
                    InputEvent::Mouse(mouse_input) => {
                        self.handle_mouse_input(mouse_input, global_data)
                    }
                    InputEvent::Resize(_) => EventPropagation::Propagate,
                }
            });
        }

        fn app_handle_signal(
            &mut self,
            signal: &AppSignal,
            global_data: &mut GlobalData<State, AppSignal>,
        ) -> CommonResult<EventPropagation> {
            throws_with_return!({
                let GlobalData { state, .. } = global_data;

                match signal {
                    AppSignal::Apply(action) => {
                        state.calculator = reduce(&state.calculator, action);
                        EventPropagation::ConsumedRender
                    }
                }
            });
        }

        fn app_render(
            &mut self,
            global_data: &mut GlobalData<State, AppSignal>,
        ) -> CommonResult<RenderPipeline> {
            throws_with_return!({
                let layout = KeypadLayout::new(global_data.window_size);
                let state = &global_data.state;

                let mut pipeline = render_pipeline!(@new_empty);
                pipeline.push_all(ZOrder::Normal, self.render_display(&layout, state));
                pipeline.push_all(ZOrder::Normal, self.render_keypad(&layout, state));
                pipeline.push_all(ZOrder::High, render_status_bar(&layout, state));
                pipeline
            });
        }
    }
}

mod handle_mouse {
    use super::*;

    impl AppMain {
        /// A key is "clicked" when the left button goes down and comes back up over the
        /// same key. Releasing anywhere else just drops the highlight.
        pub fn handle_mouse_input(
            &mut self,
            mouse_input: MouseInput,
            global_data: &mut GlobalData<State, AppSignal>,
        ) -> EventPropagation {
            // Nothing is painted where the keys would be.
            if let TooSmallToDisplayResult::IsTooSmall =
                global_data.window_size.fits_min_size(MIN_SIZE)
            {
                self.data.maybe_pressed_key = None;
                return EventPropagation::Propagate;
            }

            let layout = KeypadLayout::new(global_data.window_size);
            let maybe_key_under_pointer = layout.key_at(mouse_input.pos);

            match mouse_input.kind {
                MouseInputKind::MouseDown(Button::Left) => {
                    self.data.maybe_pressed_key = maybe_key_under_pointer;
                    match maybe_key_under_pointer {
                        Some(_) => EventPropagation::ConsumedRender,
                        None => EventPropagation::Propagate,
                    }
                }
                MouseInputKind::MouseUp(Button::Left) => {
                    let Some(pressed_key) = self.data.maybe_pressed_key.take() else {
                        return EventPropagation::Propagate;
                    };

                    DEBUG_CALC_MOD.then(|| {
                        // % is Display, ? is Debug.
                        tracing::debug!(
                            message = "AppMain::handle_mouse_input -> MouseUp",
                            pressed_key = ?pressed_key,
                            key_under_pointer = ?maybe_key_under_pointer
                        );
                    });

                    if maybe_key_under_pointer == Some(pressed_key) {
                        let action = pressed_key.action(&global_data.state.calculator);
                        apply_action_by_sending_signal(global_data, action);
                        // The signal handler renders.
                        EventPropagation::Consumed
                    } else {
                        EventPropagation::ConsumedRender
                    }
                }
                _ => EventPropagation::Propagate,
            }
        }
    }
}

fn apply_action_by_sending_signal(
    global_data: &GlobalData<State, AppSignal>,
    action: CalcAction,
) {
    crate::send_signal!(
        global_data.main_thread_channel_sender,
        TerminalWindowMainThreadSignal::ApplyAppSignal(AppSignal::Apply(action))
    );
}

mod render {
    use super::*;

    impl AppMain {
        /// The formatted number, right aligned, shrunk to fit the display width.
        pub fn render_display(&mut self, layout: &KeypadLayout, state: &State) -> RenderOps {
            let display_rect = layout.display_rect;
            let formatted = format_display_value(&state.calculator.display_value, &state.locale);

            let container_col_count = display_rect
                .size
                .col_count
                .saturating_sub(DISPLAY_PADDING_COLS * 2);
            let scale = self.data.auto_scaling_text.on_render_commit(&TerminalTextMeasure {
                text: &formatted,
                container_col_count,
            });
            let display_text = shrink_text_to_scale(&formatted, scale);

            let display_text_width =
                u16::try_from(display_text.width()).unwrap_or(container_col_count);
            let col_index = display_rect.origin.col_index
                + DISPLAY_PADDING_COLS
                + container_col_count.saturating_sub(display_text_width);
            let row_index = display_rect.origin.row_index + DISPLAY_TEXT_ROW_OFFSET;

            let style = TuiStyle {
                bold: true,
                ..Default::default()
            };

            let mut render_ops = render_ops!(@new);
            render_ops.push_text_at(pos(col_index, row_index), display_text, Some(style));
            render_ops
        }

        pub fn render_keypad(&self, layout: &KeypadLayout, state: &State) -> RenderOps {
            let mut render_ops = render_ops!(@new);

            for (key, rect) in &layout.keys {
                let label = key.label(&state.calculator, &state.locale);
                let is_pressed = self.data.maybe_pressed_key == Some(*key);
                render_key(&mut render_ops, *rect, &label, key_style(key.kind(), is_pressed));
            }

            render_ops
        }
    }

    /// Fills the key with its background color, and centers the label in it. The last
    /// column (and last row, when there is more than one) is left blank as a gap.
    fn render_key(render_ops: &mut RenderOps, rect: Rect, label: &str, style: TuiStyle) {
        let fill_col_count = usize::from(rect.size.col_count.saturating_sub(1));
        let fill_row_count = if rect.size.row_count > 1 {
            rect.size.row_count - 1
        } else {
            rect.size.row_count
        };
        if fill_col_count == 0 || fill_row_count == 0 {
            return;
        }
        let label_row = (fill_row_count - 1) / 2;

        for row_offset in 0..fill_row_count {
            let line = if row_offset == label_row {
                center_text_in_width(label, fill_col_count)
            } else {
                " ".repeat(fill_col_count)
            };
            let at = pos(rect.origin.col_index, rect.origin.row_index + row_offset);
            render_ops.push_text_at(at, line, Some(style));
        }
    }

    pub fn key_style(key_kind: KeyKind, is_pressed: bool) -> TuiStyle {
        let (color_fg, color_bg) = match key_kind {
            KeyKind::Function => (TuiColor::Black, TuiColor::Grey),
            KeyKind::Operator => (TuiColor::White, TuiColor::Rgb { r: 255, g: 149, b: 0 }),
            KeyKind::Input => (TuiColor::White, TuiColor::DarkGrey),
        };
        TuiStyle {
            bold: matches!(key_kind, KeyKind::Operator),
            reverse: is_pressed,
            color_fg: Some(color_fg),
            color_bg: Some(color_bg),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn center_text_in_width(text: &str, col_count: usize) -> String {
        let (text, text_width) = truncate_to_fit_width(text, col_count);
        let padding = col_count - text_width;
        let padding_left = padding / 2;
        let padding_right = padding - padding_left;
        format!("{}{text}{}", " ".repeat(padding_left), " ".repeat(padding_right))
    }

    /// Key hints on the left, locale on the right (when there's room for both).
    pub fn render_status_bar(layout: &KeypadLayout, state: &State) -> RenderOps {
        let row_index = layout.status_bar_row_index;
        let col_count = usize::from(layout.window_size.col_count);

        let hints_style = TuiStyle {
            dim: true,
            ..Default::default()
        };
        let mut render_ops = render_ops!(@new);
        render_ops.push_text_at(pos(0, row_index), ui_str::STATUS_BAR_HINTS, Some(hints_style));

        let locale_text = ui_str::status_bar_locale(&state.locale);
        let locale_width = locale_text.width();
        if ui_str::STATUS_BAR_HINTS.width() + locale_width < col_count {
            let col_index = u16::try_from(col_count - locale_width).unwrap_or_default();
            render_ops.push_text_at(pos(col_index, row_index), locale_text, None);
        }

        render_ops
    }
}
pub use render::*;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;
    use tokio::sync::mpsc;

    use super::*;
    use crate::{CHANNEL_WIDTH, Digit, Locale, OutputDevice, RenderOp, Size,
                keypress, size};

    type Receiver = mpsc::Receiver<TerminalWindowMainThreadSignal<AppSignal>>;

    fn new_global_data(window_size: Size) -> (GlobalData<State, AppSignal>, Receiver) {
        let (sender, receiver) = mpsc::channel(CHANNEL_WIDTH);
        let (output_device, _stdout_mock) = OutputDevice::new_mock();
        let it = GlobalData::new(sender, State::default(), window_size, output_device);
        (it, receiver)
    }

    fn mouse(kind: MouseInputKind, col_index: u16, row_index: u16) -> InputEvent {
        InputEvent::Mouse(MouseInput {
            pos: pos(col_index, row_index),
            kind,
            maybe_modifier_keys: None,
        })
    }

    fn digit(it: u8) -> CalcAction { CalcAction::Digit(Digit::try_new(it).unwrap()) }

    fn apply(action: CalcAction) -> TerminalWindowMainThreadSignal<AppSignal> {
        TerminalWindowMainThreadSignal::ApplyAppSignal(AppSignal::Apply(action))
    }

    #[test]
    fn test_keyboard_sends_signal_and_signal_changes_state() {
        let mut app = AppMain::default();
        let (mut global_data, mut receiver) = new_global_data(size(40, 24));

        let it = app
            .app_handle_input_event(InputEvent::Keyboard(keypress!(@char '7')), &mut global_data)
            .unwrap();
        assert_eq!(it, EventPropagation::Consumed);
        // Not applied until the signal comes back around.
        assert_eq!(global_data.state.calculator.display_value, "0");

        let signal = receiver.try_recv().unwrap();
        assert_eq!(signal, apply(digit(7)));

        let TerminalWindowMainThreadSignal::ApplyAppSignal(app_signal) = signal else {
            panic!("expected an app signal");
        };
        let it = app.app_handle_signal(&app_signal, &mut global_data).unwrap();
        assert_eq!(it, EventPropagation::ConsumedRender);
        assert_eq!(global_data.state.calculator.display_value, "7");
    }

    #[test]
    fn test_unbound_key_propagates() {
        let mut app = AppMain::default();
        let (mut global_data, mut receiver) = new_global_data(size(40, 24));
        let it = app
            .app_handle_input_event(InputEvent::Keyboard(keypress!(@char 'z')), &mut global_data)
            .unwrap();
        assert_eq!(it, EventPropagation::Propagate);
        assert!(receiver.try_recv().is_err());
    }

    // 40 x 24: the "5" key is at cols 10..20, rows 11..15.
    #[test]
    fn test_click_on_key_highlights_then_applies() {
        let mut app = AppMain::default();
        let (mut global_data, mut receiver) = new_global_data(size(40, 24));

        let down = mouse(MouseInputKind::MouseDown(Button::Left), 15, 12);
        let it = app.app_handle_input_event(down, &mut global_data).unwrap();
        assert_eq!(it, EventPropagation::ConsumedRender);
        assert_eq!(
            app.data.maybe_pressed_key,
            Some(KeypadKey::Digit(Digit::try_new(5).unwrap()))
        );

        let pipeline = app.app_render(&mut global_data).unwrap();
        let has_reversed_key = pipeline.iter_in_render_order().any(|it| {
            matches!(it, RenderOp::PaintTextWithAttributes(text, Some(style))
                if style.reverse && text.trim() == "5")
        });
        assert!(has_reversed_key);

        let up = mouse(MouseInputKind::MouseUp(Button::Left), 12, 13);
        let it = app.app_handle_input_event(up, &mut global_data).unwrap();
        assert_eq!(it, EventPropagation::Consumed);
        assert_eq!(app.data.maybe_pressed_key, None);
        assert_eq!(receiver.try_recv().unwrap(), apply(digit(5)));
    }

    #[test]
    fn test_release_over_other_key_cancels() {
        let mut app = AppMain::default();
        let (mut global_data, mut receiver) = new_global_data(size(40, 24));

        let down = mouse(MouseInputKind::MouseDown(Button::Left), 15, 12);
        app.app_handle_input_event(down, &mut global_data).unwrap();

        // The "6" key.
        let up = mouse(MouseInputKind::MouseUp(Button::Left), 25, 12);
        let it = app.app_handle_input_event(up, &mut global_data).unwrap();
        assert_eq!(it, EventPropagation::ConsumedRender);
        assert_eq!(app.data.maybe_pressed_key, None);
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn test_click_on_clear_key_is_smart() {
        let mut app = AppMain::default();
        let (mut global_data, mut receiver) = new_global_data(size(40, 24));
        global_data.state.calculator = reduce(&global_data.state.calculator, &digit(3));

        for kind in [
            MouseInputKind::MouseDown(Button::Left),
            MouseInputKind::MouseUp(Button::Left),
        ] {
            app.app_handle_input_event(mouse(kind, 2, 4), &mut global_data).unwrap();
        }
        assert_eq!(receiver.try_recv().unwrap(), apply(CalcAction::Clear));
    }

    #[test]
    fn test_mouse_ignored_when_window_too_small() {
        let mut app = AppMain::default();
        let (mut global_data, _receiver) = new_global_data(size(10, 5));
        let down = mouse(MouseInputKind::MouseDown(Button::Left), 1, 3);
        let it = app.app_handle_input_event(down, &mut global_data).unwrap();
        assert_eq!(it, EventPropagation::Propagate);
        assert_eq!(app.data.maybe_pressed_key, None);
    }

    #[test]
    fn test_render_display_is_right_aligned_and_grouped() {
        let mut app = AppMain::default();
        let layout = KeypadLayout::new(size(20, 9));
        let mut state = State::new(Locale::try_from_tag("de-DE").unwrap());
        state.calculator.display_value = "1234.5".into();

        let ops = app.render_display(&layout, &state);
        assert_eq!(
            ops.list.to_vec(),
            vec![
                RenderOp::MoveCursorPositionAbs(pos(12, 1)),
                RenderOp::PaintTextWithAttributes(
                    "1.234,5".into(),
                    Some(TuiStyle {
                        bold: true,
                        ..Default::default()
                    })
                ),
            ]
        );
    }

    #[test]
    fn test_render_display_shrinks_long_numbers() {
        let mut app = AppMain::default();
        let layout = KeypadLayout::new(size(20, 9));
        let mut state = State::default();
        // Much wider than the 18 columns available once grouped.
        state.calculator.display_value = "1234567890123456789012".into();

        let ops = app.render_display(&layout, &state);
        let text = render_pipeline_text(ops);
        assert_eq!(text.width(), 18);
        assert!(text.starts_with('…'));
        assert!(app.data.auto_scaling_text.scale().is_shrunk());

        // Back to a short number, back to full size.
        state.calculator.display_value = "1".into();
        let text = render_pipeline_text(app.render_display(&layout, &state));
        assert_eq!(text, "1");
        assert!(!app.data.auto_scaling_text.scale().is_shrunk());
    }

    fn render_pipeline_text(ops: RenderOps) -> String {
        let mut pipeline = render_pipeline!(@new_empty);
        pipeline.push_all(ZOrder::Normal, ops);
        pipeline.get_all_text()
    }

    #[test_case("5", 5, "  5  ")]
    #[test_case("AC", 5, " AC  ")]
    #[test_case("toolong", 3, "too")]
    #[test_case("÷", 4, " ÷  ")]
    fn test_center_text_in_width(text: &str, col_count: usize, expected: &str) {
        assert_eq!(center_text_in_width(text, col_count), expected);
    }

    #[test]
    fn test_status_bar_shows_locale_when_there_is_room() {
        let state = State::new(Locale::try_from_tag("fr-FR").unwrap());

        let wide = render_pipeline_text(render_status_bar(&KeypadLayout::new(size(80, 24)), &state));
        assert!(wide.ends_with("fr-FR "));

        let narrow = render_pipeline_text(render_status_bar(&KeypadLayout::new(size(20, 9)), &state));
        assert_eq!(narrow, ui_str::STATUS_BAR_HINTS);
    }
}
