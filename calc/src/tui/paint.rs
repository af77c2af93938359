// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Write;

use crossterm::{QueueableCommand,
                cursor::MoveTo,
                style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor,
                        SetForegroundColor},
                terminal::{Clear, ClearType}};
use unicode_width::UnicodeWidthChar;

use super::{LockedOutputDevice, OutputDevice, Pos, RenderOp, RenderPipeline, Size, TuiStyle,
            pos};
use crate::{CalcAppError, CommonResult, lock_output_device_as_mut, ok};

/// Cursor position as seen by the painter while it walks the ops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOpsLocalData {
    pub cursor_pos: Pos,
}

impl RenderPipeline {
    /// Clears the screen, paints every op in z order, and flushes.
    pub fn paint(&self, window_size: Size, output_device: &OutputDevice) -> CommonResult<()> {
        let locked_output_device: LockedOutputDevice<'_> =
            lock_output_device_as_mut!(output_device);
        let mut local_data = RenderOpsLocalData::default();

        paint_render_op(
            &RenderOp::ClearScreen,
            window_size,
            &mut local_data,
            locked_output_device,
        )
        .map_err(CalcAppError::terminal_io("clear the screen"))?;

        for render_op in self.iter_in_render_order() {
            paint_render_op(render_op, window_size, &mut local_data, locked_output_device)
                .map_err(CalcAppError::terminal_io("paint"))?;
        }

        locked_output_device
            .flush()
            .map_err(CalcAppError::terminal_io("flush output"))?;

        ok!()
    }
}

/// Queues the crossterm commands for one op. Nothing is flushed.
pub fn paint_render_op(
    render_op: &RenderOp,
    window_size: Size,
    local_data: &mut RenderOpsLocalData,
    locked_output_device: LockedOutputDevice<'_>,
) -> std::io::Result<()> {
    match render_op {
        RenderOp::ClearScreen => {
            locked_output_device.queue(Clear(ClearType::All))?;
        }
        RenderOp::ResetColor => {
            locked_output_device
                .queue(ResetColor)?
                .queue(SetAttribute(Attribute::Reset))?;
        }
        RenderOp::MoveCursorPositionAbs(abs_pos) => {
            let it = sanitize_abs_pos(*abs_pos, window_size);
            local_data.cursor_pos = it;
            locked_output_device.queue(MoveTo(it.col_index, it.row_index))?;
        }
        RenderOp::PaintTextWithAttributes(text, maybe_style) => {
            let available_cols =
                window_size.col_count.saturating_sub(local_data.cursor_pos.col_index);
            let (clipped_text, clipped_width) =
                truncate_to_fit_width(text, usize::from(available_cols));

            if let Some(style) = maybe_style {
                queue_style(locked_output_device, style)?;
            }
            locked_output_device.queue(Print(clipped_text))?;
            if maybe_style.is_some() {
                locked_output_device
                    .queue(ResetColor)?
                    .queue(SetAttribute(Attribute::Reset))?;
            }

            let advance = u16::try_from(clipped_width).unwrap_or(u16::MAX);
            local_data.cursor_pos.col_index =
                local_data.cursor_pos.col_index.saturating_add(advance);
        }
    }
    Ok(())
}

fn queue_style(locked_output_device: LockedOutputDevice<'_>, style: &TuiStyle) -> std::io::Result<()> {
    if style.bold {
        locked_output_device.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        locked_output_device.queue(SetAttribute(Attribute::Dim))?;
    }
    if style.reverse {
        locked_output_device.queue(SetAttribute(Attribute::Reverse))?;
    }
    if let Some(color) = style.color_fg {
        locked_output_device.queue(SetForegroundColor(color))?;
    }
    if let Some(color) = style.color_bg {
        locked_output_device.queue(SetBackgroundColor(color))?;
    }
    Ok(())
}

/// Keeps the position inside the window.
#[must_use]
pub fn sanitize_abs_pos(abs_pos: Pos, window_size: Size) -> Pos {
    pos(
        abs_pos.col_index.min(window_size.col_count.saturating_sub(1)),
        abs_pos.row_index.min(window_size.row_count.saturating_sub(1)),
    )
}

/// Returns the longest prefix of `text` that is at most `max_cols` wide, and its width.
/// A wide glyph that would straddle the edge is dropped.
#[must_use]
pub fn truncate_to_fit_width(text: &str, max_cols: usize) -> (&str, usize) {
    let mut width = 0;
    for (byte_index, it) in text.char_indices() {
        let char_width = it.width().unwrap_or(0);
        if width + char_width > max_cols {
            return (&text[..byte_index], width);
        }
        width += char_width;
    }
    (text, width)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::{ZOrder, render_pipeline, size};

    #[test_case("12345", 10, "12345", 5)]
    #[test_case("12345", 3, "123", 3)]
    #[test_case("1×2", 2, "1×", 2)]
    #[test_case("ab😀", 3, "ab", 2)]
    #[test_case("", 0, "", 0)]
    fn test_truncate_to_fit_width(text: &str, max_cols: usize, expected: &str, width: usize) {
        assert_eq!(truncate_to_fit_width(text, max_cols), (expected, width));
    }

    #[test]
    fn test_sanitize_abs_pos() {
        assert_eq!(sanitize_abs_pos(pos(100, 100), size(10, 5)), pos(9, 4));
        assert_eq!(sanitize_abs_pos(pos(3, 2), size(10, 5)), pos(3, 2));
    }

    #[test]
    fn test_paint_writes_clipped_text() {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let mut pipeline = render_pipeline!(@new_empty);
        render_pipeline!(
            @push_into pipeline at ZOrder::Normal =>
            RenderOp::MoveCursorPositionAbs(pos(6, 0)),
            RenderOp::PaintTextWithAttributes("1234567".into(), None)
        );

        pipeline.paint(size(10, 3), &output_device).unwrap();

        let output = stdout_mock.get_copy_of_buffer_as_string();
        assert!(output.contains("1234"));
        assert!(!output.contains("12345"));
    }
}
