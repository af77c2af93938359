// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::{Deref, DerefMut};

use smallvec::SmallVec;

use super::Pos;

/// Colors are passed straight through to crossterm.
pub type TuiColor = crossterm::style::Color;

/// Attributes and colors for one run of text. `None` colors keep the terminal default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TuiStyle {
    pub bold: bool,
    pub dim: bool,
    pub reverse: bool,
    pub color_fg: Option<TuiColor>,
    pub color_bg: Option<TuiColor>,
}

/// Shorthand to build a [`RenderOps`].
///
/// ```
/// use tui_calc::{RenderOp, pos, render_ops};
///
/// let ops = render_ops!(
///     @new
///     RenderOp::MoveCursorPositionAbs(pos(0, 0)),
///     RenderOp::PaintTextWithAttributes("42".into(), None),
/// );
/// assert_eq!(ops.len(), 2);
/// ```
#[macro_export]
macro_rules! render_ops {
    (@new $($element:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut it = $crate::RenderOps::default();
        $(it.list.push($element);)*
        it
    }};
}

/// Something to paint. The painter tracks the cursor position between ops, so text ops
/// are always relative to the last [`RenderOp::MoveCursorPositionAbs`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderOp {
    ClearScreen,
    ResetColor,
    /// Clamped to the window by the painter.
    MoveCursorPositionAbs(Pos),
    /// Clipped at the right edge of the window by the painter.
    PaintTextWithAttributes(String, Option<TuiStyle>),
}

pub const RENDER_OPS_INLINE_SIZE: usize = 8;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderOps {
    pub list: SmallVec<[RenderOp; RENDER_OPS_INLINE_SIZE]>,
}

impl RenderOps {
    /// Moves the cursor to `at` and paints `text` there.
    pub fn push_text_at(&mut self, at: Pos, text: impl Into<String>, maybe_style: Option<TuiStyle>) {
        self.list.push(RenderOp::MoveCursorPositionAbs(at));
        self.list.push(RenderOp::PaintTextWithAttributes(text.into(), maybe_style));
    }
}

impl Deref for RenderOps {
    type Target = SmallVec<[RenderOp; RENDER_OPS_INLINE_SIZE]>;

    fn deref(&self) -> &Self::Target { &self.list }
}

impl DerefMut for RenderOps {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.list }
}
