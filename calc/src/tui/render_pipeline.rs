// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::HashMap;

use super::{RenderOp, RenderOps};

/// Paint order of groups of [`RenderOp`]s. Ops in a higher z order are painted later, so
/// they end up on top.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum ZOrder {
    #[default]
    Normal,
    High,
}

impl ZOrder {
    #[must_use]
    pub fn get_render_order() -> [ZOrder; 2] { [ZOrder::Normal, ZOrder::High] }
}

/// This works w/ [`RenderOp`] items. It allows them to be added in sequence, and then
/// painted at the end, see [`RenderPipeline::paint`].
///
/// ```
/// use tui_calc::{RenderOp, RenderPipeline, ZOrder, render_pipeline};
///
/// let mut pipeline = render_pipeline!(@new_empty);
/// render_pipeline!(
///     @push_into pipeline at ZOrder::Normal =>
///     RenderOp::ClearScreen,
///     RenderOp::ResetColor
/// );
/// assert_eq!(pipeline.len(), 2);
/// ```
#[macro_export]
macro_rules! render_pipeline {
    (@new_empty) => {
        $crate::RenderPipeline::default()
    };
    (@push_into $arg_pipeline:ident at $arg_z_order:expr => $($element:expr),+ $(,)?) => {
        $($arg_pipeline.push($arg_z_order, $element);)+
    };
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderPipeline {
    pub pipeline_map: HashMap<ZOrder, RenderOps>,
}

impl RenderPipeline {
    pub fn push(&mut self, z_order: ZOrder, render_op: RenderOp) {
        self.pipeline_map.entry(z_order).or_default().list.push(render_op);
    }

    pub fn push_all(&mut self, z_order: ZOrder, render_ops: RenderOps) {
        self.pipeline_map
            .entry(z_order)
            .or_default()
            .list
            .extend(render_ops.list);
    }

    /// Total number of ops across all z orders.
    #[must_use]
    pub fn len(&self) -> usize { self.pipeline_map.values().map(|it| it.len()).sum() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// All ops, in paint order.
    pub fn iter_in_render_order(&self) -> impl Iterator<Item = &RenderOp> {
        ZOrder::get_render_order()
            .into_iter()
            .filter_map(|z_order| self.pipeline_map.get(&z_order))
            .flat_map(|render_ops| render_ops.iter())
    }

    /// Concatenates the text of every paint op, in paint order. Handy in tests.
    #[must_use]
    pub fn get_all_text(&self) -> String {
        self.iter_in_render_order()
            .filter_map(|it| match it {
                RenderOp::PaintTextWithAttributes(text, _) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}
