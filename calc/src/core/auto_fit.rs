// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Shrinks the display text so that it never overflows its container.
//!
//! Measuring is a capability of the rendering surface, so it is abstracted behind
//! [`MeasureWidth`]. The view supplies an implementation and calls
//! [`AutoScalingText::on_render_commit`] once per painted frame. Nothing is cached
//! between frames.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::DEBUG_CALC_MOD;

pub const ELLIPSIS: char = '…';

/// Supplied by the view layer. Widths are in whatever unit the surface measures in
/// (pixels, terminal columns), as long as both use the same one.
pub trait MeasureWidth {
    /// Width of the text at its natural (unscaled) size.
    fn measure_content_width(&self) -> f64;
    /// Width available for the text.
    fn measure_container_width(&self) -> f64;
}

/// A uniform scale in `(0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    pub const IDENTITY: Self = Self(1.0);

    /// Returns [`None`] unless `value` is finite and in `(0, 1]`.
    #[must_use]
    pub fn try_new(value: f64) -> Option<Self> {
        (value.is_finite() && value > 0.0 && value <= 1.0).then_some(Self(value))
    }

    #[must_use]
    pub fn value(self) -> f64 { self.0 }

    #[must_use]
    pub fn is_shrunk(self) -> bool { self.0 < 1.0 }
}

impl Default for ScaleFactor {
    fn default() -> Self { Self::IDENTITY }
}

/// Holds the scale applied on the previous frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AutoScalingText {
    scale: ScaleFactor,
}

impl AutoScalingText {
    #[must_use]
    pub fn scale(&self) -> ScaleFactor { self.scale }

    /// Re-measures and updates the scale:
    /// - content wider than the container → shrink to `container / content`.
    /// - content fits, but the last frame was shrunk → back to `1`.
    /// - otherwise the scale is left alone.
    pub fn on_render_commit(&mut self, measure: &impl MeasureWidth) -> ScaleFactor {
        let content_width = measure.measure_content_width();
        let container_width = measure.measure_container_width();
        let actual_scale = container_width / content_width;

        // Nothing to shrink (empty or unmeasurable content).
        let fits = content_width.is_nan()
            || content_width <= 0.0
            || actual_scale.is_nan()
            || actual_scale >= 1.0;

        if fits {
            if self.scale.is_shrunk() {
                self.scale = ScaleFactor::IDENTITY;
            }
        } else if actual_scale != self.scale.value() {
            // A container of zero width still gets a positive (tiny) scale.
            self.scale = ScaleFactor::try_new(actual_scale)
                .unwrap_or(ScaleFactor(f64::MIN_POSITIVE));
        }

        DEBUG_CALC_MOD.then(|| {
            tracing::trace!(
                message = "AutoScalingText::on_render_commit",
                content_width,
                container_width,
                scale = self.scale.value()
            );
        });

        self.scale
    }
}

/// Applies `scale` to text painted in fixed-width cells, where glyphs can't actually be
/// resized. The text keeps `floor(width × scale)` columns: its rightmost (least
/// significant) columns, with [`ELLIPSIS`] marking the cut.
#[must_use]
pub fn shrink_text_to_scale(text: &str, scale: ScaleFactor) -> String {
    if !scale.is_shrunk() {
        return text.to_string();
    }

    let content_width = text.width();
    #[allow(clippy::cast_precision_loss)]
    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    // The epsilon absorbs the error in `content × (container / content)`.
    let budget = (content_width as f64 * scale.value() + 1e-9).floor().max(0.0) as usize;

    if budget >= content_width {
        return text.to_string();
    }
    if budget == 0 {
        return String::new();
    }

    // One column goes to the ellipsis.
    let mut remaining = budget - 1;
    let mut kept: Vec<char> = vec![];
    for it in text.chars().rev() {
        let char_width = it.width().unwrap_or(0);
        if char_width > remaining {
            break;
        }
        remaining -= char_width;
        kept.push(it);
    }

    let mut acc = String::with_capacity(budget + ELLIPSIS.len_utf8());
    acc.push(ELLIPSIS);
    acc.extend(kept.iter().rev());
    acc
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    struct FixedMeasure {
        content: f64,
        container: f64,
    }

    impl MeasureWidth for FixedMeasure {
        fn measure_content_width(&self) -> f64 { self.content }
        fn measure_container_width(&self) -> f64 { self.container }
    }

    fn measure(content: f64, container: f64) -> FixedMeasure {
        FixedMeasure { content, container }
    }

    #[test]
    fn test_fitting_content_keeps_identity() {
        let mut it = AutoScalingText::default();
        assert_eq!(it.on_render_commit(&measure(5.0, 20.0)), ScaleFactor::IDENTITY);
    }

    #[test]
    fn test_overflow_shrinks_then_restores() {
        let mut it = AutoScalingText::default();

        let scale = it.on_render_commit(&measure(40.0, 20.0));
        assert_eq!(scale.value(), 0.5);
        assert!(scale.is_shrunk());

        // Still overflowing by a different amount: follows the new measurement.
        let scale = it.on_render_commit(&measure(80.0, 20.0));
        assert_eq!(scale.value(), 0.25);

        // Fits again.
        let scale = it.on_render_commit(&measure(10.0, 20.0));
        assert_eq!(scale, ScaleFactor::IDENTITY);
    }

    #[test]
    fn test_degenerate_measurements_count_as_fitting() {
        let mut it = AutoScalingText::default();
        it.on_render_commit(&measure(40.0, 20.0));
        assert_eq!(it.on_render_commit(&measure(0.0, 20.0)), ScaleFactor::IDENTITY);

        it.on_render_commit(&measure(40.0, 20.0));
        assert_eq!(it.on_render_commit(&measure(f64::NAN, 20.0)), ScaleFactor::IDENTITY);
    }

    #[test]
    fn test_zero_width_container_stays_positive() {
        let mut it = AutoScalingText::default();
        let scale = it.on_render_commit(&measure(10.0, 0.0));
        assert!(scale.value() > 0.0);
        assert!(scale.is_shrunk());
    }

    #[test_case(1.5, false)]
    #[test_case(0.0, false)]
    #[test_case(-0.5, false)]
    #[test_case(f64::NAN, false)]
    #[test_case(1.0, true)]
    #[test_case(0.25, true)]
    fn test_scale_factor_range(value: f64, is_valid: bool) {
        assert_eq!(ScaleFactor::try_new(value).is_some(), is_valid);
    }

    #[test_case("1,234,567", 1.0, "1,234,567")]
    #[test_case("1,234,567", 5.0 / 9.0, "…,567")]
    #[test_case("1,234,567", 0.65, "…,567")]
    #[test_case("1,234,567", 17.0 / 18.0, "…234,567")]
    #[test_case("1,234,567", 1.0 / 9.0, "…")]
    #[test_case("1,234,567", 0.01, "")]
    fn test_shrink_text_to_scale(text: &str, scale: f64, expected: &str) {
        let scale = ScaleFactor::try_new(scale).unwrap();
        assert_eq!(shrink_text_to_scale(text, scale), expected);
    }
}
