// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

/// Absolute column and row on the terminal screen, 0 based.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pos {
    pub col_index: u16,
    pub row_index: u16,
}

/// Width and height, in terminal cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub col_count: u16,
    pub row_count: u16,
}

/// A rectangle of cells, `origin` being its top left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub origin: Pos,
    pub size: Size,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TooSmallToDisplayResult {
    IsLargeEnough,
    IsTooSmall,
}

#[must_use]
pub const fn pos(col_index: u16, row_index: u16) -> Pos { Pos { col_index, row_index } }

#[must_use]
pub const fn size(col_count: u16, row_count: u16) -> Size { Size { col_count, row_count } }

impl Size {
    #[must_use]
    pub fn fits_min_size(&self, min_size: Size) -> TooSmallToDisplayResult {
        if self.col_count < min_size.col_count || self.row_count < min_size.row_count {
            TooSmallToDisplayResult::IsTooSmall
        } else {
            TooSmallToDisplayResult::IsLargeEnough
        }
    }
}

impl Rect {
    #[must_use]
    pub const fn new(origin: Pos, size: Size) -> Self { Self { origin, size } }

    #[must_use]
    pub fn contains(&self, it: Pos) -> bool {
        let col_range = u32::from(self.origin.col_index)
            ..u32::from(self.origin.col_index) + u32::from(self.size.col_count);
        let row_range = u32::from(self.origin.row_index)
            ..u32::from(self.origin.row_index) + u32::from(self.size.row_count);
        col_range.contains(&u32::from(it.col_index)) && row_range.contains(&u32::from(it.row_index))
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[c: {}, r: {}]", self.col_index, self.row_index)
    }
}

impl Display for Size {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[w: {}, h: {}]", self.col_count, self.row_count)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_rect_contains_is_half_open() {
        let it = Rect::new(pos(2, 3), size(4, 2));
        assert!(it.contains(pos(2, 3)));
        assert!(it.contains(pos(5, 4)));
        assert!(!it.contains(pos(6, 4)));
        assert!(!it.contains(pos(5, 5)));
        assert!(!it.contains(pos(1, 3)));
    }

    #[test]
    fn test_fits_min_size() {
        let min = size(20, 10);
        assert_eq!(size(20, 10).fits_min_size(min), TooSmallToDisplayResult::IsLargeEnough);
        assert_eq!(size(19, 40).fits_min_size(min), TooSmallToDisplayResult::IsTooSmall);
        assert_eq!(size(80, 9).fits_min_size(min), TooSmallToDisplayResult::IsTooSmall);
    }
}
