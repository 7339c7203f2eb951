//! Row window: which rows of a uniformly sized list intersect the viewport.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowWindow {
    row_count: usize,
    row_height: f32,
    overscan: usize,
}

impl RowWindow {
    pub fn new(row_count: usize, row_height: f32, overscan: usize) -> Self {
        Self {
            row_count,
            row_height,
            overscan,
        }
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Height of all rows stacked.
    pub fn content_height(&self) -> f32 {
        self.row_count as f32 * self.row_height
    }

    /// Offset of the top edge of `row` from the top of the content.
    pub fn row_top(&self, row: usize) -> f32 {
        row as f32 * self.row_height
    }

    /// Scroll offset that puts `row` at the top of the viewport.
    pub fn offset_for_row(&self, row: usize) -> f32 {
        self.row_top(row.min(self.row_count.saturating_sub(1)))
    }

    /// Rows to materialize for a viewport starting `offset` below the top of
    /// the content, including the overscan rows on both sides.
    pub fn visible(&self, offset: f32, viewport_height: f32) -> Range<usize> {
        if self.row_count == 0 || !(self.row_height > 0.0) {
            return 0..0;
        }
        let offset = offset.max(0.0);
        let viewport_height = viewport_height.max(0.0);

        let first = (offset / self.row_height).floor() as usize;
        let last = ((offset + viewport_height) / self.row_height).ceil() as usize;

        let end = last.saturating_add(self.overscan).min(self.row_count);
        let start = first.saturating_sub(self.overscan).min(end);
        start..end
    }
}
