//! Column width model.
//!
//! Resolves the width of every column from three layers, first hit wins:
//! a width committed by a user resize, the widest content measured so far
//! (intrinsic sizing only), and the sizing policy's default.

use std::collections::BTreeMap;

use log::{debug, trace};

use crate::{ColumnSizing, FALLBACK_COLUMN_WIDTH};

/// Result of applying a width delta to one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeOutcome {
    /// The column now has `width`.
    Committed { column: usize, width: f32 },
    /// `candidate` fell below the floor; the previous width is kept.
    Rejected { column: usize, candidate: f32 },
    /// No divider of that column is being dragged.
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnWidths {
    column_count: usize,
    sizing: ColumnSizing,
    min_width: f32,
    available_width: f32,
    resized: BTreeMap<usize, f32>,
    measured: BTreeMap<usize, f32>,
    // Measurements of the current frame, folded in by `commit_measurements`.
    pending: BTreeMap<usize, f32>,
}

impl ColumnWidths {
    pub fn new(column_count: usize, sizing: ColumnSizing, min_width: f32) -> Self {
        Self {
            column_count,
            sizing,
            min_width,
            available_width: 0.0,
            resized: BTreeMap::new(),
            measured: BTreeMap::new(),
            pending: BTreeMap::new(),
        }
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn sizing(&self) -> ColumnSizing {
        self.sizing
    }

    pub fn min_width(&self) -> f32 {
        self.min_width
    }

    /// Changes the floor. Resized columns narrower than the new floor are
    /// raised to it.
    pub fn set_min_width(&mut self, min_width: f32) {
        self.min_width = min_width;
        for (column, width) in self.resized.iter_mut() {
            if *width < min_width {
                debug!("Column {column} raised from {width} to the new floor {min_width}");
                *width = min_width;
            }
        }
    }

    /// Width of the container the table lives in. Only `EqualShare` reads it.
    pub fn set_available_width(&mut self, available_width: f32) {
        self.available_width = available_width.max(0.0);
    }

    /// Width of a column nobody resized or measured.
    pub fn default_width(&self) -> f32 {
        match self.sizing {
            ColumnSizing::Fixed(width) => width,
            ColumnSizing::EqualShare => {
                if self.available_width > 0.0 {
                    let share = self.available_width / (self.column_count + 1) as f32;
                    share.max(self.min_width)
                } else {
                    FALLBACK_COLUMN_WIDTH
                }
            }
            ColumnSizing::Intrinsic { fallback } => fallback,
        }
    }

    /// Current width of `column`. Always answers, even for unknown columns.
    pub fn resolve(&self, column: usize) -> f32 {
        if let Some(width) = self.resized.get(&column) {
            return *width;
        }
        if let Some(width) = self.measured.get(&column) {
            return width.max(self.min_width);
        }
        self.default_width()
    }

    /// Resolved widths of every column, in column order.
    pub fn resolved(&self) -> Vec<f32> {
        (0..self.column_count).map(|column| self.resolve(column)).collect()
    }

    pub fn is_resized(&self, column: usize) -> bool {
        self.resized.contains_key(&column)
    }

    /// Adds `delta` layout units to the column, unless that would take it
    /// below the floor, in which case the delta is dropped.
    ///
    /// A zero delta changes nothing and does not mark the column as resized.
    pub fn apply_delta(&mut self, column: usize, delta: f32) -> ResizeOutcome {
        let current = self.resolve(column);
        if delta == 0.0 {
            return ResizeOutcome::Committed {
                column,
                width: current,
            };
        }
        let candidate = current + delta;
        if candidate >= self.min_width {
            self.resized.insert(column, candidate);
            trace!("Column {column} resized to {candidate}");
            ResizeOutcome::Committed {
                column,
                width: candidate,
            }
        } else {
            trace!("Column {column} resize rejected, {candidate} is below the floor");
            ResizeOutcome::Rejected { column, candidate }
        }
    }

    /// Records the content width of a cell rendered this frame.
    ///
    /// Has no effect outside intrinsic sizing.
    pub fn measure(&mut self, column: usize, content_width: f32) {
        if !self.sizing.is_intrinsic() || !content_width.is_finite() {
            return;
        }
        let pending = self.pending.entry(column).or_insert(content_width);
        *pending = pending.max(content_width);
    }

    /// Folds this frame's measurements into the committed widths.
    ///
    /// Returns `true` when some column grew and the layout must run again.
    /// A narrower measurement never shrinks a column.
    pub fn commit_measurements(&mut self) -> bool {
        let mut grew = false;
        for (column, width) in std::mem::take(&mut self.pending) {
            let current = self.measured.get(&column).copied().unwrap_or(0.0);
            if width > current {
                trace!("Column {column} grew from {current} to {width}");
                self.measured.insert(column, width);
                grew = true;
            }
        }
        grew
    }

    /// Drops every resized and measured width, keeping the policy.
    pub fn reset(&mut self) {
        debug!("Resetting widths of {} columns", self.column_count);
        self.resized.clear();
        self.measured.clear();
        self.pending.clear();
    }
}
