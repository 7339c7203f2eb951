//! Drag-to-resize state for column dividers.

use log::debug;

use crate::{ColumnWidths, ResizeOutcome};

/// Opacity of a divider while it is being dragged.
pub const DRAGGING_OPACITY: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DividerState {
    #[default]
    Idle,
    Dragging,
}

impl DividerState {
    pub fn opacity(self) -> f32 {
        match self {
            Self::Idle => 1.0,
            Self::Dragging => DRAGGING_OPACITY,
        }
    }
}

/// Tracks which divider, if any, is under an active drag gesture.
///
/// There is a single pointer, so at most one divider is dragging at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnResizer {
    dragging: Option<usize>,
}

impl ColumnResizer {
    pub fn drag_started(&mut self, column: usize) {
        debug!("Started resizing column {column}");
        self.dragging = Some(column);
    }

    pub fn drag_stopped(&mut self, column: usize) {
        if self.dragging == Some(column) {
            debug!("Stopped resizing column {column}");
            self.dragging = None;
        }
    }

    pub fn dragging(&self) -> Option<usize> {
        self.dragging
    }

    pub fn state(&self, column: usize) -> DividerState {
        if self.dragging == Some(column) {
            DividerState::Dragging
        } else {
            DividerState::Idle
        }
    }

    /// Applies a pointer delta given in physical pixels.
    ///
    /// `density` is the number of physical pixels per layout unit. Deltas for
    /// a divider that is not dragging are ignored.
    pub fn drag_delta(
        &self,
        widths: &mut ColumnWidths,
        column: usize,
        delta_px: f32,
        density: f32,
    ) -> ResizeOutcome {
        if self.state(column) != DividerState::Dragging {
            return ResizeOutcome::Ignored;
        }
        let density = if density.is_finite() && density > 0.0 {
            density
        } else {
            1.0
        };
        widths.apply_delta(column, delta_px / density)
    }
}
