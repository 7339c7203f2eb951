use log::debug;

use crate::{ColumnResizer, ColumnWidths, DividerState, ResizeOutcome, RowWindow, TableConfig};

/// Per-table state that survives between frames.
///
/// The table is the only owner and the only mutator; rows and the header
/// read the widths through it.
#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    config: TableConfig,
    widths: ColumnWidths,
    resizer: ColumnResizer,
}

impl TableState {
    pub fn new(config: TableConfig) -> Self {
        let config = config.sanitized();
        Self {
            widths: ColumnWidths::new(
                config.column_count,
                config.sizing,
                config.min_column_width,
            ),
            config,
            resizer: ColumnResizer::default(),
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Brings the state in line with this frame's configuration.
    ///
    /// A different column count or sizing policy rebuilds the widths from
    /// scratch; other changes are applied in place. Returns `true` on rebuild.
    pub fn sync(&mut self, config: TableConfig) -> bool {
        let config = config.sanitized();
        if config == self.config {
            return false;
        }
        let rebuild = config.column_count != self.config.column_count
            || config.sizing != self.config.sizing;
        if rebuild {
            debug!(
                "Rebuilding column widths: {} columns, {:?}",
                config.column_count, config.sizing
            );
            *self = Self::new(config);
        } else {
            self.widths.set_min_width(config.min_column_width);
            self.config = config;
        }
        rebuild
    }

    pub fn widths(&self) -> &ColumnWidths {
        &self.widths
    }

    pub fn widths_mut(&mut self) -> &mut ColumnWidths {
        &mut self.widths
    }

    pub fn row_window(&self, row_count: usize) -> RowWindow {
        RowWindow::new(row_count, self.config.row_height, self.config.overscan)
    }

    pub fn divider_state(&self, column: usize) -> DividerState {
        self.resizer.state(column)
    }

    pub fn drag_started(&mut self, column: usize) {
        self.resizer.drag_started(column);
    }

    pub fn drag_stopped(&mut self, column: usize) {
        self.resizer.drag_stopped(column);
    }

    pub fn drag_delta(&mut self, column: usize, delta_px: f32, density: f32) -> ResizeOutcome {
        let outcome = self
            .resizer
            .drag_delta(&mut self.widths, column, delta_px, density);
        if let ResizeOutcome::Committed { column, width } = outcome {
            debug!("Column {column} width is now {width}");
        }
        outcome
    }
}
