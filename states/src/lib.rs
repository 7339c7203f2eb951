//! UI-independent state of a data table: column widths, divider drag state
//! and the visible row window.

mod config;
mod error;
mod resize;
mod table_state;
mod widths;
mod window;

pub use config::{
    ColumnSizing, DEFAULT_MIN_COLUMN_WIDTH, DEFAULT_OVERSCAN, DEFAULT_ROW_HEIGHT,
    FALLBACK_COLUMN_WIDTH, TableConfig,
};
pub use error::ConfigError;
pub use resize::{ColumnResizer, DRAGGING_OPACITY, DividerState};
pub use table_state::TableState;
pub use widths::{ColumnWidths, ResizeOutcome};
pub use window::RowWindow;
