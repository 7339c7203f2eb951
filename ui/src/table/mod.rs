//! Virtualized data table with a sticky header and resizable columns.
//!
//! The table owns no data. Header and cell content come from callbacks,
//! called only for the columns and rows that are on screen:
//! - `header`: sticky header row and divider drags
//! - `row`: virtualized body rows
//! - `cell`: per-cell child ui and content measurement
//! - `divider`: column and item separators
//! - `scroll`: externally controllable scroll position

mod cell;
mod divider;
mod header;
mod row;
mod scroll;

use std::hash::Hash;
use std::ops::Range;

use datagrid_states::{ColumnSizing, ResizeOutcome, TableConfig, TableState};
use egui::{Color32, Context, Id, Rect, ScrollArea, Ui, Vec2, vec2};
use log::debug;

pub use cell::CELL_PADDING;
pub use divider::{Divider, default_column_divider, default_item_divider};
pub use scroll::TableScroll;

use divider::DividerSlot;

pub const DEFAULT_HEADER_HEIGHT: f32 = 40.0;

type IndexCallback<'a> = Box<dyn FnMut(usize) + 'a>;

/// What happened to the table during one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableResponse {
    /// Resolved width of every column, shared by header and body.
    pub column_widths: Vec<f32>,
    pub header_rect: Option<Rect>,
    /// Screen rect of every column divider in the header, by column.
    pub divider_rects: Vec<Rect>,
    /// Body rows materialized this frame.
    pub visible_rows: Range<usize>,
    pub clicked_row: Option<usize>,
    pub clicked_column: Option<usize>,
    /// Outcome of the last drag delta handled this frame.
    pub resize: Option<ResizeOutcome>,
    pub offset: Vec2,
}

/// Builder for a data table; finish with [`DataTable::show`].
///
/// ```no_run
/// # egui::__run_test_ui(|ui| {
/// use datagrid_ui::DataTable;
///
/// DataTable::new("players", 3, 1_000)
///     .on_row_clicked(|row| log::info!("row {row}"))
///     .show(
///         ui,
///         |ui, column| {
///             ui.strong(format!("Column {column}"));
///         },
///         |ui, column, row| {
///             ui.label(format!("{row}:{column}"));
///         },
///     );
/// # });
/// ```
pub struct DataTable<'a> {
    id: Id,
    row_count: usize,
    config: TableConfig,
    header_height: f32,
    header_background: Option<Color32>,
    table_background: Option<Color32>,
    item_divider: DividerSlot<'a>,
    column_divider: DividerSlot<'a>,
    on_row_clicked: Option<IndexCallback<'a>>,
    on_column_clicked: Option<IndexCallback<'a>>,
    scroll: Option<&'a mut TableScroll>,
}

impl<'a> DataTable<'a> {
    /// `id_salt` must be unique among the tables shown in one context.
    pub fn new(id_salt: impl Hash, column_count: usize, row_count: usize) -> Self {
        Self {
            id: Id::new(id_salt),
            row_count,
            config: TableConfig::builder().column_count(column_count).build(),
            header_height: DEFAULT_HEADER_HEIGHT,
            header_background: None,
            table_background: None,
            item_divider: DividerSlot::Default,
            column_divider: DividerSlot::Default,
            on_row_clicked: None,
            on_column_clicked: None,
            scroll: None,
        }
    }

    /// Width every column starts at. `None` splits the available width
    /// evenly across `column_count + 1` shares.
    pub fn default_column_width(mut self, width: Option<f32>) -> Self {
        self.config.sizing = ColumnSizing::from_default_width(width);
        self
    }

    /// Size each column to its widest content seen so far.
    pub fn intrinsic_column_widths(mut self) -> Self {
        self.config.sizing = ColumnSizing::intrinsic();
        self
    }

    /// Columns cannot be dragged narrower than this.
    pub fn min_column_width(mut self, width: f32) -> Self {
        self.config.min_column_width = width;
        self
    }

    pub fn row_height(mut self, height: f32) -> Self {
        self.config.row_height = height;
        self
    }

    pub fn header_height(mut self, height: f32) -> Self {
        self.header_height = height.max(0.0);
        self
    }

    /// Rows rendered beyond each edge of the viewport.
    pub fn overscan(mut self, rows: usize) -> Self {
        self.config.overscan = rows;
        self
    }

    pub fn header_background(mut self, color: Color32) -> Self {
        self.header_background = Some(color);
        self
    }

    pub fn table_background(mut self, color: Color32) -> Self {
        self.table_background = Some(color);
        self
    }

    /// Separator below every row. `None` removes it.
    pub fn item_divider(mut self, divider: Option<Divider<'a>>) -> Self {
        self.item_divider = DividerSlot::from_option(divider);
        self
    }

    /// Separator after every column; the header's copy is the resize handle.
    /// `None` removes it, and with it drag-to-resize.
    pub fn column_divider(mut self, divider: Option<Divider<'a>>) -> Self {
        self.column_divider = DividerSlot::from_option(divider);
        self
    }

    pub fn on_row_clicked(mut self, callback: impl FnMut(usize) + 'a) -> Self {
        self.on_row_clicked = Some(Box::new(callback));
        self
    }

    pub fn on_column_clicked(mut self, callback: impl FnMut(usize) + 'a) -> Self {
        self.on_column_clicked = Some(Box::new(callback));
        self
    }

    /// Reports the scroll offset into `scroll` and applies its requests.
    pub fn scroll(mut self, scroll: &'a mut TableScroll) -> Self {
        self.scroll = Some(scroll);
        self
    }

    /// Copy of the state kept for the table created with `id_salt`.
    pub fn load_state(ctx: &Context, id_salt: impl Hash) -> Option<TableState> {
        ctx.data(|data| data.get_temp::<TableState>(Id::new(id_salt)))
    }

    /// Forgets resized and measured widths of the table created with `id_salt`.
    pub fn reset_widths(ctx: &Context, id_salt: impl Hash) {
        let id = Id::new(id_salt);
        ctx.data_mut(|data| {
            if let Some(mut state) = data.get_temp::<TableState>(id) {
                state.widths_mut().reset();
                data.insert_temp(id, state);
            }
        });
    }

    pub fn show(
        mut self,
        ui: &mut Ui,
        mut header_content: impl FnMut(&mut Ui, usize),
        mut cell_content: impl FnMut(&mut Ui, usize, usize),
    ) -> TableResponse {
        let id = self.id;
        let mut state = ui
            .data_mut(|data| data.get_temp::<TableState>(id))
            .unwrap_or_else(|| {
                debug!("Creating state for table {id:?}");
                TableState::new(self.config)
            });
        state.sync(self.config);
        state.widths_mut().set_available_width(ui.available_width());

        let divider_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
        let column_divider = std::mem::take(&mut self.column_divider)
            .resolve(|| default_column_divider(divider_color));
        let item_divider = std::mem::take(&mut self.item_divider)
            .resolve(|| default_item_divider(divider_color));

        let window = state.row_window(self.row_count);
        let (vertical_request, horizontal_request) = self
            .scroll
            .as_deref_mut()
            .map(|scroll| scroll.take_requests(&window))
            .unwrap_or_default();

        let mut response = TableResponse::default();

        let mut horizontal = ScrollArea::horizontal()
            .id_salt(id.with("horizontal"))
            .auto_shrink([false, true]);
        if let Some(offset) = horizontal_request {
            horizontal = horizontal.horizontal_scroll_offset(offset);
        }

        let output = horizontal.show(ui, |ui| {
            ui.vertical(|ui| {
                ui.spacing_mut().item_spacing = Vec2::ZERO;

                response.resize =
                    self.interact_dividers(ui, &mut state, column_divider.as_ref());

                let widths = state.widths().resolved();
                let column_extent = column_divider.as_ref().map_or(0.0, Divider::extent);
                let total_width = widths.iter().sum::<f32>() + column_extent * widths.len() as f32;

                self.show_header(
                    ui,
                    &mut state,
                    &widths,
                    total_width,
                    column_divider.as_ref(),
                    &mut header_content,
                    &mut response,
                );

                let mut vertical = ScrollArea::vertical()
                    .id_salt(id.with("body"))
                    .auto_shrink([true, false]);
                if let Some(offset) = vertical_request {
                    vertical = vertical.vertical_scroll_offset(offset);
                }
                let body = vertical.show_viewport(ui, |ui, viewport| {
                    ui.set_min_size(vec2(total_width, window.content_height()));
                    let rows = window.visible(viewport.min.y, viewport.height());
                    for row in rows.clone() {
                        self.show_row(
                            ui,
                            &mut state,
                            row,
                            &widths,
                            total_width,
                            column_extent,
                            item_divider.as_ref(),
                            &mut cell_content,
                            &mut response,
                        );
                    }
                    rows
                });
                response.visible_rows = body.inner;
                response.column_widths = widths;
                body.state.offset.y
            })
            .inner
        });
        response.offset = vec2(output.state.offset.x, output.inner);

        if let Some(scroll) = self.scroll.as_deref_mut() {
            scroll.set_offset(response.offset);
        }

        if state.widths_mut().commit_measurements() {
            ui.ctx().request_repaint();
        }
        ui.data_mut(|data| data.insert_temp(id, state));

        response
    }
}
