use datagrid_states::{DividerState, TableState};
use egui::{Rect, Sense, Ui, pos2, vec2};

use super::cell::show_cell;
use super::{DataTable, Divider, TableResponse};

impl DataTable<'_> {
    /// Lays out body row `row` at its absolute position in the scroll content.
    #[allow(clippy::too_many_arguments)]
    pub(super) fn show_row(
        &mut self,
        ui: &mut Ui,
        state: &mut TableState,
        row: usize,
        widths: &[f32],
        total_width: f32,
        column_extent: f32,
        item_divider: Option<&Divider<'_>>,
        cell_content: &mut impl FnMut(&mut Ui, usize, usize),
        response: &mut TableResponse,
    ) {
        let row_height = state.config().row_height;
        let origin = ui.max_rect().min;
        let rect = Rect::from_min_size(
            pos2(origin.x, origin.y + row as f32 * row_height),
            vec2(total_width, row_height),
        );

        let row_response = ui.interact(rect, self.id.with(("row", row)), Sense::click());
        if let Some(fill) = self.table_background {
            ui.painter().rect_filled(rect, 0.0, fill);
        }
        if row_response.hovered() {
            ui.painter()
                .rect_filled(rect, 0.0, ui.visuals().widgets.hovered.weak_bg_fill);
        }
        if row_response.clicked() {
            response.clicked_row = Some(row);
            if let Some(on_click) = self.on_row_clicked.as_mut() {
                on_click(row);
            }
        }

        let divider_extent = item_divider.map_or(0.0, Divider::extent).min(row_height);
        let cells_height = row_height - divider_extent;
        let measure = state.widths().sizing().is_intrinsic();
        let mut left = rect.left();
        for (column, &width) in widths.iter().enumerate() {
            let cell_rect = Rect::from_min_size(pos2(left, rect.top()), vec2(width, cells_height));
            let cell_id = self.id.with(("cell", row, column));
            let content_width = show_cell(ui, cell_rect, cell_id, measure, |ui| {
                cell_content(ui, column, row);
            });
            if measure {
                state.widths_mut().measure(column, content_width);
            }
            left += width + column_extent;
        }

        if let Some(divider) = item_divider {
            let divider_rect = Rect::from_min_max(
                pos2(rect.left(), rect.bottom() - divider_extent),
                rect.max,
            );
            divider.paint(ui.painter(), divider_rect, DividerState::Idle.opacity());
        }
    }
}
