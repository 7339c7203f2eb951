use datagrid_states::{ResizeOutcome, TableState};
use egui::{CursorIcon, Rect, Sense, Ui, pos2, vec2};

use super::cell::show_cell;
use super::{DataTable, Divider, TableResponse};

impl DataTable<'_> {
    /// Handles drags on the header's column dividers.
    ///
    /// Runs before anything is painted so the header and the body both
    /// see the widths that result from this frame's drag.
    pub(super) fn interact_dividers(
        &self,
        ui: &mut Ui,
        state: &mut TableState,
        divider: Option<&Divider<'_>>,
    ) -> Option<ResizeOutcome> {
        let divider = divider?;
        let extent = divider.extent();
        let origin = ui.cursor().min;
        let pixels_per_point = ui.ctx().pixels_per_point();

        let mut outcome = None;
        let mut left = origin.x;
        for (column, width) in state.widths().resolved().into_iter().enumerate() {
            left += width;
            let rect = Rect::from_min_size(pos2(left, origin.y), vec2(extent, self.header_height));
            left += extent;

            let response = ui
                .interact(rect, self.id.with(("divider", column)), Sense::drag())
                .on_hover_cursor(CursorIcon::ResizeColumn);
            if response.drag_started() {
                state.drag_started(column);
            }
            if response.dragged() {
                let delta = response.drag_delta().x;
                if delta != 0.0 {
                    outcome = Some(state.drag_delta(column, delta * pixels_per_point, pixels_per_point));
                }
            }
            if response.drag_stopped() {
                state.drag_stopped(column);
            }
        }
        outcome
    }

    #[allow(clippy::too_many_arguments)]
    pub(super) fn show_header(
        &mut self,
        ui: &mut Ui,
        state: &mut TableState,
        widths: &[f32],
        total_width: f32,
        divider: Option<&Divider<'_>>,
        header_content: &mut impl FnMut(&mut Ui, usize),
        response: &mut TableResponse,
    ) {
        let (rect, _) = ui.allocate_exact_size(vec2(total_width, self.header_height), Sense::hover());
        if let Some(fill) = self.header_background {
            ui.painter().rect_filled(rect, 0.0, fill);
        }
        response.header_rect = Some(rect);

        let measure = state.widths().sizing().is_intrinsic();
        let extent = divider.map_or(0.0, Divider::extent);
        let mut left = rect.left();
        for (column, &width) in widths.iter().enumerate() {
            let cell_rect = Rect::from_min_size(pos2(left, rect.top()), vec2(width, rect.height()));
            let cell_id = self.id.with(("header", column));
            if ui.interact(cell_rect, cell_id, Sense::click()).clicked() {
                response.clicked_column = Some(column);
                if let Some(on_click) = self.on_column_clicked.as_mut() {
                    on_click(column);
                }
            }

            let content_width = show_cell(ui, cell_rect, cell_id, measure, |ui| {
                header_content(ui, column);
            });
            if measure {
                state.widths_mut().measure(column, content_width);
            }
            left += width;

            if let Some(divider) = divider {
                let divider_rect =
                    Rect::from_min_size(pos2(left, rect.top()), vec2(extent, rect.height()));
                divider.paint(ui.painter(), divider_rect, state.divider_state(column).opacity());
                response.divider_rects.push(divider_rect);
                left += extent;
            }
        }
    }
}
