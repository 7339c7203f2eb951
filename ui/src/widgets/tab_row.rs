use egui::{Button, Color32, Id, Rect, RichText, Shape, Ui, pos2, vec2};

/// Seconds the indicator takes to slide to a newly selected tab.
const INDICATOR_ANIMATION_SECONDS: f32 = 0.3;
const INDICATOR_VERTICAL_PADDING: f32 = 2.0;
const INDICATOR_ROUNDING: f32 = 4.0;
const TAB_ROW_PADDING: f32 = 6.0;

/// Offset and width of the indicator under tab `selected`, given each
/// tab's width. Unknown tabs contribute no width.
pub fn indicator_target(tab_widths: &[f32], selected: usize) -> (f32, f32) {
    let offset = tab_widths.iter().take(selected).sum();
    let width = tab_widths.get(selected).copied().unwrap_or_default();
    (offset, width)
}

/// A row of tabs with a sliding selection indicator behind the selected one.
///
/// The indicator follows the tab sizes measured on the previous frame.
/// Returns `true` when a tab was clicked this frame.
pub fn tab_row(
    ui: &mut Ui,
    id_salt: impl std::hash::Hash,
    labels: &[&str],
    selected: &mut usize,
    indicator_color: Color32,
) -> bool {
    let id = Id::new(id_salt);
    let widths_id = id.with("tab_widths");
    let previous_widths: Vec<f32> = ui
        .data_mut(|data| data.get_temp(widths_id))
        .unwrap_or_default();

    let (target_offset, target_width) = indicator_target(&previous_widths, *selected);
    let ctx = ui.ctx().clone();
    let offset = ctx.animate_value_with_time(
        id.with("indicator_offset"),
        target_offset,
        INDICATOR_ANIMATION_SECONDS,
    );
    let width = ctx.animate_value_with_time(
        id.with("indicator_width"),
        target_width,
        INDICATOR_ANIMATION_SECONDS,
    );

    let mut changed = false;
    let mut widths = Vec::with_capacity(labels.len());
    egui::Frame::new()
        .inner_margin(TAB_ROW_PADDING)
        .show(ui, |ui| {
            let indicator = ui.painter().add(Shape::Noop);
            let row = ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                for (index, label) in labels.iter().enumerate() {
                    let mut text = RichText::new(*label);
                    if index == *selected {
                        text = text.strong().color(Color32::WHITE);
                    }
                    let response = ui.add(Button::new(text).frame(false));
                    widths.push(response.rect.width());
                    if response.clicked() && *selected != index {
                        *selected = index;
                        changed = true;
                    }
                }
            });

            let row_rect = row.response.rect;
            let rect = Rect::from_min_size(
                pos2(row_rect.left() + offset, row_rect.top() - INDICATOR_VERTICAL_PADDING),
                vec2(width, row_rect.height() + INDICATOR_VERTICAL_PADDING * 2.0),
            );
            ui.painter().set(
                indicator,
                Shape::rect_filled(rect, INDICATOR_ROUNDING, indicator_color),
            );
        });

    if widths != previous_widths {
        ui.data_mut(|data| data.insert_temp(widths_id, widths));
        ui.ctx().request_repaint();
    }
    changed
}
