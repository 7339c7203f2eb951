use datagrid_business::chart::{animation_progress, bar_rects};
use egui::{Color32, Id, Response, Sense, Ui};

/// Bar chart filling the available space, growing its bars in over one
/// second the first time it is shown.
///
/// The start of the animation is remembered under `id`, so a chart scrolled
/// out of view and back does not replay it.
pub fn bar_chart(ui: &mut Ui, id: Id, values: &[f32], color: Color32) -> Response {
    let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::hover());

    let now = ui.input(|input| input.time);
    let started = ui.data_mut(|data| *data.get_temp_mut_or_insert_with(id, || now));
    let progress = animation_progress((now - started) as f32);
    if progress < 1.0 {
        ui.ctx().request_repaint();
    }

    let painter = ui.painter_at(rect);
    for bar in bar_rects(rect, values, progress) {
        painter.rect_filled(bar, 0.0, color);
    }
    response
}
