use egui::{Align, Id, Layout, Rect, TextWrapMode, Ui, UiBuilder, vec2};

/// Horizontal padding inside every cell.
pub const CELL_PADDING: f32 = 8.0;

/// Renders one cell's content inside `rect` and returns the width the
/// content asked for, padding included.
///
/// When `measure` is set text does not wrap, so the returned width is the
/// content's natural width rather than the column's. Labels are not
/// selectable so clicks fall through to the row or header.
pub(crate) fn show_cell(
    ui: &mut Ui,
    rect: Rect,
    id_salt: Id,
    measure: bool,
    add_contents: impl FnOnce(&mut Ui),
) -> f32 {
    let inner = rect.shrink2(vec2(CELL_PADDING, 0.0));
    let mut child = ui.new_child(
        UiBuilder::new()
            .id_salt(id_salt)
            .max_rect(inner)
            .layout(Layout::left_to_right(Align::Center)),
    );
    child.set_clip_rect(inner.intersect(ui.clip_rect()));
    child.style_mut().interaction.selectable_labels = false;
    if measure {
        child.style_mut().wrap_mode = Some(TextWrapMode::Extend);
    } else {
        child.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
    }
    add_contents(&mut child);
    child.min_rect().width() + CELL_PADDING * 2.0
}
