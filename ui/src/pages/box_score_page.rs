use datagrid_business::BOX_SCORE_HEADERS;
use egui::{RichText, Ui};

use crate::state::State;
use crate::table::{DataTable, TableResponse, default_column_divider};
use crate::utils::colors::Palette;

pub const BOX_SCORE_TABLE_ID: &str = "box_score_table";

/// Static roster. Columns are content sized when the app is configured so.
pub fn box_score_page(state: &mut State, ui: &mut Ui) -> TableResponse {
    let palette = Palette::for_theme(state.dark_theme);
    let players = &state.players;
    let mut clicked_column = None;
    let mut clicked_row = None;

    let mut table = DataTable::new(BOX_SCORE_TABLE_ID, BOX_SCORE_HEADERS.len(), players.len())
        .min_column_width(state.config.min_column_width)
        .header_background(palette.primary)
        .table_background(palette.primary_container)
        .column_divider(Some(default_column_divider(palette.on_primary)))
        .on_column_clicked(|column| clicked_column = Some(column))
        .on_row_clicked(|row| clicked_row = Some(row));
    if state.config.intrinsic_columns {
        table = table.intrinsic_column_widths();
    }

    let response = table.show(
        ui,
        |ui, column| {
            let header = BOX_SCORE_HEADERS.get(column).copied().unwrap_or_default();
            ui.label(RichText::new(header).strong().color(palette.on_primary));
        },
        |ui, column, row| {
            if let Some(player) = players.get(row) {
                ui.label(RichText::new(player.cell_text(column)).color(palette.on_primary_container));
            }
        },
    );

    if let Some(header) = clicked_column.and_then(|column| BOX_SCORE_HEADERS.get(column)) {
        state.last_click = Some(format!("Clicked {header} header"));
    }
    if let Some(player) = clicked_row.and_then(|row| state.players.get(row)) {
        state.last_click = Some(format!("Clicked {}", player.player_name.trim()));
    }
    response
}
