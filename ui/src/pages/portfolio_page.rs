//! Live portfolio: prices move every tick while the table stays put.

use datagrid_business::PORTFOLIO_HEADERS;
use datagrid_business::portfolio::{TICKER_COLUMN, TIMELINE_COLUMN};
use egui::{Align, Color32, Id, Layout, Response, RichText, Sense, Ui, vec2};

use crate::state::State;
use crate::table::{DataTable, TableResponse, default_column_divider, default_item_divider};
use crate::utils::colors::{COLOR_ACCENT, Palette};
use crate::widgets;

pub const PORTFOLIO_TABLE_ID: &str = "portfolio_table";
const ROW_HEIGHT: f32 = 56.0;
const HEADER_HEIGHT: f32 = 48.0;
const BADGE_SIZE: f32 = 20.0;

pub fn portfolio_page(state: &mut State, ui: &mut Ui) -> TableResponse {
    let palette = Palette::for_theme(state.dark_theme);
    let portfolio = &state.portfolio;
    let mut clicked_row = None;

    let response = DataTable::new(PORTFOLIO_TABLE_ID, PORTFOLIO_HEADERS.len(), portfolio.len())
        .min_column_width(state.config.min_column_width)
        .row_height(ROW_HEIGHT)
        .header_height(HEADER_HEIGHT)
        .header_background(palette.primary)
        .table_background(palette.primary_container)
        .column_divider(Some(default_column_divider(palette.on_primary)))
        .item_divider(Some(default_item_divider(palette.on_primary_container)))
        .on_row_clicked(|row| clicked_row = Some(row))
        .show(
            ui,
            |ui, column| {
                let text = RichText::new(PORTFOLIO_HEADERS.get(column).copied().unwrap_or_default())
                    .strong()
                    .color(palette.on_primary);
                aligned(ui, column, |ui| {
                    ui.label(text);
                });
            },
            |ui, column, row| {
                let Some(item) = portfolio.items.get(row) else {
                    return;
                };
                match column {
                    TICKER_COLUMN => {
                        ticker_badge(ui, &item.ticker).on_hover_ui(|ui| {
                            ui.label(item.purchase_summary());
                        });
                        ui.add_space(6.0);
                        ui.label(RichText::new(&item.name).color(palette.on_primary_container));
                    }
                    TIMELINE_COLUMN => {
                        let values: Vec<f32> = item.timeline.iter().map(|v| *v as f32).collect();
                        widgets::bar_chart(
                            ui,
                            Id::new(("portfolio_timeline", row)),
                            &values,
                            palette.on_primary_container,
                        );
                    }
                    _ => {
                        let text = RichText::new(item.cell_text(column))
                            .color(palette.on_primary_container);
                        aligned(ui, column, |ui| {
                            ui.label(text);
                        });
                    }
                }
            },
        );

    if let Some(item) = clicked_row.and_then(|row| state.portfolio.items.get(row)) {
        state.last_click = Some(format!("Clicked {}", item.ticker));
    }
    response
}

/// Text columns after the chart are right aligned.
fn aligned(ui: &mut Ui, column: usize, add_contents: impl FnOnce(&mut Ui)) {
    if column > TIMELINE_COLUMN {
        ui.with_layout(Layout::right_to_left(Align::Center), add_contents);
    } else {
        add_contents(ui);
    }
}

/// Round badge with the ticker's first letter.
fn ticker_badge(ui: &mut Ui, ticker: &str) -> Response {
    let (rect, response) = ui.allocate_exact_size(vec2(BADGE_SIZE, BADGE_SIZE), Sense::hover());
    let painter = ui.painter();
    painter.circle_filled(rect.center(), BADGE_SIZE / 2.0, COLOR_ACCENT);
    let initial = ticker.chars().next().map(String::from).unwrap_or_default();
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initial,
        egui::FontId::proportional(11.0),
        Color32::WHITE,
    );
    response
}
