use datagrid_business::portfolio::format_money;

use crate::state::{BOX_SCORE_TAB, PORTFOLIO_TAB, State, TAB_LABELS};
use crate::table::DataTable;
use crate::utils::colors::COLOR_ACCENT;
use crate::{pages, widgets};

pub struct DataTableApp {
    state: State,
    /// Theme whose visuals were last applied to the context.
    applied_theme: Option<bool>,
}

impl DataTableApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self {
            state,
            applied_theme: None,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Draws one frame of the app into `ui`.
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let ctx = ui.ctx().clone();
        if self.applied_theme != Some(self.state.dark_theme) {
            ctx.set_visuals(widgets::visuals_for(self.state.dark_theme));
            self.applied_theme = Some(self.state.dark_theme);
        }

        let now = ui.input(|input| input.time);
        self.state.tick(now);
        ctx.request_repaint_after(self.state.tick_interval());

        ui.horizontal(|ui| {
            ui.heading("DataTable Examples");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                widgets::theme_switch(ui, &mut self.state.dark_theme);
            });
        });
        ui.separator();

        widgets::tab_row(
            ui,
            "sample_tabs",
            &TAB_LABELS,
            &mut self.state.selected_tab,
            COLOR_ACCENT,
        );
        ui.horizontal(|ui| {
            if ui.button("Reset columns").clicked() {
                DataTable::reset_widths(&ctx, pages::PORTFOLIO_TABLE_ID);
                DataTable::reset_widths(&ctx, pages::BOX_SCORE_TABLE_ID);
            }
            if self.state.selected_tab == PORTFOLIO_TAB {
                let total = self.state.portfolio.total_value();
                ui.label(format!("Portfolio value: {}", format_money(total)));
            }
            if let Some(last_click) = &self.state.last_click {
                ui.weak(last_click);
            }
        });
        ui.add_space(8.0);

        if self.state.selected_tab == BOX_SCORE_TAB {
            pages::box_score_page(&mut self.state, ui);
        } else {
            pages::portfolio_page(&mut self.state, ui);
        }
    }
}

impl eframe::App for DataTableApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| self.ui(ui));
    }
}
