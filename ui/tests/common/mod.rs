#![allow(dead_code)]

use datagrid_business::AppConfig;
use datagrid_ui::state::State;
use datagrid_ui::{DataTable, DataTableApp, TableResponse, TableScroll};
use egui::{Event, Modifiers, PointerButton, Pos2, Vec2, vec2};
use egui_kittest::Harness;

pub const TABLE_ID: &str = "test_table";
pub const HARNESS_SIZE: Vec2 = vec2(800.0, 600.0);
pub const MIN_COLUMN_WIDTH: f32 = 50.0;

/// Everything a test table reports back, frame by frame.
pub struct TableProbe {
    pub rows: usize,
    pub columns: usize,
    pub intrinsic: bool,
    /// Column whose header and body cell widths get recorded.
    pub watched_column: usize,
    pub header_width: Option<f32>,
    pub body_width: Option<f32>,
    pub cells_rendered: usize,
    pub clicked_rows: Vec<usize>,
    pub clicked_columns: Vec<usize>,
    pub scroll: TableScroll,
    pub response: TableResponse,
}

impl TableProbe {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            rows,
            columns,
            intrinsic: false,
            watched_column: 2,
            header_width: None,
            body_width: None,
            cells_rendered: 0,
            clicked_rows: Vec::new(),
            clicked_columns: Vec::new(),
            scroll: TableScroll::new(),
            response: TableResponse::default(),
        }
    }

    pub fn intrinsic(mut self) -> Self {
        self.intrinsic = true;
        self
    }
}

/// Cell text used by every test table.
pub fn cell_label(column: usize, row: usize) -> String {
    format!("r{row}c{column}")
}

pub fn header_label(column: usize) -> String {
    format!("Column {column}")
}

pub fn show_probe_table(ui: &mut egui::Ui, probe: &mut TableProbe) {
    let TableProbe {
        rows,
        columns,
        intrinsic,
        watched_column,
        header_width,
        body_width,
        cells_rendered,
        clicked_rows,
        clicked_columns,
        scroll,
        response,
    } = probe;
    let watched_column = *watched_column;
    *header_width = None;
    *body_width = None;
    *cells_rendered = 0;

    let mut table = DataTable::new(TABLE_ID, *columns, *rows)
        .min_column_width(MIN_COLUMN_WIDTH)
        .on_row_clicked(|row| clicked_rows.push(row))
        .on_column_clicked(|column| clicked_columns.push(column))
        .scroll(scroll);
    if *intrinsic {
        table = table.intrinsic_column_widths();
    }

    *response = table.show(
        ui,
        |ui, column| {
            if column == watched_column {
                *header_width = Some(ui.max_rect().width());
            }
            ui.label(header_label(column));
        },
        |ui, column, row| {
            if column == watched_column {
                *body_width = Some(ui.max_rect().width());
            }
            *cells_rendered += 1;
            ui.label(cell_label(column, row));
        },
    );
}

pub fn table_harness(probe: TableProbe) -> Harness<'static, TableProbe> {
    Harness::builder()
        .with_size(HARNESS_SIZE)
        .build_ui_state(show_probe_table, probe)
}

/// Same as [`table_harness`] on a display with `pixels_per_point` physical
/// pixels per point.
pub fn table_harness_at_density(
    table: TableProbe,
    pixels_per_point: f32,
) -> Harness<'static, TableProbe> {
    Harness::builder()
        .with_size(HARNESS_SIZE)
        .with_pixels_per_point(pixels_per_point)
        .build_ui_state(show_probe_table, table)
}

pub fn app_harness() -> Harness<'static, DataTableApp> {
    app_harness_with(AppConfig::default())
}

pub fn app_harness_with(config: AppConfig) -> Harness<'static, DataTableApp> {
    let app = DataTableApp::new(State::with_seed(config, 42));
    Harness::builder()
        .with_size(vec2(1000.0, 700.0))
        .build_eframe(|_| app)
}

fn pointer_button(harness: &mut Harness<'_, impl Sized>, pos: Pos2, pressed: bool) {
    harness.input_mut().events.push(Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    });
}

pub fn move_pointer(harness: &mut Harness<'_, impl Sized>, pos: Pos2) {
    harness.input_mut().events.push(Event::PointerMoved(pos));
    harness.step();
}

/// Moves to `pos` and holds the primary button down there.
pub fn press_at(harness: &mut Harness<'_, impl Sized>, pos: Pos2) {
    move_pointer(harness, pos);
    pointer_button(harness, pos, true);
    harness.step();
}

pub fn release_at(harness: &mut Harness<'_, impl Sized>, pos: Pos2) {
    pointer_button(harness, pos, false);
    harness.step();
}

/// Presses and releases the primary button at `pos`, one frame each.
pub fn click_at(harness: &mut Harness<'_, impl Sized>, pos: Pos2) {
    move_pointer(harness, pos);
    pointer_button(harness, pos, true);
    harness.step();
    pointer_button(harness, pos, false);
    harness.step();
}

/// Drags from `from` by `delta`, spread over `steps` frames.
pub fn drag(harness: &mut Harness<'_, impl Sized>, from: Pos2, delta: Vec2, steps: usize) {
    move_pointer(harness, from);
    pointer_button(harness, from, true);
    harness.step();
    let steps = steps.max(1);
    for step in 1..=steps {
        move_pointer(harness, from + delta * (step as f32 / steps as f32));
    }
    pointer_button(harness, from + delta, false);
    harness.step();
}
