mod bar_chart;
mod tab_row;
mod theme_switch;

pub use bar_chart::bar_chart;
pub use tab_row::{indicator_target, tab_row};
pub use theme_switch::{theme_switch, visuals_for};
