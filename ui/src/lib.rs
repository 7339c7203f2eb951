#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod pages;
pub mod state;
pub mod table;
pub mod utils;
pub mod widgets;

pub use app::DataTableApp;
pub use table::{
    CELL_PADDING, DataTable, Divider, TableResponse, TableScroll, default_column_divider,
    default_item_divider,
};
