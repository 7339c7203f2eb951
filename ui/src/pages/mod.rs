//! The sample screens, one per tab:
//! - `portfolio_page`: live prices with timeline charts
//! - `box_score_page`: a static basketball box score

mod box_score_page;
mod portfolio_page;

pub use box_score_page::{BOX_SCORE_TABLE_ID, box_score_page};
pub use portfolio_page::{PORTFOLIO_TABLE_ID, portfolio_page};
