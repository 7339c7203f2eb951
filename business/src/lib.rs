//! Sample data and non-UI logic behind the data table demo app.

pub mod box_score;
pub mod chart;
mod config;
mod error;
pub mod portfolio;
pub mod ticker;

pub use box_score::{BOX_SCORE_HEADERS, PlayerStats, roster};
pub use config::AppConfig;
pub use error::PortfolioError;
pub use portfolio::{PORTFOLIO_HEADERS, Portfolio, PortfolioItem};
pub use ticker::{PriceTicker, tick_portfolio};
