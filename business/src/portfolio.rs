//! Stock portfolio shown by the portfolio sample.

use chrono::NaiveDate;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::PortfolioError;

/// Portfolio bundled with the sample app.
pub const SAMPLE_PORTFOLIO_JSON: &str = include_str!("../assets/portfolio.json");

/// Header labels, one per table column.
pub const PORTFOLIO_HEADERS: [&str; 5] = ["Ticker", "TimeLine", "Instrument", "P&L", "Total Value"];

pub const TICKER_COLUMN: usize = 0;
pub const TIMELINE_COLUMN: usize = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub items: Vec<PortfolioItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub ticker: String,
    pub name: String,
    pub price: f32,
    pub instrument: String,
    pub quantity: u32,
    pub purchase_date: String,
    pub purchase_price: u32,
    pub timeline: Vec<f64>,
}

impl Portfolio {
    pub fn from_json(json: &str) -> Result<Self, PortfolioError> {
        let portfolio: Self = serde_json::from_str(json)?;
        info!("Loaded portfolio with {} items", portfolio.items.len());
        Ok(portfolio)
    }

    pub fn sample() -> Result<Self, PortfolioError> {
        Self::from_json(SAMPLE_PORTFOLIO_JSON)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_value(&self) -> f64 {
        self.items.iter().map(PortfolioItem::total_value).sum()
    }
}

impl PortfolioItem {
    /// Current price relative to the purchase price, scaled by quantity.
    pub fn p_and_l(&self) -> f64 {
        if self.purchase_price == 0 {
            return 0.0;
        }
        f64::from(self.price) / f64::from(self.purchase_price) * f64::from(self.quantity)
    }

    pub fn total_value(&self) -> f64 {
        f64::from(self.quantity) * f64::from(self.price)
    }

    pub fn purchase_date(&self) -> Result<NaiveDate, PortfolioError> {
        NaiveDate::parse_from_str(&self.purchase_date, "%Y-%m-%d").map_err(|source| {
            PortfolioError::PurchaseDate {
                ticker: self.ticker.clone(),
                date: self.purchase_date.clone(),
                source,
            }
        })
    }

    /// Hover text for the ticker cell, e.g. `Bought 12 on Apr 12, 2023`.
    ///
    /// An unparsable date is shown as stored.
    pub fn purchase_summary(&self) -> String {
        let date = match self.purchase_date() {
            Ok(date) => date.format("%b %-d, %Y").to_string(),
            Err(err) => {
                warn!("{err}");
                self.purchase_date.clone()
            }
        };
        format!(
            "Bought {} on {date} at ${}",
            self.quantity, self.purchase_price
        )
    }

    /// Text of a plain text column; the ticker and timeline columns are drawn
    /// as widgets and have no text.
    pub fn cell_text(&self, column: usize) -> String {
        match column {
            2 => self.instrument.clone(),
            3 => format_money(self.p_and_l()),
            4 => format_money(self.total_value()),
            _ => String::new(),
        }
    }
}

/// Rounds to `places` decimal places.
pub fn round_places(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// `$` followed by the value rounded to three decimals.
pub fn format_money(value: f64) -> String {
    format!("${}", round_places(value, 3))
}
