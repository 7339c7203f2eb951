use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("failed to decode portfolio: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid purchase date {date:?} for {ticker}: {source}")]
    PurchaseDate {
        ticker: String,
        date: String,
        source: chrono::ParseError,
    },
}
