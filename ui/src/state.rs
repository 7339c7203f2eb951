use datagrid_business::{AppConfig, PlayerStats, Portfolio, PriceTicker, roster, tick_portfolio};
use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub const PORTFOLIO_TAB: usize = 0;
pub const BOX_SCORE_TAB: usize = 1;
pub const TAB_LABELS: [&str; 2] = ["Portfolio", "Box Score"];

/// The main application state.
pub struct State {
    pub config: AppConfig,
    pub dark_theme: bool,
    pub selected_tab: usize,
    pub portfolio: Portfolio,
    pub players: Vec<PlayerStats>,
    /// Last row or column clicked in either table, for display.
    pub last_click: Option<String>,
    ticker: PriceTicker,
    rng: StdRng,
}

impl Default for State {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl State {
    pub fn new(config: AppConfig) -> Self {
        let portfolio = Portfolio::sample().unwrap_or_else(|err| {
            error!("Failed to load the sample portfolio: {err}");
            Portfolio { items: Vec::new() }
        });
        info!("Loaded portfolio with {} items", portfolio.len());

        Self {
            dark_theme: config.dark_theme,
            selected_tab: PORTFOLIO_TAB,
            portfolio,
            players: roster(),
            last_click: None,
            ticker: PriceTicker::new(config.tick_interval),
            rng: StdRng::from_entropy(),
            config,
        }
    }

    /// Same as [`State::new`] but with reproducible price moves.
    pub fn with_seed(config: AppConfig, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            ..Self::new(config)
        }
    }

    /// Moves portfolio prices if a tick is due at `now` seconds.
    /// Returns `true` when the portfolio changed.
    pub fn tick(&mut self, now: f64) -> bool {
        if !self.ticker.due(now) {
            return false;
        }
        self.portfolio = tick_portfolio(&self.portfolio, &mut self.rng);
        true
    }

    pub fn tick_interval(&self) -> std::time::Duration {
        self.ticker.interval()
    }
}
