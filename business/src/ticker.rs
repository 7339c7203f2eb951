//! Fake price feed that keeps the portfolio sample moving.

use std::time::Duration;

use rand::Rng;

use crate::{Portfolio, PortfolioItem, portfolio::round_places};

/// Probability that an item moves on a given tick.
pub const PRICE_MOVE_CHANCE: f64 = 0.1;

/// Largest relative move of a cheap (< 10) stock, in percent.
pub const PERCENTAGE_CHANGE: f64 = 5.0;

/// Random numbers consumed by one tick of one item, each in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickDraws {
    pub chance: f64,
    pub magnitude: f64,
    pub direction: f64,
    pub replacement: f64,
}

impl TickDraws {
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        Self {
            chance: rng.r#gen(),
            magnitude: rng.r#gen(),
            direction: rng.r#gen(),
            replacement: rng.r#gen(),
        }
    }
}

/// Moves one item's price.
///
/// Cheap stocks drift by up to `PERCENTAGE_CHANGE` percent; the rest jump to
/// a new price in `[10, 50)`. The new price, rounded to cents, is appended to
/// the timeline and the oldest point is dropped.
pub fn tick_item(item: &PortfolioItem, draws: TickDraws) -> PortfolioItem {
    if draws.chance >= PRICE_MOVE_CHANCE {
        return item.clone();
    }
    let change = draws.magnitude * PERCENTAGE_CHANGE / 100.0;
    let factor = if draws.direction > 0.5 {
        1.0 - change
    } else {
        1.0 + change
    };
    let price = f64::from(item.price);
    let new_price = if price < 10.0 {
        price * factor
    } else {
        draws.replacement * 40.0 + 10.0
    };
    let new_price = round_places(new_price, 2);

    let mut timeline: Vec<f64> = item.timeline.iter().skip(1).copied().collect();
    timeline.push(new_price);

    PortfolioItem {
        price: new_price as f32,
        timeline,
        ..item.clone()
    }
}

pub fn tick_portfolio<R: Rng>(portfolio: &Portfolio, rng: &mut R) -> Portfolio {
    Portfolio {
        items: portfolio
            .items
            .iter()
            .map(|item| tick_item(item, TickDraws::sample(rng)))
            .collect(),
    }
}

/// Decides when the next tick is due, from the frame clock in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceTicker {
    interval: Duration,
    last_tick: Option<f64>,
}

impl PriceTicker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_tick: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// `true` at most once per interval. The first call only starts the clock.
    pub fn due(&mut self, now: f64) -> bool {
        match self.last_tick {
            None => {
                self.last_tick = Some(now);
                false
            }
            Some(last) if now - last >= self.interval.as_secs_f64() => {
                self.last_tick = Some(now);
                true
            }
            Some(_) => false,
        }
    }
}
