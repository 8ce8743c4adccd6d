//! Market-facing data models: snapshot, quote, direction and risk plan.

use serde::{Deserialize, Serialize};

/// Side of the candidate trade. Every direction-dependent predicate is
/// resolved through `gate::ruleset::DirectionRules`, never branched inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum TradeDirection {
    Long,
    Short,
}

impl TradeDirection {
    pub fn opposite(self) -> Self {
        match self {
            TradeDirection::Long => TradeDirection::Short,
            TradeDirection::Short => TradeDirection::Long,
        }
    }
}

/// Current market facts for one ticker at one instant. Prices are TWD.
///
/// All prices must be non-negative; `last_close_price` must be nonzero
/// before it is used as a gap denominator (the engine fails fast otherwise).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub ticker: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    pub current_price: f64,
    pub open_price: f64,
    pub last_close_price: f64,
    pub moving_average_price: f64,
    /// Estimated volume relative to the prior session (1.0 = parity).
    #[serde(default = "default_volume_ratio")]
    pub volume_ratio: f64,
}

fn default_volume_ratio() -> f64 {
    1.0
}

impl MarketSnapshot {
    pub fn new(
        ticker: impl Into<String>,
        current_price: f64,
        open_price: f64,
        last_close_price: f64,
        moving_average_price: f64,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            name: None,
            current_price,
            open_price,
            last_close_price,
            moving_average_price,
            volume_ratio: default_volume_ratio(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_volume_ratio(mut self, volume_ratio: f64) -> Self {
        self.volume_ratio = volume_ratio;
        self
    }

    /// Fold a fetched quote into this snapshot, keeping the locally supplied
    /// moving average and volume ratio.
    pub fn apply_quote(&mut self, quote: &Quote) {
        self.name = Some(quote.name.clone());
        self.current_price = quote.current;
        self.open_price = quote.open;
        self.last_close_price = quote.last_close;
    }
}

/// User-declared risk parameters for the candidate trade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskPlan {
    pub stop_price: f64,
    pub target_price: f64,
    /// Maximum notional capital for the single daily trade, TWD. Snapped
    /// into the configured range before sizing.
    pub capital_cap: f64,
}

impl RiskPlan {
    pub fn new(stop_price: f64, target_price: f64, capital_cap: f64) -> Self {
        Self {
            stop_price,
            target_price,
            capital_cap,
        }
    }

    pub fn risk_distance(&self, current_price: f64) -> f64 {
        (current_price - self.stop_price).abs()
    }

    pub fn reward_distance(&self, current_price: f64) -> f64 {
        (self.target_price - current_price).abs()
    }
}

/// Resolved quote as returned by the quote-fetch collaborator. The engine
/// never observes partial quotes; a fetch either yields all four fields or
/// fails as a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub name: String,
    pub last_close: f64,
    pub open: f64,
    pub current: f64,
}
