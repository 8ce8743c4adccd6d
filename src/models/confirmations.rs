//! Manually judged market conditions the user asserts before entry.
//!
//! Every selectable field is a proper enum with an explicit `Unselected`
//! variant. A missing selection fails the environment-completeness check;
//! it is never an error and never a magic string.

use serde::{Deserialize, Serialize};

/// Index posture at the open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum MarketPosture {
    #[default]
    Unselected,
    FlatOpen,
    UpOpen,
    DownOpen,
}

/// Broad market momentum since the open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum MarketMomentum {
    #[default]
    Unselected,
    Rising,
    Falling,
    StallingUp,
    StallingDown,
    Sideways,
}

/// Stock-level breakout direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum BreakoutDirection {
    #[default]
    Unselected,
    BreakUp,
    BreakDown,
}

/// Candle-structure read on the working timeframe. `SidewaysNoDirection`
/// is disqualifying on its own, independent of trade direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum CandleStructure {
    #[default]
    Unselected,
    Weakening,
    Supportive,
    SidewaysNoDirection,
}

/// Observed large-order absorption at a price extreme. Which variant
/// disqualifies depends on trade direction (see `gate::ruleset`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ExhaustionSignal {
    #[default]
    None,
    AtHigh,
    AtLow,
}

/// The full set of user confirmations for one evaluation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Confirmations {
    #[serde(default)]
    pub market_posture: MarketPosture,
    #[serde(default)]
    pub market_momentum: MarketMomentum,
    #[serde(default)]
    pub stock_direction: BreakoutDirection,
    #[serde(default)]
    pub candle_structure: CandleStructure,
    #[serde(default)]
    pub exhaustion: ExhaustionSignal,
    #[serde(default)]
    pub key_level_confirmed: bool,
    #[serde(default)]
    pub risk_acknowledged: bool,
    #[serde(default)]
    pub plan_compliant: bool,
    /// Psychological state: true when the user flags themselves as rushed.
    /// The composure check passes only when this is false.
    #[serde(default)]
    pub fomo: bool,
}

impl Confirmations {
    /// True when every must-select environment field has a real selection.
    pub fn environment_complete(&self) -> bool {
        self.market_posture != MarketPosture::Unselected
            && self.market_momentum != MarketMomentum::Unselected
            && self.stock_direction != BreakoutDirection::Unselected
            && self.candle_structure != CandleStructure::Unselected
    }
}
