//! Shared data models spanning the engine layers.

pub mod confirmations;
pub mod evaluation;
pub mod market;

pub use confirmations::{
    BreakoutDirection, CandleStructure, Confirmations, ExhaustionSignal, MarketMomentum,
    MarketPosture,
};
pub use evaluation::{CheckId, CheckResult, EvaluationResult, GapBand};
pub use market::{MarketSnapshot, Quote, RiskPlan, TradeDirection};
