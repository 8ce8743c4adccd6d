//! Evaluation output surface handed to the display layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::market::TradeDirection;

/// Stable identity of one gating check. The declaration order here is the
/// order checks appear in `EvaluationResult::checks`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "PascalCase")]
pub enum CheckId {
    TimeWindow,
    PriceBand,
    TrendAlignment,
    VolumeSufficient,
    EnvironmentSelected,
    KeyLevelConfirmed,
    RiskAcknowledged,
    PlanCompliant,
    Composure,
    RewardRiskThreshold,
    ExhaustionClear,
    StructureDirectional,
}

impl CheckId {
    pub const ALL: [CheckId; 12] = [
        CheckId::TimeWindow,
        CheckId::PriceBand,
        CheckId::TrendAlignment,
        CheckId::VolumeSufficient,
        CheckId::EnvironmentSelected,
        CheckId::KeyLevelConfirmed,
        CheckId::RiskAcknowledged,
        CheckId::PlanCompliant,
        CheckId::Composure,
        CheckId::RewardRiskThreshold,
        CheckId::ExhaustionClear,
        CheckId::StructureDirectional,
    ];

    /// Human-readable reason emitted when this check is required and fails.
    pub fn failure_reason(self) -> &'static str {
        match self {
            CheckId::TimeWindow => "outside the trading window",
            CheckId::PriceBand => "price outside the configured band",
            CheckId::TrendAlignment => "price not aligned with open and moving average",
            CheckId::VolumeSufficient => "volume ratio below minimum",
            CheckId::EnvironmentSelected => "environment fields incomplete",
            CheckId::KeyLevelConfirmed => "key-level breakout not confirmed",
            CheckId::RiskAcknowledged => "risk not acknowledged",
            CheckId::PlanCompliant => "trade-plan compliance not confirmed",
            CheckId::Composure => "FOMO state flagged",
            CheckId::RewardRiskThreshold => "reward/risk ratio below threshold",
            CheckId::ExhaustionClear => "disqualifying exhaustion signal present",
            CheckId::StructureDirectional => "sideways structure, no direction",
        }
    }

    /// Fixed priority used to order `failure_reasons`. Lower sorts first.
    pub fn reason_priority(self) -> u8 {
        match self {
            CheckId::TimeWindow => 0,
            CheckId::ExhaustionClear => 1,
            CheckId::EnvironmentSelected => 2,
            CheckId::RewardRiskThreshold => 3,
            CheckId::StructureDirectional => 4,
            CheckId::KeyLevelConfirmed => 5,
            CheckId::PlanCompliant => 6,
            CheckId::RiskAcknowledged => 7,
            CheckId::Composure => 8,
            CheckId::PriceBand => 9,
            CheckId::VolumeSufficient => 10,
            CheckId::TrendAlignment => 11,
        }
    }
}

/// Outcome of one check in one evaluation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CheckResult {
    pub id: CheckId,
    pub passed: bool,
    /// Whether the active configuration gates on this check. Non-required
    /// checks are surfaced for display only.
    pub required: bool,
}

/// Opening-gap strength band. Lower edges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum GapBand {
    Normal,
    Strong,
    ExtremelyStrong,
}

impl GapBand {
    pub fn classify(gap_percent: f64) -> Self {
        if gap_percent >= 5.0 {
            GapBand::ExtremelyStrong
        } else if gap_percent >= 3.0 {
            GapBand::Strong
        } else {
            GapBand::Normal
        }
    }
}

/// Full result of one entry-gate evaluation. This structure plus the
/// metric fields is the entire handoff to the display collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub ticker: String,
    pub direction: TradeDirection,
    pub price: f64,
    pub checks: Vec<CheckResult>,
    pub reward_risk_ratio: f64,
    pub recommended_shares: u64,
    pub recommended_lots: u64,
    pub open_gap_percent: f64,
    pub gap_band: GapBand,
    pub trend_aligned: bool,
    pub entry_permitted: bool,
    pub failure_reasons: Vec<String>,
    pub evaluated_at: DateTime<Utc>,
}

impl EvaluationResult {
    pub fn check(&self, id: CheckId) -> Option<&CheckResult> {
        self.checks.iter().find(|c| c.id == id)
    }
}
