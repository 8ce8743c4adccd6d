//! The entry-gate evaluator.
//!
//! One stateless transformation from (snapshot, direction, plan,
//! confirmations, configuration, window flag) to metrics, per-check
//! results, the permit/deny decision and ordered failure reasons.

use chrono::Utc;

use crate::config::GateConfig;
use crate::gate::measures;
use crate::gate::ruleset::DirectionRules;
use crate::gate::GateError;
use crate::models::confirmations::{CandleStructure, Confirmations};
use crate::models::evaluation::{CheckId, CheckResult, EvaluationResult, GapBand};
use crate::models::market::{MarketSnapshot, RiskPlan, TradeDirection};

pub struct GateEngine;

impl GateEngine {
    /// Evaluate one candidate entry.
    ///
    /// `within_window` is the clock collaborator's verdict; the engine
    /// never reads the wall clock itself. Fails fast on inputs the
    /// metrics cannot be derived from (non-positive price, zero prior
    /// close); every other shortfall is an ordinary failing check.
    pub fn evaluate(
        snapshot: &MarketSnapshot,
        direction: TradeDirection,
        plan: &RiskPlan,
        confirmations: &Confirmations,
        config: &GateConfig,
        within_window: bool,
    ) -> Result<EvaluationResult, GateError> {
        let rules = DirectionRules::for_direction(direction);

        let reward_risk_ratio = measures::reward_risk_ratio(
            snapshot.current_price,
            plan.stop_price,
            plan.target_price,
        );
        let capital_cap = config.clamp_capital_cap(plan.capital_cap);
        let recommended_shares =
            measures::recommended_shares(capital_cap, snapshot.current_price, config.fee_rate)?;
        let open_gap_percent =
            measures::open_gap_percent(snapshot.open_price, snapshot.last_close_price)?;
        let gap_band = GapBand::classify(open_gap_percent);
        let trend_aligned = rules.trend_aligned(
            snapshot.current_price,
            snapshot.open_price,
            snapshot.moving_average_price,
        );

        let check = |id: CheckId, passed: bool| CheckResult {
            id,
            passed,
            required: config.required.contains(&id),
        };

        let checks = vec![
            check(CheckId::TimeWindow, within_window),
            check(
                CheckId::PriceBand,
                match config.price_band {
                    Some((min, max)) => {
                        snapshot.current_price >= min && snapshot.current_price <= max
                    }
                    None => true,
                },
            ),
            check(CheckId::TrendAlignment, trend_aligned),
            check(
                CheckId::VolumeSufficient,
                snapshot.volume_ratio >= config.min_volume_ratio,
            ),
            check(
                CheckId::EnvironmentSelected,
                confirmations.environment_complete(),
            ),
            check(CheckId::KeyLevelConfirmed, confirmations.key_level_confirmed),
            check(CheckId::RiskAcknowledged, confirmations.risk_acknowledged),
            check(CheckId::PlanCompliant, confirmations.plan_compliant),
            check(CheckId::Composure, !confirmations.fomo),
            check(
                CheckId::RewardRiskThreshold,
                reward_risk_ratio >= config.min_reward_risk,
            ),
            check(
                CheckId::ExhaustionClear,
                rules.exhaustion_clear(confirmations.exhaustion),
            ),
            check(
                CheckId::StructureDirectional,
                confirmations.candle_structure != CandleStructure::SidewaysNoDirection,
            ),
        ];

        let entry_permitted = checks.iter().filter(|c| c.required).all(|c| c.passed);

        let mut failing: Vec<CheckId> = checks
            .iter()
            .filter(|c| c.required && !c.passed)
            .map(|c| c.id)
            .collect();
        failing.sort_by_key(|id| id.reason_priority());
        let failure_reasons = failing
            .into_iter()
            .map(|id| id.failure_reason().to_string())
            .collect();

        Ok(EvaluationResult {
            ticker: snapshot.ticker.clone(),
            direction,
            price: snapshot.current_price,
            checks,
            reward_risk_ratio,
            recommended_shares,
            recommended_lots: recommended_shares / 1000,
            open_gap_percent,
            gap_band,
            trend_aligned,
            entry_permitted,
            failure_reasons,
            evaluated_at: Utc::now(),
        })
    }
}
