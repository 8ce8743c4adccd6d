use daygate::config::GateConfig;
use daygate::gate::GateEngine;
use daygate::models::confirmations::{
    BreakoutDirection, CandleStructure, Confirmations, ExhaustionSignal, MarketMomentum,
    MarketPosture,
};
use daygate::models::evaluation::EvaluationResult;
use daygate::models::market::{MarketSnapshot, RiskPlan, TradeDirection};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = GateConfig::default();

    let confirmations = Confirmations {
        market_posture: MarketPosture::UpOpen,
        market_momentum: MarketMomentum::Rising,
        stock_direction: BreakoutDirection::BreakUp,
        candle_structure: CandleStructure::Supportive,
        exhaustion: ExhaustionSignal::None,
        key_level_confirmed: true,
        risk_acknowledged: true,
        plan_compliant: true,
        fomo: false,
    };

    let snapshot = MarketSnapshot::new("2330", 250.0, 245.0, 246.0, 248.0)
        .with_name("TSMC")
        .with_volume_ratio(1.2);

    let plan = RiskPlan::new(244.0, 265.0, 300_000.0);
    let result = GateEngine::evaluate(
        &snapshot,
        TradeDirection::Long,
        &plan,
        &confirmations,
        &config,
        true,
    )?;
    println!("Scenario 1 (long, wide target):");
    print_result(&result);
    println!();

    let tight_plan = RiskPlan::new(244.0, 252.0, 300_000.0);
    let result = GateEngine::evaluate(
        &snapshot,
        TradeDirection::Long,
        &tight_plan,
        &confirmations,
        &config,
        true,
    )?;
    println!("Scenario 2 (long, target too close):");
    print_result(&result);
    println!();

    let short_snapshot = MarketSnapshot::new("2603", 200.0, 204.0, 205.0, 203.0)
        .with_name("Evergreen")
        .with_volume_ratio(1.5);
    let short_plan = RiskPlan::new(203.0, 190.0, 300_000.0);
    let short_confirmations = Confirmations {
        exhaustion: ExhaustionSignal::AtLow,
        ..confirmations
    };
    let result = GateEngine::evaluate(
        &short_snapshot,
        TradeDirection::Short,
        &short_plan,
        &short_confirmations,
        &config,
        true,
    )?;
    println!("Scenario 3 (short into exhaustion at the low):");
    print_result(&result);

    Ok(())
}

fn print_result(result: &EvaluationResult) {
    println!("  Ticker: {}", result.ticker);
    println!("  Direction: {:?}", result.direction);
    println!("  Reward/Risk: {:.2}", result.reward_risk_ratio);
    println!(
        "  Suggested size: {} shares ({} lots)",
        result.recommended_shares, result.recommended_lots
    );
    println!(
        "  Opening gap: {:.2}% ({:?})",
        result.open_gap_percent, result.gap_band
    );
    for check in &result.checks {
        let marker = if check.passed { "PASS" } else { "FAIL" };
        let gating = if check.required { "" } else { " (info)" };
        println!("    [{}] {:?}{}", marker, check.id, gating);
    }
    if result.entry_permitted {
        println!("  Entry permitted.");
    } else {
        println!("  Entry denied:");
        for (i, reason) in result.failure_reasons.iter().enumerate() {
            println!("    {}. {}", i + 1, reason);
        }
    }
}
