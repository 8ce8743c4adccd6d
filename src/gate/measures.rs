//! Numeric derivations feeding the gate: reward/risk, sizing, gap, trend.

use crate::gate::GateError;
use crate::models::market::TradeDirection;

/// Taiwan brokerage fee rate baked into share sizing.
pub const DEFAULT_FEE_RATE: f64 = 0.001425;

/// Reward distance over risk distance.
///
/// Returns `0.0` when the risk distance is zero. That sentinel then fails
/// the ratio gate instead of surfacing a division error; degenerate stops
/// are valid input, not a fault.
pub fn reward_risk_ratio(current: f64, stop: f64, target: f64) -> f64 {
    let risk = (current - stop).abs();
    if risk > 0.0 {
        (target - current).abs() / risk
    } else {
        0.0
    }
}

/// Maximum whole shares purchasable under the capital cap, fee included:
/// `floor(capital_cap / (current_price * (1 + fee_rate)))`.
///
/// A non-positive price is a caller error and fails fast rather than
/// producing a misleading zero.
pub fn recommended_shares(
    capital_cap: f64,
    current_price: f64,
    fee_rate: f64,
) -> Result<u64, GateError> {
    if current_price <= 0.0 {
        return Err(GateError::NonPositivePrice {
            price: current_price,
        });
    }
    Ok((capital_cap / (current_price * (1.0 + fee_rate))).floor() as u64)
}

/// Opening price's percentage deviation from the prior close.
///
/// A zero prior close makes the gap undefined; that is a caller error,
/// never a silent infinity.
pub fn open_gap_percent(open: f64, last_close: f64) -> Result<f64, GateError> {
    if last_close == 0.0 {
        return Err(GateError::ZeroLastClose);
    }
    Ok((open - last_close) / last_close * 100.0)
}

/// Price positioned on the side of open and moving average implied by the
/// trade direction. Strict inequalities: equality never counts as aligned.
pub fn is_trend_aligned(
    direction: TradeDirection,
    current: f64,
    open: f64,
    moving_average: f64,
) -> bool {
    match direction {
        TradeDirection::Long => current > open && current > moving_average,
        TradeDirection::Short => current < open && current < moving_average,
    }
}
