//! Direction-keyed rule table.
//!
//! Long and short are mirror images of one rule set, not independent code
//! paths. Resolving a `TradeDirection` through this table is the only
//! place the sign conventions live; call sites never re-branch on
//! direction themselves.

use crate::gate::measures;
use crate::models::confirmations::ExhaustionSignal;
use crate::models::market::TradeDirection;

/// Per-direction predicates for trend alignment and exhaustion.
#[derive(Debug, Clone, Copy)]
pub struct DirectionRules {
    pub direction: TradeDirection,
    /// Exhaustion observation that vetoes entry for this direction.
    pub disqualifying_exhaustion: ExhaustionSignal,
    /// The mirror observation; favorable or neutral, never gating.
    pub favorable_exhaustion: ExhaustionSignal,
}

impl DirectionRules {
    pub fn for_direction(direction: TradeDirection) -> Self {
        match direction {
            TradeDirection::Long => Self {
                direction,
                disqualifying_exhaustion: ExhaustionSignal::AtHigh,
                favorable_exhaustion: ExhaustionSignal::AtLow,
            },
            TradeDirection::Short => Self {
                direction,
                disqualifying_exhaustion: ExhaustionSignal::AtLow,
                favorable_exhaustion: ExhaustionSignal::AtHigh,
            },
        }
    }

    /// True when the observed exhaustion does not veto this direction.
    pub fn exhaustion_clear(&self, observed: ExhaustionSignal) -> bool {
        observed != self.disqualifying_exhaustion
    }

    pub fn trend_aligned(&self, current: f64, open: f64, moving_average: f64) -> bool {
        measures::is_trend_aligned(self.direction, current, open, moving_average)
    }
}
