//! Exchange clock collaborator.
//!
//! The engine consumes only the derived "within trading window" boolean;
//! tests inject fixed times instead of reading the wall clock.

use chrono::{NaiveTime, Utc};
use chrono_tz::Tz;

/// Half-open session window `[open, cutoff)` in exchange-local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradingWindow {
    pub open: NaiveTime,
    pub cutoff: NaiveTime,
}

impl TradingWindow {
    pub fn new(open: NaiveTime, cutoff: NaiveTime) -> Self {
        Self { open, cutoff }
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        time >= self.open && time < self.cutoff
    }
}

/// Wall clock localized to a named exchange timezone.
#[derive(Debug, Clone, Copy)]
pub struct ExchangeClock {
    tz: Tz,
}

impl ExchangeClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Current time of day at the exchange.
    pub fn now_local(&self) -> NaiveTime {
        Utc::now().with_timezone(&self.tz).time()
    }

    pub fn within(&self, window: &TradingWindow) -> bool {
        window.contains(self.now_local())
    }
}
