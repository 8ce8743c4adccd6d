//! Engine configuration.
//!
//! Every threshold that varied across the checklist's history lives here,
//! so the historical variants become presets of one engine instead of
//! forked rule code. Binaries load overrides from `DAYGATE_*` environment
//! variables (dotenv is read at process start).

use std::collections::BTreeSet;
use std::env;

use chrono::NaiveTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::models::evaluation::CheckId;
use crate::gate::measures::DEFAULT_FEE_RATE;

/// Deployment environment, used by logging to pick a formatter.
pub fn get_environment() -> String {
    env::var("DAYGATE_ENV")
        .or_else(|_| env::var("ENVIRONMENT"))
        .unwrap_or_else(|_| "sandbox".to_string())
}

/// Named rule-set presets generalizing the observed variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GatePreset {
    /// Documented default: confirmations, environment, ratio >= 2.0 and
    /// exhaustion gate; price band, volume and trend are informational.
    Standard,
    /// The earliest variant: price band 150-399, trend and volume gate too.
    Baseline,
    /// Reversal entries against an exhausted move; ratio floor 1.5.
    ExhaustionReversal,
}

impl GatePreset {
    pub fn config(self) -> GateConfig {
        let mut config = GateConfig::standard();
        match self {
            GatePreset::Standard => {}
            GatePreset::Baseline => {
                config.price_band = Some((150.0, 399.0));
                config.required.insert(CheckId::PriceBand);
                config.required.insert(CheckId::TrendAlignment);
                config.required.insert(CheckId::VolumeSufficient);
            }
            GatePreset::ExhaustionReversal => {
                config.min_reward_risk = 1.5;
            }
        }
        config
    }
}

impl std::str::FromStr for GatePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(GatePreset::Standard),
            "baseline" => Ok(GatePreset::Baseline),
            "exhaustion-reversal" => Ok(GatePreset::ExhaustionReversal),
            other => Err(format!("unknown gate preset: {other}")),
        }
    }
}

/// Thresholds, trading window and the required-check subset for one
/// evaluator instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateConfig {
    pub min_reward_risk: f64,
    pub fee_rate: f64,
    pub capital_cap_range: (f64, f64),
    pub capital_cap_step: f64,
    /// `Some((min, max))` gates/annotates on price; `None` always passes.
    pub price_band: Option<(f64, f64)>,
    pub min_volume_ratio: f64,
    pub window_open: NaiveTime,
    pub window_cutoff: NaiveTime,
    pub timezone: Tz,
    /// Checks that must pass for entry. Everything else is display-only.
    pub required: BTreeSet<CheckId>,
}

impl GateConfig {
    pub fn standard() -> Self {
        let required = BTreeSet::from([
            CheckId::TimeWindow,
            CheckId::EnvironmentSelected,
            CheckId::KeyLevelConfirmed,
            CheckId::RiskAcknowledged,
            CheckId::PlanCompliant,
            CheckId::Composure,
            CheckId::RewardRiskThreshold,
            CheckId::ExhaustionClear,
            CheckId::StructureDirectional,
        ]);
        Self {
            min_reward_risk: 2.0,
            fee_rate: DEFAULT_FEE_RATE,
            capital_cap_range: (300_000.0, 500_000.0),
            capital_cap_step: 50_000.0,
            price_band: None,
            min_volume_ratio: 1.0,
            window_open: NaiveTime::from_hms_opt(9, 10, 0).expect("valid window open"),
            window_cutoff: NaiveTime::from_hms_opt(13, 25, 0).expect("valid window cutoff"),
            timezone: chrono_tz::Asia::Taipei,
            required,
        }
    }

    /// Build from the environment: `DAYGATE_PRESET` selects a preset,
    /// then individual `DAYGATE_*` variables override single knobs.
    pub fn from_env() -> Self {
        let preset: GatePreset = env::var("DAYGATE_PRESET")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(GatePreset::Standard);
        let mut config = preset.config();

        if let Some(min) = env_parse::<f64>("DAYGATE_MIN_REWARD_RISK") {
            config.min_reward_risk = min;
        }
        if let Some(ratio) = env_parse::<f64>("DAYGATE_MIN_VOLUME_RATIO") {
            config.min_volume_ratio = ratio;
        }
        if let Some(open) = env_time("DAYGATE_WINDOW_OPEN") {
            config.window_open = open;
        }
        if let Some(cutoff) = env_time("DAYGATE_WINDOW_CUTOFF") {
            config.window_cutoff = cutoff;
        }
        if let Some(tz) = env_parse::<Tz>("DAYGATE_TIMEZONE") {
            config.timezone = tz;
        }
        config
    }

    /// Snap a requested capital cap into the configured range on the step
    /// grid, mirroring the discrete selector of the checklist UI.
    pub fn clamp_capital_cap(&self, requested: f64) -> f64 {
        let (min, max) = self.capital_cap_range;
        let clamped = requested.clamp(min, max);
        if self.capital_cap_step > 0.0 {
            min + ((clamped - min) / self.capital_cap_step).floor() * self.capital_cap_step
        } else {
            clamped
        }
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self::standard()
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

fn env_time(key: &str) -> Option<NaiveTime> {
    env::var(key)
        .ok()
        .and_then(|v| NaiveTime::parse_from_str(&v, "%H:%M").ok())
}
