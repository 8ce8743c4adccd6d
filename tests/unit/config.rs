//! Unit tests for configuration and presets.

use chrono::NaiveTime;
use daygate::config::{GateConfig, GatePreset};
use daygate::models::evaluation::CheckId;

#[test]
fn standard_defaults_match_the_documented_configuration() {
    let config = GateConfig::default();
    assert_eq!(config.min_reward_risk, 2.0);
    assert_eq!(config.fee_rate, 0.001425);
    assert_eq!(config.capital_cap_range, (300_000.0, 500_000.0));
    assert_eq!(config.capital_cap_step, 50_000.0);
    assert_eq!(config.price_band, None);
    assert_eq!(config.window_open, NaiveTime::from_hms_opt(9, 10, 0).unwrap());
    assert_eq!(
        config.window_cutoff,
        NaiveTime::from_hms_opt(13, 25, 0).unwrap()
    );
    assert_eq!(config.timezone, chrono_tz::Asia::Taipei);

    assert!(config.required.contains(&CheckId::RewardRiskThreshold));
    assert!(config.required.contains(&CheckId::ExhaustionClear));
    assert!(config.required.contains(&CheckId::TimeWindow));
    assert!(!config.required.contains(&CheckId::PriceBand));
    assert!(!config.required.contains(&CheckId::TrendAlignment));
    assert!(!config.required.contains(&CheckId::VolumeSufficient));
}

#[test]
fn baseline_preset_restores_the_earliest_gating_rules() {
    let config = GatePreset::Baseline.config();
    assert_eq!(config.price_band, Some((150.0, 399.0)));
    assert!(config.required.contains(&CheckId::PriceBand));
    assert!(config.required.contains(&CheckId::TrendAlignment));
    assert!(config.required.contains(&CheckId::VolumeSufficient));
    assert_eq!(config.min_reward_risk, 2.0);
}

#[test]
fn exhaustion_reversal_preset_lowers_the_ratio_floor() {
    let config = GatePreset::ExhaustionReversal.config();
    assert_eq!(config.min_reward_risk, 1.5);
    assert_eq!(config.price_band, None);
}

#[test]
fn preset_names_parse_from_kebab_case() {
    assert_eq!("standard".parse(), Ok(GatePreset::Standard));
    assert_eq!("baseline".parse(), Ok(GatePreset::Baseline));
    assert_eq!(
        "exhaustion-reversal".parse(),
        Ok(GatePreset::ExhaustionReversal)
    );
    assert!("aggressive".parse::<GatePreset>().is_err());
}

#[test]
fn capital_cap_clamps_into_range_on_the_step_grid() {
    let config = GateConfig::default();
    assert_eq!(config.clamp_capital_cap(250_000.0), 300_000.0);
    assert_eq!(config.clamp_capital_cap(300_000.0), 300_000.0);
    assert_eq!(config.clamp_capital_cap(330_000.0), 300_000.0);
    assert_eq!(config.clamp_capital_cap(350_000.0), 350_000.0);
    assert_eq!(config.clamp_capital_cap(460_000.0), 450_000.0);
    assert_eq!(config.clamp_capital_cap(500_000.0), 500_000.0);
    assert_eq!(config.clamp_capital_cap(700_000.0), 500_000.0);
}

#[test]
fn environment_overrides_take_effect() {
    std::env::set_var("DAYGATE_PRESET", "exhaustion-reversal");
    std::env::set_var("DAYGATE_MIN_REWARD_RISK", "1.8");
    std::env::set_var("DAYGATE_WINDOW_OPEN", "09:30");

    let config = GateConfig::from_env();
    assert_eq!(config.min_reward_risk, 1.8);
    assert_eq!(config.window_open, NaiveTime::from_hms_opt(9, 30, 0).unwrap());

    std::env::remove_var("DAYGATE_PRESET");
    std::env::remove_var("DAYGATE_MIN_REWARD_RISK");
    std::env::remove_var("DAYGATE_WINDOW_OPEN");
}
