//! daygate — day-trading pre-entry checklist engine.
//!
//! Evaluates a market snapshot, a trade direction, a risk plan and a set
//! of user confirmations against a configurable rule set, producing a
//! permit/deny decision with per-check diagnostics, a reward/risk ratio
//! and a position-size recommendation.

pub mod clock;
pub mod config;
pub mod core;
pub mod gate;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
