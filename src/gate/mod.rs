//! Entry-gate evaluation: measures, direction rules and the engine.

pub mod engine;
pub mod measures;
pub mod ruleset;

pub use engine::GateEngine;
pub use ruleset::DirectionRules;

use thiserror::Error;

/// Caller/input errors the gate fails fast on. Degenerate-but-valid
/// inputs (a zero risk distance) are handled by policy instead and never
/// reach this type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GateError {
    #[error("current price must be positive for share sizing, got {price}")]
    NonPositivePrice { price: f64 },
    #[error("last close price is zero, opening gap is undefined")]
    ZeroLastClose,
}
