//! Logging initialization with environment-based formatters.
//!
//! Production gets structured JSON for log aggregation; sandbox gets
//! human-readable ANSI output.

use tracing_subscriber::EnvFilter;

use crate::config::get_environment;

pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let is_production = matches!(get_environment().as_str(), "production" | "prod");

    if is_production {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_ansi(true)
            .init();
    }
}
