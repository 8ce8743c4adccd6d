//! Test utilities for API server integration tests

use axum_test::TestServer;
use chrono::NaiveTime;
use daygate::clock::ExchangeClock;
use daygate::config::GateConfig;
use daygate::core::http::{create_router, AppState, HealthStatus};
use daygate::metrics::Metrics;
use daygate::services::quote::{CachedQuoteService, MisQuoteFetcher};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

/// Test helper for API server integration tests
#[allow(dead_code)]
pub struct TestApiServer {
    pub server: TestServer,
    pub metrics: Arc<Metrics>,
}

impl TestApiServer {
    /// Server whose trading window spans the whole day, so evaluation
    /// tests do not depend on when they run. Quote lookups point at an
    /// unroutable upstream and fail fast.
    pub async fn new() -> Self {
        Self::build(false, "http://127.0.0.1:9").await
    }

    /// Server whose trading window is empty: every evaluation fails the
    /// time-window check deterministically.
    pub async fn outside_window() -> Self {
        Self::build(true, "http://127.0.0.1:9").await
    }

    pub async fn with_quote_base_url(base_url: &str) -> Self {
        Self::build(false, base_url).await
    }

    async fn build(empty_window: bool, quote_base_url: &str) -> Self {
        let metrics = Arc::new(Metrics::new().expect("metrics initialization"));

        let mut config = GateConfig::default();
        if empty_window {
            config.window_open = NaiveTime::from_hms_opt(9, 10, 0).unwrap();
            config.window_cutoff = config.window_open;
        } else {
            config.window_open = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
            config.window_cutoff = NaiveTime::from_hms_opt(23, 59, 59).unwrap();
        }

        let clock = ExchangeClock::new(config.timezone);
        let quotes = Arc::new(CachedQuoteService::new(Box::new(
            MisQuoteFetcher::with_base_url(quote_base_url),
        )));

        let state = AppState {
            health: Arc::new(RwLock::new(HealthStatus::default())),
            metrics: metrics.clone(),
            start_time: Arc::new(Instant::now()),
            config: Arc::new(config),
            quotes,
            clock,
        };

        let app = create_router(state);
        let server = TestServer::new(app).expect("start test server");

        Self { server, metrics }
    }
}

/// A request body that passes every check of the standard configuration.
pub fn permitted_request_body() -> serde_json::Value {
    serde_json::json!({
        "snapshot": {
            "ticker": "2330",
            "current_price": 250.0,
            "open_price": 245.0,
            "last_close_price": 246.0,
            "moving_average_price": 248.0,
            "volume_ratio": 1.2
        },
        "direction": "Long",
        "plan": {
            "stop_price": 244.0,
            "target_price": 265.0,
            "capital_cap": 300000.0
        },
        "confirmations": {
            "market_posture": "UpOpen",
            "market_momentum": "Rising",
            "stock_direction": "BreakUp",
            "candle_structure": "Supportive",
            "exhaustion": "None",
            "key_level_confirmed": true,
            "risk_acknowledged": true,
            "plan_compliant": true,
            "fomo": false
        }
    })
}
