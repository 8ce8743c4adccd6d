//! HTTP endpoint server using Axum.
//!
//! The display layer talks to the engine exclusively through this surface:
//! one evaluation per request, no ordering between concurrent requests.

use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

use crate::clock::{ExchangeClock, TradingWindow};
use crate::config::GateConfig;
use crate::gate::GateEngine;
use crate::metrics::Metrics;
use crate::models::confirmations::Confirmations;
use crate::models::evaluation::EvaluationResult;
use crate::models::market::{MarketSnapshot, Quote, RiskPlan, TradeDirection};
use crate::services::quote::{CachedQuoteService, MisQuoteFetcher};

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub config: Arc<GateConfig>,
    pub quotes: Arc<CachedQuoteService>,
    pub clock: ExchangeClock,
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": "daygate-entry-gate"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();

    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();

    state.metrics.http_requests_in_flight.dec();
    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub snapshot: MarketSnapshot,
    pub direction: TradeDirection,
    pub plan: RiskPlan,
    #[serde(default)]
    pub confirmations: Confirmations,
}

/// Run the entry gate for one candidate trade.
async fn evaluate(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<EvaluationResult>, (StatusCode, Json<Value>)> {
    let window = TradingWindow::new(state.config.window_open, state.config.window_cutoff);
    let within_window = state.clock.within(&window);

    let result = GateEngine::evaluate(
        &request.snapshot,
        request.direction,
        &request.plan,
        &request.confirmations,
        &state.config,
        within_window,
    )
    .map_err(|e| {
        error!(error = %e, ticker = %request.snapshot.ticker, "evaluation rejected");
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": e.to_string() })),
        )
    })?;

    state.metrics.evaluations_total.inc();
    if result.entry_permitted {
        state.metrics.entries_permitted_total.inc();
    }
    info!(
        ticker = %result.ticker,
        permitted = result.entry_permitted,
        reward_risk = result.reward_risk_ratio,
        "entry gate evaluated"
    );

    Ok(Json(result))
}

/// Fetch the latest quote for a ticker, served from cache when the
/// upstream is unavailable.
async fn get_quote(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
) -> Result<Json<Quote>, (StatusCode, Json<Value>)> {
    match state.quotes.latest(&ticker).await {
        Ok(quote) => Ok(Json(quote)),
        Err(e) => {
            state.metrics.quote_fetch_failures_total.inc();
            error!(ticker = %ticker, error = %e, "quote fetch failed");
            Err((
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": e.to_string() })),
            ))
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/evaluate", post(evaluate))
        .route("/api/quote/{ticker}", get(get_quote))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let start_time = Arc::new(Instant::now());
    let config = Arc::new(GateConfig::from_env());
    let clock = ExchangeClock::new(config.timezone);
    let quotes = Arc::new(CachedQuoteService::new(Box::new(MisQuoteFetcher::new())));

    let state = AppState {
        health: Arc::new(RwLock::new(HealthStatus::default())),
        metrics,
        start_time,
        config,
        quotes,
        clock,
    };
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
