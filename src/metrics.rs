//! Prometheus metrics shared by the HTTP surface and the evaluator host.

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntGauge, Registry, TextEncoder,
};

pub struct Metrics {
    registry: Registry,
    pub http_requests_total: IntCounter,
    pub http_requests_in_flight: IntGauge,
    pub http_request_duration_seconds: Histogram,
    pub evaluations_total: IntCounter,
    pub entries_permitted_total: IntCounter,
    pub quote_fetch_failures_total: IntCounter,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total =
            IntCounter::new("http_requests_total", "Total HTTP requests received")?;
        let http_requests_in_flight =
            IntGauge::new("http_requests_in_flight", "HTTP requests currently in flight")?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        ))?;
        let evaluations_total =
            IntCounter::new("evaluations_total", "Entry-gate evaluations performed")?;
        let entries_permitted_total = IntCounter::new(
            "entries_permitted_total",
            "Evaluations that permitted entry",
        )?;
        let quote_fetch_failures_total = IntCounter::new(
            "quote_fetch_failures_total",
            "Quote lookups that failed with no cached fallback",
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(evaluations_total.clone()))?;
        registry.register(Box::new(entries_permitted_total.clone()))?;
        registry.register(Box::new(quote_fetch_failures_total.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_requests_in_flight,
            http_request_duration_seconds,
            evaluations_total,
            entries_permitted_total,
            quote_fetch_failures_total,
        })
    }

    /// Text exposition of every registered metric.
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
