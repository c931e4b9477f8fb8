//! Metrics collection for wellness-service.
//!
//! Prometheus counters for plan requests and external provider calls,
//! exposed at `/metrics`.

use prometheus::{IntCounterVec, Opts, Registry};
use std::sync::OnceLock;

pub static PROMETHEUS_REGISTRY: OnceLock<Registry> = OnceLock::new();
pub static PLAN_REQUESTS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();
pub static PROVIDER_CALLS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// Initialize metrics collection. Called once from main; recording is a no-op
/// when uninitialized so tests do not need it.
pub fn init_metrics() {
    let registry = Registry::new();

    let plan_requests = IntCounterVec::new(
        Opts::new(
            "plan_requests_total",
            "Total diet plan requests by outcome",
        ),
        &["status"],
    )
    .expect("Failed to create plan_requests_total metric");

    let provider_calls = IntCounterVec::new(
        Opts::new(
            "provider_calls_total",
            "Total external provider calls by provider and status",
        ),
        &["provider", "status"],
    )
    .expect("Failed to create provider_calls_total metric");

    registry
        .register(Box::new(plan_requests.clone()))
        .expect("Failed to register plan_requests_total");
    registry
        .register(Box::new(provider_calls.clone()))
        .expect("Failed to register provider_calls_total");

    PROMETHEUS_REGISTRY
        .set(registry)
        .expect("Failed to set prometheus registry");
    PLAN_REQUESTS_TOTAL
        .set(plan_requests)
        .expect("Failed to set plan_requests_total");
    PROVIDER_CALLS_TOTAL
        .set(provider_calls)
        .expect("Failed to set provider_calls_total");
}

/// Get metrics output in Prometheus text format.
pub fn get_metrics() -> String {
    let Some(registry) = PROMETHEUS_REGISTRY.get() else {
        return "# Metrics recorder not initialized\n".to_string();
    };

    use prometheus::Encoder;
    let encoder = prometheus::TextEncoder::new();
    let mut buffer = Vec::new();
    encoder.encode(&registry.gather(), &mut buffer).ok();
    String::from_utf8(buffer).unwrap_or_default()
}

/// Record the outcome of a plan request.
pub fn record_plan_request(status: &str) {
    if let Some(counter) = PLAN_REQUESTS_TOTAL.get() {
        counter.with_label_values(&[status]).inc();
    }
}

/// Record an external provider call.
pub fn record_provider_call(provider: &str, status: &str) {
    if let Some(counter) = PROVIDER_CALLS_TOTAL.get() {
        counter.with_label_values(&[provider, status]).inc();
    }
}
