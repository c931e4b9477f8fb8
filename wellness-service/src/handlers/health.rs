use crate::services::get_metrics;
use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "wellness-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness probe: verifies all providers are configured.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let checks = tokio::join!(
        state.embedder.health_check(),
        state.index.health_check(),
        state.generator.health_check(),
    );

    match checks {
        (Ok(()), Ok(()), Ok(())) => StatusCode::OK,
        _ => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Prometheus metrics endpoint.
pub async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}
