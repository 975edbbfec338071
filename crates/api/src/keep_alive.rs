use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use resume_observability::{BotMetrics, MetricsSnapshot};
use serde::Serialize;
use tower_http::trace::TraceLayer;

pub const ALIVE_BODY: &str = "I am alive!";

#[derive(Clone)]
pub struct KeepAliveState {
    pub metrics: Arc<BotMetrics>,
    pub generation_enabled: bool,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp_utc: String,
    generation_enabled: bool,
    metrics: MetricsSnapshot,
}

/// Uptime-probe endpoints. Shares nothing with the bot loop beyond the
/// read-only metrics handle.
pub fn build_keep_alive_router(state: KeepAliveState) -> Router {
    Router::new()
        .route("/", get(alive))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn alive() -> &'static str {
    ALIVE_BODY
}

async fn health(State(state): State<KeepAliveState>) -> impl IntoResponse {
    let payload = HealthResponse {
        status: "ok",
        timestamp_utc: chrono::Utc::now().to_rfc3339(),
        generation_enabled: state.generation_enabled,
        metrics: state.metrics.snapshot(),
    };
    (StatusCode::OK, Json(payload))
}
