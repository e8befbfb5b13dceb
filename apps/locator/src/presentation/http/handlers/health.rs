use crate::presentation::http::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    cache: &'static str,
    version: &'static str,
}

/// An unreachable Redis reports `degraded` with a 200.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let cache_status = match &state.cache {
        None => "disabled",
        Some(cache) => match cache.ping().await {
            Ok(()) => "up",
            Err(e) => {
                tracing::error!("Health check: Redis unreachable: {}", e);
                "down"
            }
        },
    };

    let status = if cache_status == "down" {
        "degraded"
    } else {
        "healthy"
    };

    let response = HealthResponse {
        status,
        cache: cache_status,
        version: env!("CARGO_PKG_VERSION"),
    };

    (StatusCode::OK, Json(response))
}
