//! Health check handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::response::{ApiResponse, HealthResponse, ReadinessResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// GET /api/health/ready
pub async fn ready(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<ReadinessResponse>>) {
    let (status, database) = match &state.database {
        None => (StatusCode::OK, "in-memory"),
        Some(pool) => match pool.health_check().await {
            Ok(()) => (StatusCode::OK, "connected"),
            Err(e) => {
                tracing::warn!(error = %e, "Readiness check failed");
                (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
            }
        },
    };

    let body = ReadinessResponse {
        status: if status.is_success() { "ok" } else { "degraded" }.to_string(),
        database: database.to_string(),
    };
    (status, Json(ApiResponse::ok(body)))
}
