use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

/// Health/liveness probe response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Readiness probe response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadyResponse {
    pub ready: bool,
}

/// GET /healthz
///
/// Unconditional health check: answers 200 as long as the process can
/// execute request handlers.
pub async fn healthz() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// GET /livez
///
/// Liveness probe, wired to the orchestrator's restart decision. Same
/// contract as /healthz.
pub async fn livez() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// GET /readyz
///
/// Readiness probe, wired to the orchestrator's routing decision.
/// Constant-true: no downstream dependencies are checked.
pub async fn readyz() -> impl IntoResponse {
    let response = ReadyResponse { ready: true };

    (StatusCode::OK, Json(response))
}
