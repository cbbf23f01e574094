use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

/// Root endpoint response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct GreetingResponse {
    pub message: String,
}

/// GET /
///
/// Smoke-test root route returning a fixed greeting.
pub async fn root() -> impl IntoResponse {
    let response = GreetingResponse {
        message: "Hello, Kubernetes!".to_string(),
    };

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_root() {
        let response = root().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
