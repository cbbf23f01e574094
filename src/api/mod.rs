//! HTTP API module for the Hello Kubernetes service
//!
//! Provides the JSON endpoints probed by the orchestrator and the
//! Prometheus metrics export.
//!
//! # Endpoints
//! - `GET /` — greeting (smoke-test root route)
//! - `GET /healthz` — health check
//! - `GET /livez` — liveness probe
//! - `GET /readyz` — readiness probe
//! - `GET /metrics` — Prometheus metrics (when enabled)

pub mod handlers;
pub mod middleware;
mod state;

use axum::middleware::from_fn_with_state;
use axum::{Router, routing::get};
use std::sync::Arc;

pub use state::AppState;

/// Creates the main Axum router with all endpoints.
///
/// The metrics route and the observing layer are only wired when
/// `metrics_enabled` is set; the probe routes are unaffected either way.
pub fn create_router(state: Arc<AppState>) -> Router {
    let router = Router::new()
        .route("/", get(handlers::root))
        .route("/healthz", get(handlers::healthz))
        .route("/livez", get(handlers::livez))
        .route("/readyz", get(handlers::readyz));

    let router = if state.config.metrics_enabled {
        router
            .route("/metrics", get(handlers::metrics_handler))
            .layer(from_fn_with_state(state.clone(), middleware::track_requests))
    } else {
        router
    };

    router.with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::metrics::MetricsRegistry;

    #[test]
    fn test_create_router() {
        let config = Config {
            server_addr: "127.0.0.1:8000".to_string(),
            database_url: None,
            metrics_enabled: true,
        };

        let metrics = MetricsRegistry::new();
        let app_state = Arc::new(AppState { config, metrics });

        let _router = create_router(app_state);
        // If we get here without panicking, the router was created successfully
    }

    #[test]
    fn test_create_router_without_metrics() {
        let config = Config {
            metrics_enabled: false,
            ..Config::default()
        };

        let metrics = MetricsRegistry::new();
        let app_state = Arc::new(AppState { config, metrics });

        let _router = create_router(app_state);
    }

    #[test]
    fn test_app_state_creation() {
        let config = Config::default();
        let metrics = MetricsRegistry::new();

        let state = AppState { config, metrics };

        assert_eq!(state.config.server_addr, "0.0.0.0:8000");
        assert!(state.config.metrics_enabled);
    }
}
