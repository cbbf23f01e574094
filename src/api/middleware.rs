//! Request-observing middleware
//!
//! Records a counter and a latency observation for every request handled by
//! a registered route. Side-observer only: the response passes through
//! untouched.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use crate::api::state::AppState;
use crate::metrics::{HttpLabels, PathLabels};

pub async fn track_requests(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    // Route template, not the raw URI: keeps the path label cardinality
    // bounded. Absent for the 404 fallback, which is not recorded.
    let matched_path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned());
    let method = request.method().to_string();
    let start = Instant::now();

    state.metrics.inc_in_flight();
    let response = next.run(request).await;
    state.metrics.dec_in_flight();

    if let Some(path) = matched_path {
        let elapsed = start.elapsed().as_secs_f64();
        state.metrics.record_request(&HttpLabels {
            method: method.clone(),
            path: path.clone(),
            status: response.status().as_u16().to_string(),
        });
        state.metrics.observe_duration(&PathLabels { method, path }, elapsed);
    }

    response
}
