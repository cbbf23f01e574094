// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prometheus registry for per-request HTTP metrics

use crate::error::{AppError, Result};
use crate::metrics::labels::{HttpLabels, PathLabels};
use prometheus_client::encoding::text::encode;
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::metrics::histogram::{Histogram, exponential_buckets};
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Registry of request counters and latency histograms.
///
/// Cheap to clone; all metric families share their underlying atomics. The
/// registry itself is only locked while encoding a scrape, increments go
/// straight to the family atomics.
#[derive(Clone)]
pub struct MetricsRegistry {
    registry: Arc<Mutex<Registry>>,
    http_requests: Family<HttpLabels, Counter>,
    http_request_duration_seconds: Family<PathLabels, Histogram>,
    http_requests_in_flight: Gauge,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        let mut registry = Registry::default();

        let http_requests = Family::<HttpLabels, Counter>::default();
        registry.register(
            "http_requests",
            "Total HTTP requests by method, route and status",
            http_requests.clone(),
        );

        let http_request_duration_seconds =
            Family::<PathLabels, Histogram>::new_with_constructor(|| {
                Histogram::new(exponential_buckets(0.005, 2.0, 12))
            });
        registry.register(
            "http_request_duration_seconds",
            "HTTP request latency in seconds by method and route",
            http_request_duration_seconds.clone(),
        );

        let http_requests_in_flight = Gauge::default();
        registry.register(
            "http_requests_in_flight",
            "HTTP requests currently being handled",
            http_requests_in_flight.clone(),
        );

        Self {
            registry: Arc::new(Mutex::new(registry)),
            http_requests,
            http_request_duration_seconds,
            http_requests_in_flight,
        }
    }

    pub fn record_request(&self, labels: &HttpLabels) {
        self.http_requests.get_or_create(labels).inc();
    }

    pub fn observe_duration(&self, labels: &PathLabels, seconds: f64) {
        self.http_request_duration_seconds
            .get_or_create(labels)
            .observe(seconds);
    }

    pub fn inc_in_flight(&self) {
        self.http_requests_in_flight.inc();
    }

    pub fn dec_in_flight(&self) {
        self.http_requests_in_flight.dec();
    }

    /// Current count for a label set, used by tests and diagnostics
    pub fn request_count(&self, labels: &HttpLabels) -> u64 {
        self.http_requests.get_or_create(labels).get()
    }

    /// Render the registry in the text exposition format
    pub async fn encode_metrics(&self) -> Result<String> {
        let registry = self.registry.lock().await;
        let mut buffer = String::new();
        encode(&mut buffer, &registry).map_err(|e| AppError::Metrics(e.to_string()))?;
        Ok(buffer)
    }
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}
