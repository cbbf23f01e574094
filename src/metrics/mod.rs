// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Metrics module for the Hello Kubernetes service
//!
//! Contains label types and the Prometheus metrics registry.

mod labels;
mod registry;

/// Labels for request counters and latency histograms
pub use labels::{HttpLabels, PathLabels};

/// Prometheus metrics registry
pub use registry::MetricsRegistry;
