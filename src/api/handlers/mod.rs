// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

mod health;
mod metrics;
mod root;

pub use health::{healthz, livez, readyz};
pub use metrics::metrics_handler;
pub use root::root;
