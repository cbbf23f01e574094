// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for the Hello Kubernetes service
//!
//! Loads and parses configuration from environment variables.

use serde::Deserialize;


/// Default configuration values
pub mod defaults {
    pub const SERVER_ADDR: &str = "0.0.0.0:8000";
    pub const METRICS_ENABLED: bool = true;
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const SERVER_ADDR: &str = "SERVER_ADDR";
    pub const DATABASE_URL: &str = "DATABASE_URL";
    pub const METRICS_ENABLED: &str = "METRICS_ENABLED";
}

/// Application-wide configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server_addr: String,
    /// Connection string injected via ConfigMap/Secret. Read and reported at
    /// startup, not consumed by any request path.
    pub database_url: Option<String>,
    pub metrics_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_addr: defaults::SERVER_ADDR.to_string(),
            database_url: None,
            metrics_enabled: defaults::METRICS_ENABLED,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let server_addr = std::env::var(env_vars::SERVER_ADDR)
            .unwrap_or_else(|_| defaults::SERVER_ADDR.to_string());

        let database_url = std::env::var(env_vars::DATABASE_URL).ok();

        let metrics_enabled = std::env::var(env_vars::METRICS_ENABLED)
            .ok()
            .map(|v| parse_bool(&v).unwrap_or_else(|| {
                tracing::warn!(
                    "Invalid {} value '{}'. Using default ({}).",
                    env_vars::METRICS_ENABLED,
                    v,
                    defaults::METRICS_ENABLED
                );
                defaults::METRICS_ENABLED
            }))
            .unwrap_or(defaults::METRICS_ENABLED);

        Config {
            server_addr,
            database_url,
            metrics_enabled,
        }
    }
}

/// Parse a boolean environment value. Accepts 1/0, true/false, yes/no.
fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
