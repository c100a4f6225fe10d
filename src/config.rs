//! Configuration management for the dashboard

use std::env;

use crate::error::{DashboardError, Result};

/// Rows requested from `/orders`
pub const DEFAULT_ORDER_LIMIT: u32 = 500;

/// Dashboard configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend origin, e.g. `http://localhost:8000`
    pub base_url: String,

    /// Initial value of the auth key field
    pub auth_key: Option<String>,

    /// Initial state of the simulation checkbox
    pub simulation: bool,

    pub order_limit: u32,

    /// Per-request timeout; 0 disables it
    pub timeout_seconds: u64,

    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            auth_key: None,
            simulation: true,
            order_limit: DEFAULT_ORDER_LIMIT,
            timeout_seconds: 30,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from process environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::var("DASHBOARD_BASE_URL").unwrap_or(defaults.base_url),

            auth_key: env::var("DASHBOARD_AUTH_KEY").ok().filter(|k| !k.is_empty()),

            simulation: env::var("DASHBOARD_SIMULATION")
                .map(|v| v.to_lowercase() != "false")
                .unwrap_or(defaults.simulation),

            order_limit: env::var("DASHBOARD_ORDER_LIMIT")
                .map(|v| v.parse().unwrap_or(DEFAULT_ORDER_LIMIT))
                .unwrap_or(DEFAULT_ORDER_LIMIT),

            timeout_seconds: env::var("DASHBOARD_TIMEOUT_SECONDS")
                .map(|v| v.parse().unwrap_or(defaults.timeout_seconds))
                .unwrap_or(defaults.timeout_seconds),

            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(DashboardError::Config(format!(
                "base_url must be an http(s) origin, got {:?}",
                self.base_url
            )));
        }
        if self.order_limit == 0 || self.order_limit > 1000 {
            return Err(DashboardError::Config("order_limit must be 1-1000".into()));
        }
        Ok(())
    }

    /// Origin without a trailing slash
    pub fn origin(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
