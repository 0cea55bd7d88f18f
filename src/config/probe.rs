//! Probe timeouts and thresholds.

use std::time::Duration;

use super::parse::{env_duration, env_parse, env_ratio, EnvSource};
use super::ConfigError;

/// Timeouts and thresholds shared by the probes.
#[derive(Clone, Debug)]
pub struct ProbeConfig {
    /// Single-service checks (default: 10s).
    pub http_timeout: Duration,
    /// Bulk page and API sweeps, latency samples (default: 5s).
    pub page_timeout: Duration,
    /// Liveness gates in front of dependent checks (default: 3s).
    pub prerequisite_timeout: Duration,
    /// Mean response time above which performance is a warning (default: 500ms).
    pub latency_budget: Duration,
    /// Fraction of frontend pages that must load (default: 0.8).
    pub page_pass_ratio: f64,
    /// Fraction of API routes that must answer (default: 0.7).
    pub api_pass_ratio: f64,
    /// Store files smaller than this are treated as empty or corrupt.
    pub database_min_bytes: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            http_timeout: Duration::from_secs(10),
            page_timeout: Duration::from_secs(5),
            prerequisite_timeout: Duration::from_secs(3),
            latency_budget: Duration::from_millis(500),
            page_pass_ratio: 0.8,
            api_pass_ratio: 0.7,
            database_min_bytes: 1000,
        }
    }
}

impl ProbeConfig {
    pub fn from_env(env: &dyn EnvSource) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            http_timeout: env_duration(env, "HTTP_TIMEOUT", "10s")?,
            page_timeout: env_duration(env, "PAGE_TIMEOUT", "5s")?,
            prerequisite_timeout: env_duration(env, "PREREQUISITE_TIMEOUT", "3s")?,
            latency_budget: env_duration(env, "LATENCY_BUDGET", "500ms")?,
            page_pass_ratio: env_ratio(env, "PAGE_PASS_RATIO", defaults.page_pass_ratio)?,
            api_pass_ratio: env_ratio(env, "API_PASS_RATIO", defaults.api_pass_ratio)?,
            database_min_bytes: env_parse(env, "DATABASE_MIN_BYTES", defaults.database_min_bytes)?,
        })
    }
}
