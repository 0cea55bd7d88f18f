//! Configuration module for stack_readiness.
//!
//! Every value has a built-in default matching the platform's local
//! development layout; environment variables override them.
//!
//! # Example
//!
//! ```rust,ignore
//! use stack_readiness::config::Config;
//!
//! let config = Config::from_env()?;
//! println!("Backend: {}", config.targets.backend_url);
//! println!("Page timeout: {:?}", config.probes.page_timeout);
//! ```

mod error;
mod logging;
mod parse;
mod probe;
mod targets;

pub use error::ConfigError;
pub use logging::LoggingConfig;
pub use parse::{EnvSource, ProcessEnv};
pub use probe::ProbeConfig;
pub use targets::TargetConfig;

use parse::env_or;

/// Rendering of logs and of the final report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    fn from_env(env: &dyn EnvSource, key: &str) -> Result<Self, ConfigError> {
        match env_or(env, key, "text").to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Invalid {
                key: key.into(),
                message: format!("'{}', expected text or json", other),
            }),
        }
    }
}

/// Complete application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Probed subsystem locations.
    pub targets: TargetConfig,
    /// Probe timeouts and thresholds.
    pub probes: ProbeConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
    /// Final report format.
    pub report_format: OutputFormat,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(&ProcessEnv)
    }

    /// Load configuration from an arbitrary source.
    pub fn from_source(env: &dyn EnvSource) -> Result<Self, ConfigError> {
        Ok(Self {
            targets: TargetConfig::from_env(env)?,
            probes: ProbeConfig::from_env(env)?,
            logging: LoggingConfig::from_env(env)?,
            report_format: OutputFormat::from_env(env, "REPORT_FORMAT")?,
        })
    }

    /// Print configuration summary to log.
    pub fn log_summary(&self) {
        use tracing::info;

        info!("Configuration loaded:");
        info!("  Project root: {:?}", self.targets.project_root);
        info!("  Database: {:?}", self.targets.database_path);
        info!("  Frontend: {}", self.targets.frontend_url);
        info!("  Backend: {}", self.targets.backend_url);
        info!("  Chain service: {}", self.targets.chain_service_url);
        info!(
            "  Timeouts: http={:?} page={:?} prerequisite={:?}",
            self.probes.http_timeout, self.probes.page_timeout, self.probes.prerequisite_timeout
        );
        info!(
            "  Thresholds: pages>={:.0}% apis>={:.0}% latency<{:?}",
            self.probes.page_pass_ratio * 100.0,
            self.probes.api_pass_ratio * 100.0,
            self.probes.latency_budget
        );
    }
}
