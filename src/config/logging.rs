//! Logging configuration.

use super::parse::{env_opt, env_or, EnvSource};
use super::{ConfigError, OutputFormat};

/// Logging configuration loaded from environment.
#[derive(Clone, Debug)]
pub struct LoggingConfig {
    /// Log level filter (from LOG_LEVEL or RUST_LOG).
    pub filter: String,
    /// Plain text or JSON log lines.
    pub format: OutputFormat,
    /// Service name for structured logging.
    pub service_name: String,
}

impl LoggingConfig {
    /// Load configuration from environment variables.
    ///
    /// LOG_LEVEL accepts simple values: trace, debug, info, warn, error
    /// RUST_LOG accepts full tracing filter syntax: stack_readiness=debug,reqwest=warn
    pub fn from_env(env: &dyn EnvSource) -> Result<Self, ConfigError> {
        Ok(Self {
            filter: Self::resolve_log_filter(env),
            format: OutputFormat::from_env(env, "LOG_FORMAT")?,
            service_name: env_or(env, "SERVICE_NAME", "stack_readiness"),
        })
    }

    /// Resolve log filter from environment.
    ///
    /// Priority: LOG_LEVEL > RUST_LOG > default (info)
    fn resolve_log_filter(env: &dyn EnvSource) -> String {
        if let Some(level) = env_opt(env, "LOG_LEVEL") {
            let level = level.to_lowercase();
            match level.as_str() {
                "trace" | "debug" | "info" | "warn" | "error" => {
                    return format!("stack_readiness={}", level);
                }
                _ => {
                    // Logging is not up yet
                    eprintln!(
                        "Warning: Invalid LOG_LEVEL '{}', expected: trace, debug, info, warn, error",
                        level
                    );
                }
            }
        }

        if let Some(filter) = env_opt(env, "RUST_LOG") {
            return filter;
        }

        "stack_readiness=info".to_string()
    }
}
