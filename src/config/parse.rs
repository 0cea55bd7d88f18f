//! Environment variable parsing utilities.

use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

use super::ConfigError;

/// Source of configuration values.
///
/// The process environment in production, a plain map in tests.
pub trait EnvSource {
    fn get(&self, key: &str) -> Option<String>;
}

/// Reads from `std::env`.
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// Get environment variable with default value.
pub fn env_or(env: &dyn EnvSource, key: &str, default: &str) -> String {
    env_opt(env, key).unwrap_or_else(|| default.to_string())
}

/// Get optional environment variable (None if empty or missing).
pub fn env_opt(env: &dyn EnvSource, key: &str) -> Option<String> {
    env.get(key).filter(|s| !s.trim().is_empty())
}

/// Parse environment variable with type conversion.
pub fn env_parse<T: FromStr>(env: &dyn EnvSource, key: &str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match env_opt(env, key) {
        Some(v) => v.trim().parse().map_err(|e: T::Err| ConfigError::Parse {
            key: key.into(),
            value: v,
            error: e.to_string(),
        }),
        None => Ok(default),
    }
}

/// Parse a fraction in `[0.0, 1.0]`.
pub fn env_ratio(env: &dyn EnvSource, key: &str, default: f64) -> Result<f64, ConfigError> {
    let ratio: f64 = env_parse(env, key, default)?;
    if !(0.0..=1.0).contains(&ratio) {
        return Err(ConfigError::Invalid {
            key: key.into(),
            message: format!("{} is outside 0.0..=1.0", ratio),
        });
    }
    Ok(ratio)
}

/// Parse duration string (e.g., "500ms", "30s", "2m", "1h").
/// Returns None for "off" or "0".
pub fn parse_duration(s: &str) -> Result<Option<Duration>, String> {
    let s = s.trim().to_lowercase();

    if s == "off" || s == "0" || s.is_empty() {
        return Ok(None);
    }

    if let Some(ms) = s.strip_suffix("ms") {
        return ms
            .parse::<u64>()
            .map(|ms| Some(Duration::from_millis(ms)))
            .map_err(|_| format!("invalid number: {}", ms));
    }

    let (num_str, multiplier) = if let Some(n) = s.strip_suffix('s') {
        (n, 1)
    } else if let Some(n) = s.strip_suffix('m') {
        (n, 60)
    } else if let Some(n) = s.strip_suffix('h') {
        (n, 3600)
    } else {
        // Plain seconds
        return s
            .parse::<u64>()
            .map(|secs| Some(Duration::from_secs(secs)))
            .map_err(|_| format!("invalid duration: {}", s));
    };

    let num: u64 = num_str
        .parse()
        .map_err(|_| format!("invalid number: {}", num_str))?;

    Ok(Some(Duration::from_secs(num * multiplier)))
}

/// Parse environment variable as a mandatory, non-zero duration.
pub fn env_duration(env: &dyn EnvSource, key: &str, default: &str) -> Result<Duration, ConfigError> {
    let value = env_or(env, key, default);
    match parse_duration(&value) {
        Ok(Some(d)) => Ok(d),
        Ok(None) => Err(ConfigError::Invalid {
            key: key.into(),
            message: "probe timeouts and budgets cannot be disabled".into(),
        }),
        Err(error) => Err(ConfigError::Parse {
            key: key.into(),
            value,
            error,
        }),
    }
}

/// Parse an absolute http(s) base URL, without trailing slash.
pub fn env_url(env: &dyn EnvSource, key: &str, default: &str) -> Result<String, ConfigError> {
    let value = env_or(env, key, default);
    let trimmed = value.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::Invalid {
            key: key.into(),
            message: format!("'{}' is not an http(s) URL", value),
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
pub(crate) fn env_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
