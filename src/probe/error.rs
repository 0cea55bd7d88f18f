//! Errors raised inside a probe before it turns them into an outcome.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Internal probe failure. Never crosses a probe boundary.
#[derive(Debug)]
pub enum ProbeError {
    /// Filesystem access failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Request could not be sent or the connection failed.
    Http(reqwest::Error),

    /// No response within the probe's timeout.
    Timeout { url: String, duration_ms: u64 },

    /// SQLite error.
    Database(rusqlite::Error),

    /// Response body is not what the probe expects.
    Payload(String),

    /// Background task failed to complete.
    Task(String),
}

impl ProbeError {
    /// Map a request error, recognizing timeouts.
    pub fn from_request(url: &str, timeout: Duration, error: reqwest::Error) -> Self {
        if error.is_timeout() {
            ProbeError::Timeout {
                url: url.to_string(),
                duration_ms: timeout.as_millis() as u64,
            }
        } else {
            ProbeError::Http(error)
        }
    }

    /// Short form used in group listings.
    pub fn brief(&self) -> &'static str {
        match self {
            ProbeError::Timeout { .. } => "timeout",
            ProbeError::Http(_) => "connection failed",
            ProbeError::Payload(_) => "invalid payload",
            ProbeError::Io { .. } | ProbeError::Database(_) | ProbeError::Task(_) => "error",
        }
    }
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            ProbeError::Http(e) => match std::error::Error::source(e) {
                Some(cause) => write!(f, "connection failed: {} ({})", e, cause),
                None => write!(f, "connection failed: {}", e),
            },
            ProbeError::Timeout { url, duration_ms } => {
                write!(f, "no response from {} within {}ms", url, duration_ms)
            }
            ProbeError::Database(e) => write!(f, "database error: {}", e),
            ProbeError::Payload(msg) => write!(f, "invalid payload: {}", msg),
            ProbeError::Task(msg) => write!(f, "task failed: {}", msg),
        }
    }
}

impl std::error::Error for ProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProbeError::Io { source, .. } => Some(source),
            ProbeError::Http(e) => Some(e),
            ProbeError::Database(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ProbeError {
    fn from(e: reqwest::Error) -> Self {
        ProbeError::Http(e)
    }
}

impl From<rusqlite::Error> for ProbeError {
    fn from(e: rusqlite::Error) -> Self {
        ProbeError::Database(e)
    }
}

impl From<tokio::task::JoinError> for ProbeError {
    fn from(e: tokio::task::JoinError) -> Self {
        ProbeError::Task(e.to_string())
    }
}
