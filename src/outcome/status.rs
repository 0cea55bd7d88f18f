//! Probe status and outcome types.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Result status of a single probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// Subsystem present and behaving.
    Pass,
    /// Hard failure: subsystem absent or misbehaving.
    Fail,
    /// Advisory issue: hygiene or slowness.
    Warn,
    /// Prerequisite not met, check not run.
    Skip,
}

impl Status {
    /// All statuses in report order.
    pub const ALL: [Status; 4] = [Status::Pass, Status::Fail, Status::Warn, Status::Skip];

    /// Icon used in the detail section of the report.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Pass => "✅",
            Self::Fail => "❌",
            Self::Warn => "⚠️",
            Self::Skip => "⏭️",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::Warn => "WARN",
            Self::Skip => "SKIP",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable record of one probe result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    name: String,
    status: Status,
    message: String,
    timestamp: DateTime<Utc>,
    /// Follow-up action suggested by the probe, independent of status.
    #[serde(skip_serializing_if = "Option::is_none")]
    advice: Option<String>,
}

impl Outcome {
    /// Create an outcome stamped with the current time.
    pub fn new(name: impl Into<String>, status: Status, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status,
            message: message.into(),
            timestamp: Utc::now(),
            advice: None,
        }
    }

    /// Attach a follow-up action that ends up in the report's recommendations.
    pub fn with_advice(mut self, advice: impl Into<String>) -> Self {
        self.advice = Some(advice.into());
        self
    }

    pub fn pass(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, Status::Pass, message)
    }

    pub fn fail(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, Status::Fail, message)
    }

    pub fn warn(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, Status::Warn, message)
    }

    pub fn skip(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, Status::Skip, message)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Capture time, set once at creation.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn advice(&self) -> Option<&str> {
        self.advice.as_deref()
    }

    /// Returns true if this outcome is a hard failure.
    pub fn is_fail(&self) -> bool {
        self.status == Status::Fail
    }

    /// Compares everything but the capture time.
    pub fn same_result(&self, other: &Outcome) -> bool {
        self.name == other.name
            && self.status == other.status
            && self.message == other.message
            && self.advice == other.advice
    }
}
