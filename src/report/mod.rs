//! Session report built from the final ledger.
//!
//! The report is a pure function of the ledger: same outcomes in, same
//! report out. It is rendered as plain text for humans or as JSON for
//! tooling.

mod recommend;
mod text;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::outcome::{Outcome, ResultLedger};
use crate::readiness::SessionVerdict;

pub use recommend::{Priority, Recommendation, RecommendationEngine};
pub use text::render_text;

/// Everything shown at session teardown.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub title: String,
    pub verdict: SessionVerdict,
    pub outcomes: Vec<Outcome>,
    pub recommendations: Vec<Recommendation>,
}

impl SessionReport {
    pub fn exit_code(&self) -> i32 {
        self.verdict.exit_code()
    }
}

/// Turns a ledger into a [`SessionReport`] and renders it.
#[derive(Debug, Clone)]
pub struct SessionReporter {
    title: String,
    format: OutputFormat,
}

impl SessionReporter {
    pub fn new(title: impl Into<String>, format: OutputFormat) -> Self {
        Self {
            title: title.into(),
            format,
        }
    }

    pub fn build(&self, ledger: &ResultLedger) -> SessionReport {
        let counts = ledger.count_by_status();
        SessionReport {
            title: self.title.clone(),
            verdict: SessionVerdict::from_counts(counts),
            outcomes: ledger.all().to_vec(),
            recommendations: RecommendationEngine::generate(&counts, ledger.all()),
        }
    }

    pub fn render(&self, report: &SessionReport) -> String {
        match self.format {
            OutputFormat::Text => render_text(report),
            // Plain data types only, serialization cannot fail
            OutputFormat::Json => serde_json::to_string_pretty(report).unwrap_or_default(),
        }
    }
}
