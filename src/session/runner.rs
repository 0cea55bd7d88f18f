//! Sequential probe execution.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::time::Instant;

use futures_util::FutureExt;
use tracing::{error, info};

use crate::outcome::{Outcome, ResultLedger};
use crate::probe::Probe;
use crate::report::{SessionReport, SessionReporter};

/// Runs a fixed, ordered list of probes once and reports on them.
///
/// The runner owns the session ledger. Probes run one after another; every
/// probe yields exactly one outcome, including probes that panic.
pub struct SessionRunner {
    probes: Vec<Box<dyn Probe>>,
    reporter: SessionReporter,
}

impl SessionRunner {
    pub fn new(probes: Vec<Box<dyn Probe>>, reporter: SessionReporter) -> Self {
        Self { probes, reporter }
    }

    /// Number of probes in the session.
    pub fn len(&self) -> usize {
        self.probes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }

    /// Execute every probe in order and return the filled ledger.
    pub async fn run(&self) -> ResultLedger {
        let mut ledger = ResultLedger::new();
        for probe in &self.probes {
            ledger.record(run_guarded(probe.as_ref()).await);
        }
        ledger
    }

    /// Run the session and build its report.
    pub async fn execute(&self) -> SessionReport {
        let ledger = self.run().await;
        let report = self.reporter.build(&ledger);

        info!(
            passed = report.verdict.counts.pass,
            failed = report.verdict.counts.fail,
            warned = report.verdict.counts.warn,
            skipped = report.verdict.counts.skip,
            tier = %report.verdict.tier,
            "Session complete"
        );
        report
    }

    pub fn render(&self, report: &SessionReport) -> String {
        self.reporter.render(report)
    }
}

/// Run one probe behind a panic boundary.
async fn run_guarded(probe: &dyn Probe) -> Outcome {
    let start = Instant::now();
    info!(probe = probe.name(), "Running probe");

    let outcome = match AssertUnwindSafe(probe.run()).catch_unwind().await {
        Ok(outcome) => outcome,
        Err(payload) => {
            let reason = panic_message(payload.as_ref());
            error!(probe = probe.name(), reason = %reason, "Probe panicked");
            Outcome::fail(
                probe.name(),
                format!("internal error in probe '{}': {}", probe.name(), reason),
            )
        }
    };

    info!(
        probe = probe.name(),
        status = %outcome.status(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Probe finished"
    );
    outcome
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
