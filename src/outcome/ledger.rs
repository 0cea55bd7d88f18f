//! Append-only ledger of session outcomes.

use serde::Serialize;

use super::{Outcome, Status};

/// Ordered, append-only record of every outcome in one session.
#[derive(Debug, Default, Clone)]
pub struct ResultLedger {
    outcomes: Vec<Outcome>,
}

impl ResultLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an outcome to the end of the ledger.
    pub fn record(&mut self, outcome: Outcome) {
        self.outcomes.push(outcome);
    }

    /// All outcomes in insertion order.
    pub fn all(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Occurrence count of each status.
    pub fn count_by_status(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for outcome in &self.outcomes {
            counts.add(outcome.status());
        }
        counts
    }
}

/// Per-status tally of a ledger.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub pass: usize,
    pub fail: usize,
    pub warn: usize,
    pub skip: usize,
}

impl StatusCounts {
    fn add(&mut self, status: Status) {
        match status {
            Status::Pass => self.pass += 1,
            Status::Fail => self.fail += 1,
            Status::Warn => self.warn += 1,
            Status::Skip => self.skip += 1,
        }
    }

    pub fn get(&self, status: Status) -> usize {
        match status {
            Status::Pass => self.pass,
            Status::Fail => self.fail,
            Status::Warn => self.warn,
            Status::Skip => self.skip,
        }
    }

    pub fn total(&self) -> usize {
        self.pass + self.fail + self.warn + self.skip
    }

    /// Fraction of outcomes that passed; `None` for an empty ledger.
    pub fn success_rate(&self) -> Option<f64> {
        match self.total() {
            0 => None,
            total => Some(self.pass as f64 / total as f64),
        }
    }
}
