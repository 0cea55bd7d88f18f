//! Reduction of probe results into verdicts.
//!
//! Two levels of aggregation exist:
//! - **Group**: a group probe sweeps several targets and asks the
//!   [`ReadinessEvaluator`] whether enough of them succeeded.
//! - **Session**: the final ledger counts map to a [`VerdictTier`] through
//!   [`SessionVerdict`], using absolute hard-failure thresholds.

mod evaluator;
mod verdict;

pub use evaluator::{GroupVerdict, ReadinessEvaluator};
pub use verdict::{SessionVerdict, VerdictTier};
