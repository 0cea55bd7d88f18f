//! Session-level readiness verdict.

use serde::Serialize;

use crate::outcome::StatusCounts;

/// Largest number of hard failures still considered "basically ready".
pub const TOLERATED_FAILURES: usize = 2;

/// Coarse readiness classification of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictTier {
    /// No hard failures: ready.
    Excellent,
    /// A few hard failures: basically ready, fixes recommended.
    Good,
    /// Too many hard failures: not ready.
    NeedsWork,
}

impl VerdictTier {
    /// Tier from the hard-failure count alone. Warnings and skips never
    /// affect the tier, and neither does the number of passing checks.
    pub fn from_fail_count(fail: usize) -> Self {
        match fail {
            0 => Self::Excellent,
            n if n <= TOLERATED_FAILURES => Self::Good,
            _ => Self::NeedsWork,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::NeedsWork => "Needs work",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Excellent => "🎉",
            Self::Good => "👍",
            Self::NeedsWork => "❌",
        }
    }

    /// Readiness statement shown under the tier.
    pub fn readiness(self) -> &'static str {
        match self {
            Self::Excellent => "ready",
            Self::Good => "basically ready, fixes recommended",
            Self::NeedsWork => "not ready, critical issues must be fixed",
        }
    }

    pub fn is_ready(self) -> bool {
        matches!(self, Self::Excellent)
    }
}

impl std::fmt::Display for VerdictTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Verdict derived once from the final ledger counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SessionVerdict {
    pub tier: VerdictTier,
    pub counts: StatusCounts,
    /// `None` when no outcome was recorded.
    pub success_rate: Option<f64>,
}

impl SessionVerdict {
    pub fn from_counts(counts: StatusCounts) -> Self {
        Self {
            tier: VerdictTier::from_fail_count(counts.fail),
            counts,
            success_rate: counts.success_rate(),
        }
    }

    /// Process exit code: 0 only when nothing failed.
    pub fn exit_code(&self) -> i32 {
        if self.counts.fail == 0 {
            0
        } else {
            1
        }
    }
}
