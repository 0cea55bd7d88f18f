//! Pass-ratio evaluation for group probes.

/// Result of evaluating one group of sub-checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupVerdict {
    pub successes: usize,
    pub total: usize,
    pub passed: bool,
}

impl GroupVerdict {
    /// Number of targets that did not succeed.
    pub fn failures(&self) -> usize {
        self.total - self.successes
    }
}

/// Decides whether a group passes given its success count.
#[derive(Debug, Clone, Copy)]
pub struct ReadinessEvaluator {
    pass_ratio: f64,
}

impl ReadinessEvaluator {
    /// Create an evaluator. The ratio is clamped to `[0.0, 1.0]`.
    pub fn new(pass_ratio: f64) -> Self {
        Self {
            pass_ratio: pass_ratio.clamp(0.0, 1.0),
        }
    }

    pub fn pass_ratio(&self) -> f64 {
        self.pass_ratio
    }

    /// A group passes when `successes / total >= pass_ratio`.
    ///
    /// An empty group passes vacuously.
    pub fn evaluate(&self, successes: usize, total: usize) -> GroupVerdict {
        let successes = successes.min(total);
        let passed = if total == 0 {
            true
        } else {
            successes as f64 / total as f64 >= self.pass_ratio
        };

        GroupVerdict {
            successes,
            total,
            passed,
        }
    }
}
