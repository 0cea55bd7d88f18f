use serde::Serialize;

use crate::outcome::{Outcome, StatusCounts};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub action: String,
}

impl Recommendation {
    fn new(priority: Priority, action: impl Into<String>) -> Self {
        Self {
            priority,
            action: action.into(),
        }
    }
}

pub struct RecommendationEngine;

impl RecommendationEngine {
    /// Conditional recommendations from the counts plus the advice attached
    /// to individual outcomes, highest priority first.
    pub fn generate(counts: &StatusCounts, outcomes: &[Outcome]) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        if counts.fail > 0 {
            recommendations.push(Recommendation::new(Priority::High, "Fix the failing checks"));
            recommendations.push(Recommendation::new(
                Priority::High,
                "Make sure every service is running",
            ));
        }

        if counts.warn > 0 {
            recommendations.push(Recommendation::new(
                Priority::Medium,
                "Review and improve the checks with warnings",
            ));
        }

        recommendations.extend(
            outcomes
                .iter()
                .filter_map(Outcome::advice)
                .map(|advice| Recommendation::new(Priority::Medium, advice)),
        );

        // Always present
        recommendations.push(Recommendation::new(
            Priority::Low,
            "Run the full readiness check regularly",
        ));
        recommendations.push(Recommendation::new(
            Priority::Low,
            "Keep the system documentation up to date",
        ));

        recommendations
    }
}
