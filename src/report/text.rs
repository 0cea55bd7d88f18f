//! Plain-text report layout.

use std::fmt::Write;

use super::SessionReport;
use crate::outcome::Status;

const RULE_WIDTH: usize = 80;

/// Render counts, details, verdict and recommendations, in that order.
pub fn render_text(report: &SessionReport) -> String {
    let mut out = String::new();
    let rule = "=".repeat(RULE_WIDTH);
    let counts = report.verdict.counts;

    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "{:^width$}", report.title, width = RULE_WIDTH);
    let _ = writeln!(out, "{}", rule);

    out.push_str("📊 Statistics:\n");
    let _ = writeln!(out, "   Total checks: {}", counts.total());
    for status in Status::ALL {
        let label = match status {
            Status::Pass => "Passed",
            Status::Fail => "Failed",
            Status::Warn => "Warnings",
            Status::Skip => "Skipped",
        };
        let _ = writeln!(out, "   {}: {}", label, counts.get(status));
    }
    match report.verdict.success_rate {
        Some(rate) => {
            let _ = writeln!(out, "   Success rate: {:.1}%", rate * 100.0);
        }
        None => out.push_str("   Success rate: n/a\n"),
    }

    out.push_str("\n📋 Details:\n");
    for outcome in &report.outcomes {
        let _ = writeln!(
            out,
            "   {} {}: {}",
            outcome.status().icon(),
            outcome.name(),
            outcome.message()
        );
    }

    let tier = report.verdict.tier;
    out.push_str("\n🎯 Assessment:\n");
    let _ = writeln!(out, "   {} System status: {}", tier.icon(), tier.label());
    let _ = writeln!(out, "   Readiness: {}", tier.readiness());
    let _ = writeln!(out, "   Ready: {}", if tier.is_ready() { "yes" } else { "no" });

    out.push_str("\n📝 Recommendations:\n");
    for rec in &report.recommendations {
        let _ = writeln!(out, "   • {}", rec.action);
    }

    out
}
