//! Full sessions over the standard probe catalog

use stack_readiness::outcome::Status;
use stack_readiness::probe::build_client;
use stack_readiness::readiness::VerdictTier;
use stack_readiness::report::SessionReporter;
use stack_readiness::session::{standard_probes, SessionRunner, FRONTEND_PAGES};

use crate::helpers::{config_for, ProjectTree, StubRoutes, DOWN};

fn runner(config: &stack_readiness::Config) -> SessionRunner {
    SessionRunner::new(
        standard_probes(config, &build_client().unwrap()),
        SessionReporter::new("Platform readiness report", config.report_format),
    )
}

#[tokio::test]
async fn test_everything_down_still_reports_every_probe() {
    let tree = ProjectTree::empty();
    let config = config_for(tree.path(), DOWN, DOWN, DOWN);
    let runner = runner(&config);

    let report = runner.execute().await;
    let statuses: Vec<(&str, Status)> = report
        .outcomes
        .iter()
        .map(|o| (o.name(), o.status()))
        .collect();

    assert_eq!(
        statuses,
        [
            ("project structure", Status::Fail),
            ("dependencies", Status::Fail),
            ("smart contracts", Status::Fail),
            ("database", Status::Fail),
            ("frontend service", Status::Fail),
            ("backend service", Status::Fail),
            ("chain service", Status::Fail),
            ("frontend pages", Status::Fail),
            ("API endpoints", Status::Fail),
            ("performance", Status::Skip),
            ("security config", Status::Warn),
        ]
    );
    assert_eq!(report.verdict.tier, VerdictTier::NeedsWork);
    assert_eq!(report.exit_code(), 1);

    let text = runner.render(&report);
    assert!(text.contains("Total checks: 11"));
    assert!(text.contains("Failed: 9"));
    assert!(text.contains("• Fix the failing checks"));
    assert!(text.contains("   Ready: no"));
}

#[tokio::test]
async fn test_healthy_platform_is_ready() {
    let tree = ProjectTree::complete();
    let pages: Vec<&str> = FRONTEND_PAGES.iter().map(|(path, _)| *path).collect();
    let frontend = StubRoutes::new().routes(&pages, 200).start().await;
    let backend = StubRoutes::new()
        .route("/health", 200, "ok")
        .routes(
            &[
                "/api/users",
                "/api/projects",
                "/api/datasets",
                "/api/publications",
                "/api/reviews",
                "/api/nfts",
            ],
            200,
        )
        .start()
        .await;
    let chain = StubRoutes::new()
        .route("/health", 200, r#"{"status":"ok"}"#)
        .routes(
            &[
                "/api/hybrid/stats",
                "/api/hybrid/nfts",
                "/api/hybrid/verify/demo-token-123",
                "/api/hybrid/compare",
            ],
            200,
        )
        .start()
        .await;

    let config = config_for(tree.path(), &frontend.url(), &backend.url(), &chain.url());
    let runner = runner(&config);
    let report = runner.execute().await;

    for outcome in &report.outcomes {
        assert_eq!(
            outcome.status(),
            Status::Pass,
            "{}: {}",
            outcome.name(),
            outcome.message()
        );
    }
    assert_eq!(report.outcomes.len(), 11);
    assert_eq!(report.verdict.tier, VerdictTier::Excellent);
    assert_eq!(report.verdict.success_rate, Some(1.0));
    assert_eq!(report.exit_code(), 0);

    let database = &report.outcomes[3];
    assert!(database.message().contains("3 rows in projects"));

    // Fixture store keeps the default rollback journal
    assert!(database.message().ends_with("journal mode delete"));
    assert!(report
        .recommendations
        .iter()
        .any(|r| r.action.contains("PRAGMA journal_mode=WAL")));

    let text = runner.render(&report);
    assert!(text.contains("   Ready: yes"));
}

#[tokio::test]
async fn test_file_checks_do_not_need_services() {
    let tree = ProjectTree::complete();
    tree.remove(".env.example");
    tree.write(".env", "SECRET=1");
    let config = config_for(tree.path(), DOWN, DOWN, DOWN);

    let report = runner(&config).execute().await;

    assert_eq!(report.outcomes[0].status(), Status::Pass);
    assert_eq!(report.outcomes[1].status(), Status::Pass);
    assert_eq!(report.outcomes[2].status(), Status::Pass);
    assert_eq!(report.outcomes[3].status(), Status::Pass);

    let security = &report.outcomes[10];
    assert_eq!(security.status(), Status::Warn);
    assert!(security.message().contains(".env.example missing"));
    assert!(security.message().contains("sensitive file may be committed: .env"));
}

#[tokio::test]
async fn test_json_report_is_parseable() {
    let tree = ProjectTree::empty();
    let mut config = config_for(tree.path(), DOWN, DOWN, DOWN);
    config.report_format = stack_readiness::config::OutputFormat::Json;
    let runner = runner(&config);

    let report = runner.execute().await;
    let value: serde_json::Value = serde_json::from_str(&runner.render(&report)).unwrap();

    assert_eq!(value["outcomes"].as_array().unwrap().len(), 11);
    assert_eq!(value["verdict"]["tier"], "needs_work");
    assert_eq!(value["outcomes"][9]["status"], "SKIP");
}
