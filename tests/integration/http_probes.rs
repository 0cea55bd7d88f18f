//! Reachability and JSON health probes against stub services

use std::time::Duration;

use stack_readiness::outcome::Status;
use stack_readiness::probe::{build_client, HttpReachabilityProbe, JsonHealthProbe, Probe};
use stack_readiness::session::BACKEND_HEALTH_PATHS;

use crate::helpers::{SplitResponseService, StubRoutes, DOWN};

const TIMEOUT: Duration = Duration::from_secs(2);

fn backend_probe(url: &str) -> HttpReachabilityProbe {
    HttpReachabilityProbe::new("backend service", build_client().unwrap(), url, TIMEOUT)
        .with_paths(BACKEND_HEALTH_PATHS)
        .accepting(&[200, 404])
}

#[tokio::test]
async fn test_frontend_root_answers() {
    let frontend = StubRoutes::new().route("/", 200, "<html></html>").start().await;
    let probe =
        HttpReachabilityProbe::new("frontend service", build_client().unwrap(), frontend.url(), TIMEOUT);

    let outcome = probe.run().await;

    assert_eq!(outcome.status(), Status::Pass);
    assert_eq!(outcome.message(), "service running (GET / -> 200)");
}

#[tokio::test]
async fn test_frontend_error_status_fails() {
    let frontend = StubRoutes::new().route("/", 500, "").start().await;
    let probe =
        HttpReachabilityProbe::new("frontend service", build_client().unwrap(), frontend.url(), TIMEOUT);

    let outcome = probe.run().await;

    assert_eq!(outcome.status(), Status::Fail);
    assert_eq!(outcome.message(), "/: status 500");
}

#[tokio::test]
async fn test_backend_not_found_still_counts_as_running() {
    // No routes at all: every path answers 404
    let backend = StubRoutes::new().start().await;

    let outcome = backend_probe(&backend.url()).run().await;

    assert_eq!(outcome.status(), Status::Pass);
    assert_eq!(outcome.message(), "service running (GET /health -> 404)");
}

#[tokio::test]
async fn test_backend_falls_through_candidate_paths() {
    let backend = StubRoutes::new()
        .route("/health", 503, "")
        .route("/api/health", 200, "ok")
        .start()
        .await;

    let outcome = backend_probe(&backend.url()).run().await;

    assert_eq!(outcome.status(), Status::Pass);
    assert_eq!(outcome.message(), "service running (GET /api/health -> 200)");
}

#[tokio::test]
async fn test_backend_down_lists_every_attempt() {
    let outcome = backend_probe(DOWN).run().await;

    assert_eq!(outcome.status(), Status::Fail);
    assert!(outcome.message().starts_with("all endpoints unreachable ("));
    for path in BACKEND_HEALTH_PATHS {
        assert!(outcome.message().contains(&format!("{}: connection failed", path)));
    }
}

fn chain_probe(url: String) -> JsonHealthProbe {
    JsonHealthProbe::new("chain service", build_client().unwrap(), url, "status", "ok", TIMEOUT)
}

#[tokio::test]
async fn test_chain_health_sentinel_matches() {
    let chain = StubRoutes::new()
        .route("/health", 200, r#"{"status":"ok","block":42}"#)
        .start()
        .await;

    let outcome = chain_probe(format!("{}/health", chain.url())).run().await;

    assert_eq!(outcome.status(), Status::Pass);
    assert_eq!(outcome.message(), "service running");
}

#[tokio::test]
async fn test_chain_health_mismatch_echoes_payload() {
    let chain = StubRoutes::new()
        .route("/health", 200, r#"{"status":"degraded"}"#)
        .start()
        .await;

    let outcome = chain_probe(format!("{}/health", chain.url())).run().await;

    assert_eq!(outcome.status(), Status::Fail);
    assert_eq!(
        outcome.message(),
        r#"unexpected health status: {"status":"degraded"}"#
    );
}

#[tokio::test]
async fn test_chain_health_rejects_non_json_and_bad_status() {
    let chain = StubRoutes::new()
        .route("/health", 200, "OK")
        .route("/broken", 502, "")
        .start()
        .await;

    let outcome = chain_probe(format!("{}/health", chain.url())).run().await;
    assert_eq!(outcome.status(), Status::Fail);
    assert!(outcome.message().starts_with("invalid payload"));

    let outcome = chain_probe(format!("{}/broken", chain.url())).run().await;
    assert_eq!(outcome.status(), Status::Fail);
    assert_eq!(outcome.message(), "status code: 502");
}

#[tokio::test]
async fn test_slow_service_reports_timeout() {
    let chain = StubRoutes::new()
        .slow_route("/health", 200, r#"{"status":"ok"}"#, Duration::from_secs(2))
        .start()
        .await;
    let url = format!("{}/health", chain.url());
    let probe = JsonHealthProbe::new(
        "chain service",
        build_client().unwrap(),
        url.clone(),
        "status",
        "ok",
        Duration::from_millis(200),
    );

    let outcome = probe.run().await;

    assert_eq!(outcome.status(), Status::Fail);
    assert_eq!(
        outcome.message(),
        format!("no response from {} within 200ms", url)
    );
}

#[tokio::test]
async fn test_body_timeout_reports_timeout() {
    let chain = SplitResponseService::start(
        &["/health"],
        r#"{"status":"ok"}"#,
        Duration::from_secs(2),
    )
    .await;
    let url = format!("{}/health", chain.url());
    let probe = JsonHealthProbe::new(
        "chain service",
        build_client().unwrap(),
        url.clone(),
        "status",
        "ok",
        Duration::from_millis(300),
    );

    let outcome = probe.run().await;

    assert_eq!(outcome.status(), Status::Fail);
    assert_eq!(
        outcome.message(),
        format!("no response from {} within 300ms", url)
    );
}
