//! Latency sampling against stub services

use std::time::Duration;

use stack_readiness::outcome::Status;
use stack_readiness::probe::{build_client, LatencySamplingProbe, Probe};
use stack_readiness::session::{CHAIN_HEALTH_PATH, LATENCY_ENDPOINTS};

use crate::helpers::{SplitResponseService, StubRoutes, DOWN};

fn probe(base: &str, budget: Duration) -> LatencySamplingProbe {
    LatencySamplingProbe::new(
        "performance",
        build_client().unwrap(),
        base,
        CHAIN_HEALTH_PATH,
        LATENCY_ENDPOINTS,
    )
    .with_budget(budget)
    .with_timeouts(Duration::from_secs(3), Duration::from_secs(1))
}

#[tokio::test]
async fn test_fast_service_passes() {
    let chain = StubRoutes::new().routes(LATENCY_ENDPOINTS, 200).start().await;

    let outcome = probe(&chain.url(), Duration::from_millis(500)).run().await;

    assert_eq!(outcome.status(), Status::Pass);
    assert!(outcome.message().starts_with("average response time: "));
    assert!(outcome.message().ends_with("ms"));
}

#[tokio::test]
async fn test_slow_service_warns() {
    let chain = StubRoutes::new()
        .route("/health", 200, "")
        .slow_route("/api/hybrid/stats", 200, "{}", Duration::from_millis(300))
        .slow_route("/api/hybrid/nfts", 200, "[]", Duration::from_millis(300))
        .start()
        .await;

    // Mean is at least 200ms, well over a 50ms budget
    let outcome = probe(&chain.url(), Duration::from_millis(50)).run().await;

    assert_eq!(outcome.status(), Status::Warn);
    assert!(outcome.message().starts_with("slow responses: average "));
    assert!(outcome.message().ends_with("(budget 50ms)"));
}

#[tokio::test]
async fn test_slow_body_counts_toward_latency() {
    // Headers arrive at once; two of three bodies take 900ms
    let chain = SplitResponseService::start(
        &["/api/hybrid/stats", "/api/hybrid/nfts"],
        "{}",
        Duration::from_millis(900),
    )
    .await;

    let outcome = probe(&chain.url(), Duration::from_millis(500)).run().await;

    assert_eq!(outcome.status(), Status::Warn, "{}", outcome.message());
    assert!(outcome.message().ends_with("(budget 500ms)"));
}

#[tokio::test]
async fn test_unavailable_service_is_skipped() {
    let outcome = probe(DOWN, Duration::from_millis(500)).run().await;

    assert_eq!(outcome.status(), Status::Skip);
    assert_eq!(outcome.message(), "service unavailable, latency not sampled");
}

#[tokio::test]
async fn test_unhealthy_prerequisite_is_skipped() {
    let chain = StubRoutes::new().route("/health", 503, "").start().await;

    let outcome = probe(&chain.url(), Duration::from_millis(500)).run().await;

    assert_eq!(outcome.status(), Status::Skip);
}

#[tokio::test]
async fn test_no_successful_samples_fails() {
    // Prerequisite is checked separately from the sampled endpoints
    let chain = StubRoutes::new().route("/health", 200, "").start().await;
    let probe = LatencySamplingProbe::new(
        "performance",
        build_client().unwrap(),
        chain.url(),
        CHAIN_HEALTH_PATH,
        &["/api/hybrid/stats", "/api/hybrid/nfts"],
    );

    let outcome = probe.run().await;

    assert_eq!(outcome.status(), Status::Fail);
    assert_eq!(outcome.message(), "no latency samples collected");
}
