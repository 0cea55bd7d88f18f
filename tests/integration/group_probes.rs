//! Page sweeps and API availability with pass ratios

use std::time::Duration;

use stack_readiness::outcome::Status;
use stack_readiness::probe::{
    build_client, ApiAvailabilityProbe, GroupAccessibilityProbe, GroupCheckSpec, GroupTarget,
    Probe,
};
use stack_readiness::session::{BACKEND_APIS, BACKEND_API_ACCEPT, CHAIN_APIS, FRONTEND_PAGES};

use crate::helpers::{StubRoutes, StubService, DOWN};

const TIMEOUT: Duration = Duration::from_secs(2);

/// Frontend serving the first `up` pages; the rest answer 404.
async fn frontend_with(up: usize) -> StubService {
    let paths: Vec<&str> = FRONTEND_PAGES.iter().take(up).map(|(path, _)| *path).collect();
    StubRoutes::new().routes(&paths, 200).start().await
}

fn pages_probe(base: &str) -> GroupAccessibilityProbe {
    let spec = GroupCheckSpec::new(0.8).with_routes(base, FRONTEND_PAGES, &[200]);
    GroupAccessibilityProbe::new("frontend pages", build_client().unwrap(), spec, TIMEOUT)
        .describing("pages")
}

#[tokio::test]
async fn test_eight_of_ten_pages_pass() {
    let frontend = frontend_with(8).await;

    let outcome = pages_probe(&frontend.url()).run().await;

    assert_eq!(outcome.status(), Status::Pass);
    assert_eq!(outcome.message(), "8/10 pages accessible");
}

#[tokio::test]
async fn test_seven_of_ten_pages_fail() {
    let frontend = frontend_with(7).await;

    let outcome = pages_probe(&frontend.url()).run().await;

    assert_eq!(outcome.status(), Status::Fail);
    assert_eq!(
        outcome.message(),
        "7/10 pages accessible; 3 failing: /proof(404), /influence(404), /verification(404)"
    );
}

fn api_probe(backend: &str, chain: &str) -> ApiAvailabilityProbe {
    api_probe_with_ratio(backend, chain, 0.7)
}

fn api_probe_with_ratio(backend: &str, chain: &str, ratio: f64) -> ApiAvailabilityProbe {
    let primary =
        GroupCheckSpec::new(ratio).with_routes(backend, BACKEND_APIS, BACKEND_API_ACCEPT);
    let auxiliary = GroupTarget::routes(chain, CHAIN_APIS, &[200]);
    ApiAvailabilityProbe::new(
        "API endpoints",
        build_client().unwrap(),
        primary,
        auxiliary,
        format!("{}/health", chain),
        TIMEOUT,
        Duration::from_secs(1),
    )
}

#[tokio::test]
async fn test_auth_protected_routes_count_as_available() {
    let backend = StubRoutes::new()
        .route("/api/users", 401, "")
        .route("/api/projects", 200, "[]")
        .route("/api/datasets", 403, "")
        .route("/api/publications", 200, "[]")
        .route("/api/reviews", 200, "[]")
        .route("/api/nfts", 200, "[]")
        .start()
        .await;

    let outcome = api_probe(&backend.url(), DOWN).run().await;

    assert_eq!(outcome.status(), Status::Pass);
    assert_eq!(
        outcome.message(),
        "6/6 APIs available; auxiliary service unavailable, 4 routes skipped"
    );
}

#[tokio::test]
async fn test_chain_routes_join_when_chain_is_alive() {
    let backend = StubRoutes::new()
        .routes(&["/api/users", "/api/projects", "/api/datasets"], 200)
        .start()
        .await;
    // Health answers 503: alive for gating, routes still count
    let chain = StubRoutes::new()
        .route("/health", 503, "")
        .routes(&["/api/hybrid/stats", "/api/hybrid/nfts", "/api/hybrid/compare"], 200)
        .start()
        .await;

    let outcome = api_probe(&backend.url(), &chain.url()).run().await;

    // 3 backend + 3 chain out of 10 is below 0.7
    assert_eq!(outcome.status(), Status::Fail);
    assert!(outcome.message().starts_with("6/10 APIs available; 4 failing: "));
    assert!(outcome.message().contains("NFT verification API(404)"));
    assert!(!outcome.message().contains("skipped"));
}

#[tokio::test]
async fn test_ratio_boundary_is_inclusive() {
    let backend = StubRoutes::new()
        .routes(
            &["/api/users", "/api/projects", "/api/datasets", "/api/publications"],
            200,
        )
        .start()
        .await;
    let chain = StubRoutes::new()
        .route("/health", 200, r#"{"status":"ok"}"#)
        .routes(&["/api/hybrid/stats", "/api/hybrid/nfts", "/api/hybrid/compare"], 200)
        .start()
        .await;

    let outcome = api_probe(&backend.url(), &chain.url()).run().await;

    assert_eq!(outcome.status(), Status::Pass);
    assert_eq!(outcome.message(), "7/10 APIs available");
}

#[tokio::test]
async fn test_backend_ratio_governs_combined_group() {
    let backend = StubRoutes::new()
        .routes(&["/api/users", "/api/projects", "/api/datasets"], 200)
        .start()
        .await;
    let chain = StubRoutes::new()
        .route("/health", 200, r#"{"status":"ok"}"#)
        .routes(&["/api/hybrid/stats", "/api/hybrid/nfts", "/api/hybrid/compare"], 200)
        .start()
        .await;

    // Same 6/10 sweep as above, now accepted at a 0.6 ratio
    let outcome = api_probe_with_ratio(&backend.url(), &chain.url(), 0.6).run().await;

    assert_eq!(outcome.status(), Status::Pass);
    assert_eq!(outcome.message(), "6/10 APIs available");
}
