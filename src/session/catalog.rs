//! The standard readiness session for the platform.
//!
//! Paths, routes and sentinels are owned here; hosts, timeouts and
//! thresholds come from [`Config`].

use reqwest::Client;

use crate::config::Config;
use crate::probe::{
    ApiAvailabilityProbe, ContractSourcesProbe, DatabaseIntrospectionProbe, DependencyMarker,
    DependencyProbe, ExistenceProbe, GroupAccessibilityProbe, GroupCheckSpec, GroupTarget,
    HttpReachabilityProbe, JsonHealthProbe, LatencySamplingProbe, Probe, StaticConfigProbe,
};

/// Files every checkout must carry.
pub const CRITICAL_FILES: &[&str] = &[
    "package.json",
    "frontend/package.json",
    "backend/package.json",
    "services/chain-api/go.mod",
    "contracts/hardhat.config.js",
    "docker-compose.yml",
    "README.md",
];

/// `(subsystem, marker)` pairs proving dependencies were installed.
pub const DEPENDENCY_MARKERS: &[(&str, &str)] = &[
    ("frontend", "frontend/node_modules"),
    ("backend", "backend/node_modules"),
    ("chain service", "services/chain-api/go.sum"),
];

pub const CONTRACT_SOURCES: &[&str] = &[
    "contracts/DeSciPlatform.sol",
    "contracts/ResearchNFT.sol",
    "contracts/DatasetManager.sol",
    "contracts/ZKPVerifier.sol",
    "contracts/InfluenceRanking.sol",
];

pub const CONTRACT_ARTIFACTS_DIR: &str = "contracts/artifacts";

pub const REQUIRED_TABLES: &[&str] = &["users", "projects", "datasets", "publications", "reviews", "nfts"];

/// Table whose row count is reported.
pub const SAMPLE_TABLE: &str = "projects";

/// Tried in order; `404` also proves the backend is up.
pub const BACKEND_HEALTH_PATHS: &[&str] = &["/health", "/api/health", "/"];

pub const CHAIN_HEALTH_PATH: &str = "/health";

pub const FRONTEND_PAGES: &[(&str, &str)] = &[
    ("/", "/"),
    ("/dashboard", "/dashboard"),
    ("/projects", "/projects"),
    ("/datasets", "/datasets"),
    ("/publications", "/publications"),
    ("/reviews", "/reviews"),
    ("/nft", "/nft"),
    ("/proof", "/proof"),
    ("/influence", "/influence"),
    ("/verification", "/verification"),
];

pub const BACKEND_APIS: &[(&str, &str)] = &[
    ("/api/users", "users API"),
    ("/api/projects", "projects API"),
    ("/api/datasets", "datasets API"),
    ("/api/publications", "publications API"),
    ("/api/reviews", "reviews API"),
    ("/api/nfts", "NFT API"),
];

/// Auth-protected routes still prove the route exists.
pub const BACKEND_API_ACCEPT: &[u16] = &[200, 401, 403];

pub const CHAIN_APIS: &[(&str, &str)] = &[
    ("/api/hybrid/stats", "hybrid stats API"),
    ("/api/hybrid/nfts", "hybrid NFT list API"),
    ("/api/hybrid/verify/demo-token-123", "NFT verification API"),
    ("/api/hybrid/compare", "source comparison API"),
];

pub const LATENCY_ENDPOINTS: &[&str] = &["/health", "/api/hybrid/stats", "/api/hybrid/nfts"];

pub const SENSITIVE_FILES: &[&str] = &[".env", "private.key", "secret.json"];

/// Build the ordered probe list of a standard session.
pub fn standard_probes(config: &Config, client: &Client) -> Vec<Box<dyn Probe>> {
    let root = &config.targets.project_root;
    let targets = &config.targets;
    let limits = &config.probes;
    let chain_health = format!("{}{}", targets.chain_service_url, CHAIN_HEALTH_PATH);

    let dependency_markers = DEPENDENCY_MARKERS
        .iter()
        .map(|(subsystem, path)| DependencyMarker::new(*subsystem, *path))
        .collect();

    let pages = GroupCheckSpec::new(limits.page_pass_ratio).with_routes(
        &targets.frontend_url,
        FRONTEND_PAGES,
        &[200],
    );
    let backend_apis = GroupCheckSpec::new(limits.api_pass_ratio).with_routes(
        &targets.backend_url,
        BACKEND_APIS,
        BACKEND_API_ACCEPT,
    );
    let chain_apis = GroupTarget::routes(&targets.chain_service_url, CHAIN_APIS, &[200]);

    let mut probes: Vec<Box<dyn Probe>> = Vec::with_capacity(11);
    probes.push(Box::new(ExistenceProbe::new(
        "project structure",
        root,
        CRITICAL_FILES.iter().copied(),
    )));
    probes.push(Box::new(DependencyProbe::new("dependencies", root, dependency_markers)));
    probes.push(Box::new(ContractSourcesProbe::new(
        "smart contracts",
        root,
        CONTRACT_SOURCES.iter().copied(),
        CONTRACT_ARTIFACTS_DIR,
    )));
    probes.push(Box::new(DatabaseIntrospectionProbe::new(
        "database",
        &targets.database_path,
        limits.database_min_bytes,
        REQUIRED_TABLES,
        SAMPLE_TABLE,
    )));
    probes.push(Box::new(HttpReachabilityProbe::new(
        "frontend service",
        client.clone(),
        &targets.frontend_url,
        limits.http_timeout,
    )));
    probes.push(Box::new(
        HttpReachabilityProbe::new(
            "backend service",
            client.clone(),
            &targets.backend_url,
            limits.http_timeout,
        )
        .with_paths(BACKEND_HEALTH_PATHS)
        .accepting(&[200, 404]),
    ));
    probes.push(Box::new(JsonHealthProbe::new(
        "chain service",
        client.clone(),
        chain_health.clone(),
        "status",
        "ok",
        limits.http_timeout,
    )));
    probes.push(Box::new(
        GroupAccessibilityProbe::new("frontend pages", client.clone(), pages, limits.page_timeout)
            .describing("pages"),
    ));
    probes.push(Box::new(ApiAvailabilityProbe::new(
        "API endpoints",
        client.clone(),
        backend_apis,
        chain_apis,
        chain_health,
        limits.page_timeout,
        limits.prerequisite_timeout,
    )));
    probes.push(Box::new(
        LatencySamplingProbe::new(
            "performance",
            client.clone(),
            &targets.chain_service_url,
            CHAIN_HEALTH_PATH,
            LATENCY_ENDPOINTS,
        )
        .with_budget(limits.latency_budget)
        .with_timeouts(limits.page_timeout, limits.prerequisite_timeout),
    ));
    probes.push(Box::new(StaticConfigProbe::new(
        "security config",
        root,
        ".gitignore",
        ".env",
        ".env.example",
        SENSITIVE_FILES,
    )));
    probes
}
