//! Readiness sessions.
//!
//! A session runs an ordered probe list exactly once and hands the filled
//! ledger to the reporter.

mod catalog;
mod runner;

pub use catalog::{
    standard_probes, BACKEND_APIS, BACKEND_API_ACCEPT, BACKEND_HEALTH_PATHS, CHAIN_APIS,
    CHAIN_HEALTH_PATH, CONTRACT_ARTIFACTS_DIR, CONTRACT_SOURCES, CRITICAL_FILES,
    DEPENDENCY_MARKERS, FRONTEND_PAGES, LATENCY_ENDPOINTS, REQUIRED_TABLES, SAMPLE_TABLE,
    SENSITIVE_FILES,
};
pub use runner::SessionRunner;
