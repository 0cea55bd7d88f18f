//! Readiness probes.
//!
//! A probe checks one subsystem of the platform and always yields exactly one
//! [`Outcome`]. Unavailability of a subsystem is an expected result, not an
//! error: every probe converts its internal [`ProbeError`]s into a `FAIL`,
//! `WARN` or `SKIP` outcome before returning.
//!
//! # Available Probes
//!
//! | Probe | Subsystem | Failure status |
//! |-------|-----------|----------------|
//! | [`ExistenceProbe`] | project files | `FAIL` |
//! | [`DependencyProbe`] | installed packages | `FAIL` |
//! | [`ContractSourcesProbe`] | contract sources and build output | `FAIL` / `WARN` |
//! | [`DatabaseIntrospectionProbe`] | SQLite store | `FAIL` |
//! | [`HttpReachabilityProbe`] | any HTTP origin | configurable |
//! | [`JsonHealthProbe`] | JSON health endpoint | `FAIL` |
//! | [`GroupAccessibilityProbe`] | page sweep | `FAIL` |
//! | [`ApiAvailabilityProbe`] | API route sweep | `FAIL` |
//! | [`LatencySamplingProbe`] | response times | `WARN` / `SKIP` |
//! | [`StaticConfigProbe`] | ignore and secret files | `WARN` |

mod database;
mod error;
mod existence;
mod group;
mod http;
mod latency;
mod static_config;

use async_trait::async_trait;

use crate::outcome::Outcome;

pub use database::DatabaseIntrospectionProbe;
pub use error::ProbeError;
pub use existence::{ContractSourcesProbe, DependencyMarker, DependencyProbe, ExistenceProbe};
pub use group::{ApiAvailabilityProbe, GroupAccessibilityProbe, GroupCheckSpec, GroupTarget};
pub use http::{build_client, HttpReachabilityProbe, JsonHealthProbe};
pub use latency::LatencySamplingProbe;
pub use static_config::StaticConfigProbe;

/// A single readiness check.
///
/// `run` is total: it reports every failure through the returned outcome and
/// never propagates an error to the caller.
#[async_trait]
pub trait Probe: Send + Sync {
    /// Name recorded in the outcome and shown in the report.
    fn name(&self) -> &str;

    /// Execute the check once.
    async fn run(&self) -> Outcome;
}
